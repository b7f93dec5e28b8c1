use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use super::PostgresConfig;
use crate::common::{retry_with_backoff, DatabaseError, DatabaseResult, RetryConfig};

pub async fn connect_with_options(options: ConnectOptions) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(options).await?;
    info!("Connected to PostgreSQL");
    Ok(db)
}

/// Connect, retrying with exponential backoff.
///
/// Startup ordering in containers is not guaranteed, so the database may
/// still be booting when the API starts.
///
/// ```ignore
/// use core_config::FromEnv;
/// use database::common::RetryConfig;
/// use database::postgres::{connect_from_config_with_retry, PostgresConfig};
///
/// let db = connect_from_config_with_retry(
///     PostgresConfig::from_env()?,
///     Some(RetryConfig::new().with_max_retries(5)),
/// )
/// .await?;
/// ```
pub async fn connect_from_config_with_retry(
    config: PostgresConfig,
    retry_config: Option<RetryConfig>,
) -> DatabaseResult<DatabaseConnection> {
    let target = config.redacted_url();
    let retry_config = retry_config.unwrap_or_default();
    let attempts = retry_config.max_retries + 1;
    let options = config.into_connect_options();

    info!(url = %target, attempts, "Connecting to PostgreSQL");

    retry_with_backoff(|| connect_with_options(options.clone()), retry_config)
        .await
        .map_err(|e| {
            DatabaseError::ConnectionFailed(format!(
                "{} unreachable after {} attempts: {}",
                target, attempts, e
            ))
        })
}

/// Apply all pending migrations of `M`
pub async fn run_migrations<M: MigratorTrait>(
    db: &DatabaseConnection,
    app_name: &str,
) -> DatabaseResult<()> {
    info!(app = app_name, "Running database migrations");
    M::up(db, None)
        .await
        .map_err(|e| DatabaseError::MigrationError(e.to_string()))?;
    info!(app = app_name, "Migrations completed");
    Ok(())
}
