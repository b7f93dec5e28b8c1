//! Market API - supermarket inventory over REST

use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use database::postgres::{connect_from_config_with_retry, run_migrations};
use migration::Migrator;
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Before any fallible operation so startup errors are reported in color
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let db = connect_from_config_with_retry(config.database.clone(), Some(config.retry.clone()))
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    if config.run_migrations {
        run_migrations::<Migrator>(&db, config.app.name).await?;
    } else {
        info!("RUN_MIGRATIONS=false, skipping migrations");
    }

    let state = AppState { config, db };

    // /health: liveness with name and version
    // /ready: readiness with a database round trip
    let app = api::app(&state).await?;

    info!("Starting market API (30s shutdown timeout)");

    let AppState { config, db } = state;
    create_production_app(
        app,
        &config.server,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: closing database connections");
            match db.close().await {
                Ok(_) => info!("PostgreSQL connection closed successfully"),
                Err(e) => tracing::error!("Error closing PostgreSQL: {}", e),
            }
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Market API shutdown complete");
    Ok(())
}
