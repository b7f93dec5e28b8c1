use crate::Environment;
use tracing::{debug, info};
use tracing_subscriber::{prelude::*, EnvFilter};

/// Default directives when `RUST_LOG` is not set
const DEV_FILTER: &str = "debug,sea_orm=info,sqlx=warn,hyper=info,tower_http=debug";
const PROD_FILTER: &str = "info,sea_orm=warn,sqlx=warn,tower_http=info";

/// Install color-eyre with the workspace defaults.
///
/// Call this first in `main()`. Repeated calls are ignored.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Initialize the global subscriber.
///
/// - Production (`APP_ENV=production`): flattened JSON events, no targets.
/// - Development: pretty, human readable output.
///
/// Both variants carry `tracing_error::ErrorLayer` so eyre reports include span
/// traces. `RUST_LOG` overrides the default filter. Safe to call more than once
/// (later calls are no-ops), which tests rely on.
pub fn init_tracing(environment: &Environment) {
    let is_production = environment.is_production();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if is_production { PROD_FILTER } else { DEV_FILTER })
    });

    let result = if is_production {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_file(false)
                    .with_line_number(false)
                    .pretty(),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    };

    match result {
        Ok(_) => info!(environment = ?environment, "Tracing initialized"),
        Err(_) => debug!("Tracing already initialized, skipping re-initialization"),
    }
}
