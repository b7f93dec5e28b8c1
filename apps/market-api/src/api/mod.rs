use axum::Router;
use axum_helpers::server::health_router;
use std::io;

pub mod health;
pub mod products;

use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Domain routes at their public paths. Every sub-router has its state
/// applied already.
pub fn routes(state: &AppState) -> Router {
    Router::new().nest("/products", products::router(state))
}

/// `/ready`, checking the database on every call
pub fn ready_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}

/// The complete application: product routes, docs UIs, `/health` and `/ready`
pub async fn app(state: &AppState) -> io::Result<Router> {
    let router = axum_helpers::create_router::<ApiDoc>(routes(state)).await?;

    Ok(router
        .merge(health_router(state.config.app))
        .merge(ready_router(state.clone())))
}
