use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::not_found;
use crate::http::{create_cors_layer, parse_allowed_origins, security_headers};
use axum::{Router, ServiceExt, extract::Request, middleware};
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use std::time::Duration;
use tower::Layer;
use tower_http::compression::CompressionLayer;
use tower_http::cors::AllowOrigin;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;

/// Wrap the router so `/products/` and `/products` route the same.
///
/// Must sit outside the router: path rewriting after routing has no effect.
pub fn normalize_paths(router: Router) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Assemble the public router around the domain routes.
///
/// - `apis` is merged at the root, so its own prefixes are the public paths;
///   it must already carry its own state
/// - OpenAPI documents of `T` are served at `/swagger-ui`, `/redoc`,
///   `/rapidoc` and `/scalar`, with the raw JSON at `/api-docs/openapi.json`
/// - unknown paths fall back to a JSON 404
/// - every response is traced, compressed and gets the security headers
///
/// `CORS_ALLOWED_ORIGIN` must hold a comma-separated origin list, e.g.
/// `http://localhost:3000,https://market.example`. Startup fails without it.
///
/// Health endpoints are not included; merge [`super::health_router`] and a
/// readiness route into the result.
pub async fn create_router<T>(apis: Router) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    use utoipa_rapidoc::RapiDoc;
    use utoipa_redoc::{Redoc, Servable as RedocServable};
    use utoipa_scalar::{Scalar, Servable as ScalarServable};
    use utoipa_swagger_ui::SwaggerUi;

    let origins_str = std::env::var("CORS_ALLOWED_ORIGIN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "CORS_ALLOWED_ORIGIN environment variable is required. Example: CORS_ALLOWED_ORIGIN=http://localhost:3000",
        )
    })?;
    let allowed_origins = parse_allowed_origins(&origins_str)?;
    info!("CORS configured with allowed origins: {}", origins_str);

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .merge(apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(create_cors_layer(AllowOrigin::list(allowed_origins)))
        .layer(CompressionLayer::new());

    Ok(router)
}

/// Serve `router` and run `cleanup` once shutdown begins.
///
/// In-flight requests are drained while `cleanup` runs; `cleanup` is
/// abandoned after `shutdown_timeout`.
///
/// ```ignore
/// let db_for_cleanup = db.clone();
/// create_production_app(router, &config, Duration::from_secs(30), async move {
///     db_for_cleanup.close().await.ok();
/// })
/// .await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (coordinator, mut shutdown_rx) = ShutdownCoordinator::new();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let cleanup_handle = tokio::spawn(async move {
        if shutdown_rx.recv().await.is_err() {
            return;
        }

        info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
        match tokio::time::timeout(shutdown_timeout, cleanup).await {
            Ok(()) => info!("Cleanup completed successfully"),
            Err(_) => tracing::warn!(
                "Cleanup exceeded timeout of {:?}, forcing shutdown",
                shutdown_timeout
            ),
        }
    });

    let signal_coordinator = coordinator.clone();
    let app = normalize_paths(router);
    let serve_result = axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(async move { signal_coordinator.wait_for_signal().await })
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    // Server stopped on its own (e.g. an accept error): still release resources.
    coordinator.shutdown();
    cleanup_handle.await.ok();

    serve_result
}
