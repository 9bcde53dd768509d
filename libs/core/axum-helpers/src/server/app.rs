use super::shutdown::{ShutdownCoordinator, coordinated_shutdown};
use crate::errors::handlers::not_found;
use crate::http::{cors, security::security_headers};
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::io;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tokio::task::JoinHandle;
use tracing::{Level, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Combine domain routes with the cross-cutting layers.
///
/// - Swagger UI at `/swagger-ui`, spec at `/api-docs/openapi.json`
/// - `apis` nested under `/api`
/// - request tracing, security headers, response compression
/// - JSON 404 fallback
/// - CORS, only when `CORS_ALLOWED_ORIGIN` is set (comma-separated origins)
///
/// Domain routers apply their own state before being passed in.
///
/// # Errors
/// Fails when `CORS_ALLOWED_ORIGIN` is set but contains an invalid or no origin.
pub fn create_router<T>(apis: Router) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    let mut router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .nest("/api", apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(CompressionLayer::new());

    if let Ok(raw) = std::env::var("CORS_ALLOWED_ORIGIN") {
        let origins = cors::parse_allowed_origins(&raw).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid CORS_ALLOWED_ORIGIN value: {}", e),
            )
        })?;

        if origins.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "CORS_ALLOWED_ORIGIN cannot be empty",
            ));
        }

        info!("CORS configured with allowed origins: {}", raw);
        router = router.layer(cors::create_cors_layer(origins));
    } else {
        info!("CORS_ALLOWED_ORIGIN not set, cross-origin requests are not enabled");
    }

    Ok(router)
}

/// Run `cleanup` once `coordinator` signals shutdown, bounded by
/// `shutdown_timeout`. On expiry the cleanup is abandoned.
fn spawn_cleanup<F>(
    coordinator: &ShutdownCoordinator,
    shutdown_timeout: Duration,
    cleanup: F,
) -> JoinHandle<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let mut shutdown_rx = coordinator.subscribe();

    tokio::spawn(async move {
        let _ = shutdown_rx.recv().await;

        info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
        match tokio::time::timeout(shutdown_timeout, cleanup).await {
            Ok(_) => info!("Cleanup completed successfully"),
            Err(_) => tracing::warn!(
                "Cleanup exceeded timeout of {:?}, forcing shutdown",
                shutdown_timeout
            ),
        }
    })
}

/// Serve `router` and run `cleanup` once the server stops.
///
/// The server stops on Ctrl+C, SIGTERM, or a serve error. `cleanup` runs in
/// every case and is bounded by `shutdown_timeout`.
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let (coordinator, _rx) = ShutdownCoordinator::new();
    let shutdown_handle = coordinator.clone();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let cleanup_handle = spawn_cleanup(&shutdown_handle, shutdown_timeout, cleanup);

    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(coordinated_shutdown(coordinator))
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    // No-op after a signal; releases the cleanup task when serve failed first.
    shutdown_handle.shutdown();
    cleanup_handle.await.ok();

    serve_result
}
