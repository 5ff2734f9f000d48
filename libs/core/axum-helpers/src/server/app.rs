use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::{method_not_allowed, not_found};
use crate::http::security::security_headers;
use axum::http::{HeaderValue, Method, header};
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::future::{Future, IntoFuture};
use std::io;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";
pub const SWAGGER_UI_PATH: &str = "/swagger-ui";

fn cors_layer(origins: &[String]) -> io::Result<Option<CorsLayer>> {
    if origins.is_empty() {
        return Ok(None);
    }

    let allowed = origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid CORS_ALLOWED_ORIGIN value: {e}"),
            )
        })?;

    info!(origins = ?origins, "CORS enabled");

    Ok(Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(allowed))
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
            .expose_headers([header::LOCATION])
            .max_age(Duration::from_secs(3600)),
    ))
}

/// Wraps the API routes with docs and the shared middleware stack.
///
/// - `apis` is mounted under `prefix`; an empty prefix or `/` mounts at the root
/// - `root` routes (health checks) are mounted as-is, outside the prefix
/// - OpenAPI JSON at [`OPENAPI_JSON_PATH`], Swagger UI at [`SWAGGER_UI_PATH`]
/// - JSON 404 for anything unmatched, JSON 405 for a known path with the wrong method
/// - tracing, security headers, optional CORS and compression
///
/// # Errors
/// Fails when a configured CORS origin is not a valid header value.
pub fn create_router<T>(
    apis: Router,
    root: Router,
    prefix: &str,
    server_config: &ServerConfig,
) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    let prefix = prefix.trim_end_matches('/');
    let docs = SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, T::openapi());

    let router = Router::new().merge(docs).merge(root);
    let router = if prefix.is_empty() {
        router.merge(apis)
    } else {
        router.nest(prefix, apis)
    };

    let router = router
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers));

    let router = match cors_layer(&server_config.cors_allowed_origins)? {
        Some(cors) => router.layer(cors),
        None => router,
    };

    Ok(router.layer(CompressionLayer::new()))
}

/// Serves `router` until SIGINT/SIGTERM, then drains and runs `cleanup`.
///
/// Draining in-flight requests and `cleanup` each get at most
/// `shutdown_timeout`; past that the function logs and returns.
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let coordinator = ShutdownCoordinator::default();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let graceful = {
        let coordinator = coordinator.clone();
        async move { coordinator.wait_for_signal().await }
    };
    let server = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(graceful)
        .into_future();

    let drain_deadline = async {
        coordinator.wait_for_signal().await;
        tokio::time::sleep(shutdown_timeout).await;
    };

    let serve_result = tokio::select! {
        result = server => result.inspect_err(|e| tracing::error!("Server encountered an error: {:?}", e)),
        _ = drain_deadline => {
            warn!(?shutdown_timeout, "In-flight requests did not drain in time");
            Ok(())
        }
    };

    info!(?shutdown_timeout, "Running cleanup");
    match tokio::time::timeout(shutdown_timeout, cleanup).await {
        Ok(()) => info!("Cleanup completed"),
        Err(_) => warn!(?shutdown_timeout, "Cleanup exceeded timeout, forcing shutdown"),
    }

    serve_result
}
