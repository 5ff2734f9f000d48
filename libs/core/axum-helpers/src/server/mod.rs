//! Router assembly, health endpoints and graceful shutdown.
//!
//! ```ignore
//! let router =
//!     create_router::<ApiDoc>(api_routes, health_router(app_info!()), "/api", &config.server)?;
//!
//! create_production_app(router, &config.server, Duration::from_secs(30), async {}).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{OPENAPI_JSON_PATH, SWAGGER_UI_PATH, create_production_app, create_router};
pub use health::{
    HealthCheckFuture, HealthResponse, ReadyResponse, health_handler, health_router,
    run_health_checks,
};
pub use shutdown::{ShutdownCoordinator, shutdown_signal};
