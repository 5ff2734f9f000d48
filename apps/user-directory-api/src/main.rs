use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod app;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Before any fallible operation, so startup errors are colored
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    let db = match &config.store.database {
        Some(db_config) => {
            let db = database::postgres::connect_from_config_with_retry(db_config, None)
                .await
                .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

            database::postgres::run_migrations::<migration::Migrator>(&db, config.app.name)
                .await
                .map_err(|e| eyre::eyre!("Migrations failed: {}", e))?;

            Some(db)
        }
        None => None,
    };

    info!(
        store = %config.store.backend,
        collection = %config.routes.collection_url(),
        "Configuration loaded"
    );

    let state = AppState { config, db };
    let app = app::build_app(state.clone())?;

    info!(
        timeout = ?state.config.shutdown_timeout,
        "Starting user directory API with graceful shutdown"
    );

    let server_config = state.config.server.clone();
    let shutdown_timeout = state.config.shutdown_timeout;

    create_production_app(app, &server_config, shutdown_timeout, async move {
        if let Some(db) = state.db {
            info!("Shutting down: closing database connections");
            match db.close().await {
                Ok(()) => info!("PostgreSQL connection closed successfully"),
                Err(e) => tracing::error!("Error closing PostgreSQL: {}", e),
            }
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("User directory API shutdown complete");
    Ok(())
}
