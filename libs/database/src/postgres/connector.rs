use sea_orm::{Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::{info, instrument};

use super::PostgresConfig;
use crate::common::{retry_with_backoff, DatabaseError, RetryConfig};

/// Open a pool with the settings in `config`, without retrying.
pub async fn connect_from_config(config: &PostgresConfig) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(config.connect_options()).await?;
    info!(
        max_connections = config.max_connections,
        "Connected to PostgreSQL"
    );
    Ok(db)
}

/// Open a pool, retrying with exponential backoff while the server is unreachable.
///
/// `retry_config` defaults to [`PostgresConfig::retry_config`].
#[instrument(skip_all)]
pub async fn connect_from_config_with_retry(
    config: &PostgresConfig,
    retry_config: Option<RetryConfig>,
) -> Result<DatabaseConnection, DatabaseError> {
    let retry = retry_config.unwrap_or_else(|| config.retry_config());
    let attempts = retry.max_retries + 1;

    retry_with_backoff(|| connect_from_config(config), retry)
        .await
        .map_err(|e| {
            DatabaseError::ConnectionFailed(format!("gave up after {attempts} attempt(s): {e}"))
        })
}

/// Apply every pending migration of `M`.
pub async fn run_migrations<M: MigratorTrait>(
    db: &DatabaseConnection,
    app_name: &str,
) -> Result<(), DatabaseError> {
    info!(app = app_name, "Running database migrations");
    M::up(db, None)
        .await
        .map_err(|e| DatabaseError::MigrationError(e.to_string()))?;
    info!(app = app_name, "Migrations completed");
    Ok(())
}
