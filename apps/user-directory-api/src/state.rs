//! Shared application state.

use database::postgres::DatabaseConnection;

/// Built once in `main` and handed to the route builders.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    /// PostgreSQL pool, present when `USER_STORE=postgres`
    pub db: Option<DatabaseConnection>,
}
