use axum::Router;
use domain_users::{InMemoryUserRepository, PgUserRepository, UserService, handlers};
use tracing::info;

use crate::state::AppState;

/// Users routes over whichever store the state carries.
pub fn router(state: &AppState) -> Router {
    let collection_url = state.config.routes.collection_url();
    let id_policy = state.config.store.id_policy;

    match &state.db {
        Some(db) => {
            info!(%id_policy, "Serving users from PostgreSQL");
            let service = UserService::new(PgUserRepository::new(db.clone()))
                .with_id_policy(id_policy);
            handlers::router(service, collection_url)
        }
        None => {
            info!(%id_policy, "Serving users from memory");
            let service =
                UserService::new(InMemoryUserRepository::new()).with_id_policy(id_policy);
            handlers::router(service, collection_url)
        }
    }
}
