use axum::Router;

pub mod health;
pub mod users;

/// API routes without the prefix, which `create_router` adds.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new().nest(&state.config.routes.users_path, users::router(state))
}

/// `/ready`, checking the database when one is configured.
///
/// Has its state applied so it merges into the stateless app router.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
