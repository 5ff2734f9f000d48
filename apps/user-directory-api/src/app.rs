use axum::Router;
use axum_helpers::server::{create_router, health_router};
use std::io;

use crate::api;
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// The full HTTP surface: users API under the prefix, docs, `/health` and `/ready`.
pub fn build_app(state: AppState) -> io::Result<Router> {
    let api_routes = api::routes(&state);
    let root_routes = health_router(state.config.app).merge(api::ready_router(state.clone()));

    create_router::<ApiDoc>(
        api_routes,
        root_routes,
        &state.config.routes.api_prefix,
        &state.config.server,
    )
}
