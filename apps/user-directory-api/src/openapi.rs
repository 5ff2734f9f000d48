use axum_helpers::server::{HealthResponse, ReadyResponse};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse, HealthResponse, ReadyResponse)
    ),
    info(
        title = "User Directory API",
        version = "0.1.0",
        description = "CRUD over a directory of users"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/users", api = domain_users::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
