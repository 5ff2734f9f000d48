use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("User {0} not found")]
    NotFound(Uuid),

    /// The request named no usable user id
    #[error("A user id is required")]
    MissingId,

    /// An update carried no user body
    #[error("A user body is required")]
    MissingPayload,

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("User {0} already exists")]
    DuplicateId(Uuid),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) | UserError::MissingId | UserError::MissingPayload => {
                AppError::NotFound(err.to_string())
            }
            UserError::Validation(errors) => AppError::ValidationError(errors),
            UserError::DuplicateId(_) => AppError::Conflict(err.to_string()),
            UserError::Database(db) => AppError::Database(db),
            UserError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
