//! JSON body extractor for handlers that treat a missing body as a distinct case.

use crate::errors::AppError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Json, Request},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// `Some(T)` for a JSON body that parses and validates, `None` when the body
/// is empty or the JSON literal `null`.
///
/// The content type is not checked, so clients that omit it still reach the
/// handler. Malformed JSON and failed validation reject with 400.
#[derive(Debug, Clone)]
pub struct OptionalValidatedJson<T>(pub Option<T>);

impl<T, S> FromRequest<S> for OptionalValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::InvalidJson(e.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(OptionalValidatedJson(None));
        }

        let Json(data) = Json::<Option<T>>::from_bytes(&bytes)?;
        if let Some(data) = &data {
            data.validate()?;
        }
        Ok(OptionalValidatedJson(data))
    }
}
