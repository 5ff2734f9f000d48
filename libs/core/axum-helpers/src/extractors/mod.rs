//! Extractors that reject with [`AppError`](crate::errors::AppError) so every
//! failure renders the shared error body.

pub mod optional_json;
pub mod uuid_path;
pub mod validated_json;

pub use optional_json::OptionalValidatedJson;
pub use uuid_path::UuidPath;
pub use validated_json::ValidatedJson;
