use models::errors::ModelError;
use thiserror::Error;

/// Failures a local operation can report to its caller.
///
/// Remote marks failures are not here: they never leave the composite lookup
/// (see `marks_client::RemoteError`).
#[derive(Debug, Error, PartialEq)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => Self::Validation(msg),
        }
    }
}
