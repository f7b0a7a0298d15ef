use thiserror::Error;

use crate::domain::attribute_value::AttributeValueError;
use crate::repository::RepositoryError;

/// Result type returned by service use cases.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced to the HTTP layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("not found")]
    NotFound,
    /// A unique or foreign key constraint rejected the write.
    #[error("conflict: {0}")]
    Conflict(String),
    /// The request payload is invalid.
    #[error("{0}")]
    Form(String),
    /// The payload points at a record that does not exist.
    #[error("{0}")]
    InvalidReference(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<RepositoryError> for ServiceError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::ConstraintViolation(message) => ServiceError::Conflict(message),
            RepositoryError::AttributeType(err) => ServiceError::Form(err.to_string()),
            RepositoryError::AttributeValue(err @ AttributeValueError::InvalidValue { .. }) => {
                ServiceError::Form(err.to_string())
            }
            RepositoryError::AttributeValue(err @ AttributeValueError::AttributeNotFound(_)) => {
                ServiceError::InvalidReference(err.to_string())
            }
            RepositoryError::InvalidReference(message) => ServiceError::InvalidReference(message),
            other @ (RepositoryError::Database(_) | RepositoryError::Pool(_)) => {
                ServiceError::Internal(other.to_string())
            }
        }
    }
}
