use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

use crate::domain::attribute_type::AttributeTypeError;
use crate::domain::attribute_value::AttributeValueError;
use crate::domain::user::InvalidRole;

/// Result type returned by every repository operation.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors surfaced by the storage layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    /// Unique, foreign key, not-null or check constraint rejected the write.
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
    #[error(transparent)]
    AttributeType(#[from] AttributeTypeError),
    #[error(transparent)]
    AttributeValue(#[from] AttributeValueError),
    /// A referenced record (parent, owner, ...) does not exist.
    #[error("invalid reference: {0}")]
    InvalidReference(String),
    #[error("database error: {0}")]
    Database(String),
    #[error("connection pool error: {0}")]
    Pool(String),
}

impl RepositoryError {
    /// Whether the error is the unique index on a `slug` column firing.
    pub fn is_slug_conflict(&self) -> bool {
        matches!(self, RepositoryError::ConstraintViolation(message) if message.contains(".slug"))
    }
}

impl From<DieselError> for RepositoryError {
    fn from(value: DieselError) -> Self {
        match value {
            DieselError::NotFound => RepositoryError::NotFound,
            DieselError::DatabaseError(
                DatabaseErrorKind::UniqueViolation
                | DatabaseErrorKind::ForeignKeyViolation
                | DatabaseErrorKind::NotNullViolation
                | DatabaseErrorKind::CheckViolation,
                info,
            ) => RepositoryError::ConstraintViolation(info.message().to_string()),
            DieselError::DatabaseError(_, info) if info.message().contains("constraint failed") => {
                RepositoryError::ConstraintViolation(info.message().to_string())
            }
            other => RepositoryError::Database(other.to_string()),
        }
    }
}

impl From<diesel::r2d2::PoolError> for RepositoryError {
    fn from(value: diesel::r2d2::PoolError) -> Self {
        RepositoryError::Pool(value.to_string())
    }
}

impl From<InvalidRole> for RepositoryError {
    fn from(value: InvalidRole) -> Self {
        RepositoryError::Database(format!("stored user row is corrupt: {value}"))
    }
}
