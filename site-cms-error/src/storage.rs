use sea_orm::{DbErr, SqlErr, TransactionError};
use thiserror::Error;

#[derive(Error, Debug, Default)]
pub enum StorageError {
    #[error("database unavailable")]
    #[default]
    StorageUnavailable,

    #[error("database error: `{0}`")]
    DBError(#[from] DbErr),

    #[error("entity not found: {0}")]
    EntityNotFound(String),

    /// A unique business key is already taken.
    #[error("conflict: {0}")]
    Conflict(String),

    /// A stored value could not be decoded into its declared type.
    #[error("invalid stored data: {0}")]
    InvalidData(String),

    /// The caller supplied arguments the operation cannot act on.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl StorageError {
    /// Whether the underlying driver reported a unique constraint violation.
    #[inline]
    pub fn is_unique_violation(&self) -> bool {
        match self {
            StorageError::Conflict(_) => true,
            StorageError::DBError(e) => {
                matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
            }
            _ => false,
        }
    }
}

impl From<TransactionError<StorageError>> for StorageError {
    #[inline]
    fn from(e: TransactionError<StorageError>) -> Self {
        match e {
            TransactionError::Connection(e) => StorageError::DBError(e),
            TransactionError::Transaction(e) => e,
        }
    }
}
