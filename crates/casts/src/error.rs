//! Storage cast errors.

use thiserror::Error;

use coinage_money::MoneyError;

/// Result type used across the casts crate.
pub type CastResult<T> = Result<T, CastError>;

/// Failure at the storage boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CastError {
    /// The underlying value layer rejected the operation.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// No cast definition registered under the requested type tag.
    #[error("no cast registered for type tag {0:?}")]
    UnknownCast(String),

    /// An amount does not fit the integer storage column.
    #[error("stored amount out of range for an integer column: {0}")]
    StorageRange(i128),
}
