//! Error types for column domain validation.

use super::EmptyColumnKeyError;
use thiserror::Error;

/// Errors returned while constructing domain column values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ColumnDomainError {
    /// The column key failed validation.
    #[error(transparent)]
    InvalidKey(#[from] EmptyColumnKeyError),

    /// The column title is empty after trimming.
    #[error("column title must not be empty")]
    EmptyTitle,
}
