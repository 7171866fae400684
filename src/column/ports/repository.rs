//! Repository port for board column persistence and layout queries.

use crate::column::domain::{BoardColumn, ColumnId, ColumnKey};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for column repository operations.
pub type ColumnRepositoryResult<T> = Result<T, ColumnRepositoryError>;

/// Board column persistence contract.
#[async_trait]
pub trait ColumnRepository: Send + Sync {
    /// Stores a new column.
    ///
    /// # Errors
    ///
    /// Returns [`ColumnRepositoryError::DuplicateColumn`] when the record ID
    /// already exists or [`ColumnRepositoryError::DuplicateColumnKey`] when
    /// the external key is already taken.
    async fn store(&self, column: &BoardColumn) -> ColumnRepositoryResult<()>;

    /// Persists changes to an existing column (title, display position,
    /// timestamps).
    ///
    /// # Errors
    ///
    /// Returns [`ColumnRepositoryError::NotFound`] when the column does not
    /// exist.
    async fn update(&self, column: &BoardColumn) -> ColumnRepositoryResult<()>;

    /// Removes a column record. Tasks referencing the column are unaffected.
    ///
    /// # Errors
    ///
    /// Returns [`ColumnRepositoryError::NotFound`] when the column does not
    /// exist.
    async fn delete(&self, id: ColumnId) -> ColumnRepositoryResult<()>;

    /// Finds a column by internal record identifier.
    ///
    /// Returns `None` when the column does not exist.
    async fn find_by_id(&self, id: ColumnId) -> ColumnRepositoryResult<Option<BoardColumn>>;

    /// Finds a column by unique external key.
    ///
    /// Returns `None` when no column carries the key.
    async fn find_by_key(&self, key: &ColumnKey) -> ColumnRepositoryResult<Option<BoardColumn>>;

    /// Returns all columns ordered by display position ascending.
    async fn list_all(&self) -> ColumnRepositoryResult<Vec<BoardColumn>>;

    /// Returns the number of stored columns.
    async fn count(&self) -> ColumnRepositoryResult<u64>;

    /// Returns the highest display position currently in use.
    ///
    /// Returns `None` when the store is empty.
    async fn max_display_order(&self) -> ColumnRepositoryResult<Option<i32>>;
}

/// Errors returned by column repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ColumnRepositoryError {
    /// A column with the same record identifier already exists.
    #[error("duplicate column identifier: {0}")]
    DuplicateColumn(ColumnId),

    /// A column with the same external key already exists.
    #[error("duplicate column key: {0}")]
    DuplicateColumnKey(ColumnKey),

    /// The column was not found.
    #[error("column not found: {0}")]
    NotFound(ColumnId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ColumnRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
