//! Repository port for task persistence, lookup, and board queries.

use crate::column::domain::ColumnKey;
use crate::task::domain::{Task, TaskId, TaskStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Ordered queries sort priority-descending (high first) with creation time
/// ascending as the tie-break; the full listing groups by status in board
/// order first.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID
    /// already exists.
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Persists changes to an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Removes a task record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns all tasks grouped by status, then priority descending, then
    /// creation time ascending.
    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns tasks with the given status, priority descending then
    /// creation time ascending.
    async fn list_by_status(&self, status: TaskStatus) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns tasks assigned to the given assignee.
    async fn list_by_assignee(&self, assignee: &str) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns tasks placed in the given column, creation time ascending.
    async fn list_by_column(&self, column_key: &ColumnKey) -> TaskRepositoryResult<Vec<Task>>;

    /// Counts tasks with the given status.
    async fn count_by_status(&self, status: TaskStatus) -> TaskRepositoryResult<u64>;

    /// Counts tasks placed in the given column.
    async fn count_by_column(&self, column_key: &ColumnKey) -> TaskRepositoryResult<u64>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
