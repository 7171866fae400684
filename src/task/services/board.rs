//! Service layer for task creation, mutation, and board queries.

use crate::column::domain::ColumnKey;
use crate::task::{
    domain::{
        NewTaskData, Task, TaskDomainError, TaskId, TaskPriority, TaskStatus, TaskTitle,
        TaskUpdate,
    },
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    assignee: Option<String>,
    priority: TaskPriority,
    status: Option<TaskStatus>,
    due_date: Option<NaiveDate>,
    column_key: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with required task fields.
    #[must_use]
    pub fn new(title: impl Into<String>, priority: TaskPriority) -> Self {
        Self {
            title: title.into(),
            description: None,
            assignee: None,
            priority,
            status: None,
            due_date: None,
            column_key: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    /// Sets an explicit status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets an explicit column placement.
    #[must_use]
    pub fn with_column_key(mut self, column_key: impl Into<String>) -> Self {
        self.column_key = Some(column_key.into());
        self
    }
}

/// Request payload for a full task update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    title: String,
    description: Option<String>,
    assignee: Option<String>,
    priority: TaskPriority,
    status: TaskStatus,
    due_date: Option<NaiveDate>,
    column_key: Option<String>,
}

impl UpdateTaskRequest {
    /// Creates a request with required replacement fields.
    #[must_use]
    pub fn new(title: impl Into<String>, priority: TaskPriority, status: TaskStatus) -> Self {
        Self {
            title: title.into(),
            description: None,
            assignee: None,
            priority,
            status,
            due_date: None,
            column_key: None,
        }
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the replacement assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    /// Sets the replacement due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets an explicit replacement column placement.
    #[must_use]
    pub fn with_column_key(mut self, column_key: impl Into<String>) -> Self {
        self.column_key = Some(column_key.into());
        self
    }
}

/// Service-level errors for task board operations.
#[derive(Debug, Error)]
pub enum TaskBoardError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task board service operations.
pub type TaskBoardResult<T> = Result<T, TaskBoardError>;

/// Task board orchestration service.
pub struct TaskBoardService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for TaskBoardService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TaskBoardService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task board service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a new task.
    ///
    /// An absent status defaults to [`TaskStatus::Todo`]; an absent or empty
    /// column key derives from the status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Domain`] when validation fails and
    /// [`TaskBoardError::Repository`] when persistence fails.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskBoardResult<Task> {
        let title = TaskTitle::new(request.title)?;
        let status = request.status.unwrap_or(TaskStatus::Todo);
        let column_key = match request.column_key {
            Some(raw) if !raw.trim().is_empty() => {
                ColumnKey::new(raw).map_err(TaskDomainError::from)?
            }
            _ => status.default_column_key(),
        };

        let task = Task::new(
            NewTaskData {
                title,
                description: request.description,
                assignee: request.assignee,
                priority: request.priority,
                status,
                due_date: request.due_date,
                column_key,
            },
            &*self.clock,
        );
        self.repository.store(&task).await?;
        Ok(task)
    }

    /// Replaces all task fields; the column placement only changes when the
    /// request names one.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] with
    /// [`TaskRepositoryError::NotFound`] when the task does not exist and
    /// [`TaskBoardError::Domain`] when validation fails.
    pub async fn update_task(
        &self,
        id: TaskId,
        request: UpdateTaskRequest,
    ) -> TaskBoardResult<Task> {
        let mut task = self.find_existing(id).await?;

        let update = TaskUpdate {
            title: TaskTitle::new(request.title)?,
            description: request.description,
            assignee: request.assignee,
            priority: request.priority,
            status: request.status,
            due_date: request.due_date,
            column_key: request
                .column_key
                .map(|raw| ColumnKey::new(raw).map_err(TaskDomainError::from))
                .transpose()?,
        };
        task.apply_update(update, &*self.clock);

        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Sets the status and forces the column placement to the matching
    /// reserved key.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] with
    /// [`TaskRepositoryError::NotFound`] when the task does not exist.
    pub async fn update_status(
        &self,
        id: TaskId,
        new_status: TaskStatus,
    ) -> TaskBoardResult<Task> {
        let mut task = self.find_existing(id).await?;
        task.change_status(new_status, &*self.clock);
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Moves the task to a column; a reserved key synchronizes the status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] with
    /// [`TaskRepositoryError::NotFound`] when the task does not exist and
    /// [`TaskBoardError::Domain`] when the key is invalid.
    pub async fn move_to_column(
        &self,
        id: TaskId,
        column_key: impl Into<String>,
    ) -> TaskBoardResult<Task> {
        let key = ColumnKey::new(column_key).map_err(TaskDomainError::from)?;
        let mut task = self.find_existing(id).await?;
        task.move_to_column(key, &*self.clock);
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] with
    /// [`TaskRepositoryError::NotFound`] when the task does not exist.
    pub async fn delete_task(&self, id: TaskId) -> TaskBoardResult<()> {
        self.repository.delete(id).await?;
        Ok(())
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when the lookup fails.
    pub async fn get_task(&self, id: TaskId) -> TaskBoardResult<Option<Task>> {
        let result: TaskRepositoryResult<Option<Task>> = self.repository.find_by_id(id).await;
        Ok(result?)
    }

    /// Returns all tasks grouped by status, priority descending, creation
    /// ascending.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when the listing fails.
    pub async fn list_tasks(&self) -> TaskBoardResult<Vec<Task>> {
        let result: TaskRepositoryResult<Vec<Task>> = self.repository.list_all().await;
        Ok(result?)
    }

    /// Returns tasks with the given status, priority descending, creation
    /// ascending.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when the listing fails.
    pub async fn list_by_status(&self, status: TaskStatus) -> TaskBoardResult<Vec<Task>> {
        let result: TaskRepositoryResult<Vec<Task>> =
            self.repository.list_by_status(status).await;
        Ok(result?)
    }

    /// Returns tasks assigned to the given assignee.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when the listing fails.
    pub async fn list_by_assignee(&self, assignee: &str) -> TaskBoardResult<Vec<Task>> {
        let result: TaskRepositoryResult<Vec<Task>> =
            self.repository.list_by_assignee(assignee).await;
        Ok(result?)
    }

    /// Returns tasks placed in the given column, creation ascending.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when the listing fails and
    /// [`TaskBoardError::Domain`] when the key is invalid.
    pub async fn list_by_column(&self, column_key: impl Into<String>) -> TaskBoardResult<Vec<Task>> {
        let key = ColumnKey::new(column_key).map_err(TaskDomainError::from)?;
        let result: TaskRepositoryResult<Vec<Task>> =
            self.repository.list_by_column(&key).await;
        Ok(result?)
    }

    /// Counts tasks with the given status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when the count fails.
    pub async fn count_by_status(&self, status: TaskStatus) -> TaskBoardResult<u64> {
        let result: TaskRepositoryResult<u64> = self.repository.count_by_status(status).await;
        Ok(result?)
    }

    /// Counts tasks placed in the given column.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when the count fails and
    /// [`TaskBoardError::Domain`] when the key is invalid.
    pub async fn count_by_column(&self, column_key: impl Into<String>) -> TaskBoardResult<u64> {
        let key = ColumnKey::new(column_key).map_err(TaskDomainError::from)?;
        let result: TaskRepositoryResult<u64> = self.repository.count_by_column(&key).await;
        Ok(result?)
    }

    async fn find_existing(&self, id: TaskId) -> TaskBoardResult<Task> {
        let task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskRepositoryError::NotFound(id))?;
        Ok(task)
    }
}
