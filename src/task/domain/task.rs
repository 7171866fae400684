//! Task aggregate root and its mutation rules.

use super::{TaskId, TaskPriority, TaskStatus, TaskTitle};
use crate::column::domain::ColumnKey;
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
///
/// The status and the column key are independently settable. Moving a task
/// to one of the reserved keys ("todo"/"doing"/"done") forces the status to
/// match; moving to a custom key leaves the status unchanged; changing the
/// status always pulls the task into the matching reserved column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: Option<String>,
    assignee: Option<String>,
    priority: TaskPriority,
    status: TaskStatus,
    due_date: Option<NaiveDate>,
    column_key: ColumnKey,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for creating a new task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTaskData {
    /// Validated task title.
    pub title: TaskTitle,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Optional assignee.
    pub assignee: Option<String>,
    /// Task priority.
    pub priority: TaskPriority,
    /// Task status.
    pub status: TaskStatus,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
    /// Column placement.
    pub column_key: ColumnKey,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted assignee, if any.
    pub assignee: Option<String>,
    /// Persisted priority.
    pub priority: TaskPriority,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted due date, if any.
    pub due_date: Option<NaiveDate>,
    /// Persisted column placement.
    pub column_key: ColumnKey,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Replacement field set applied by a full task update.
///
/// Every field replaces the stored value except `column_key`, which is only
/// overwritten when explicitly provided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskUpdate {
    /// Replacement title.
    pub title: TaskTitle,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement assignee.
    pub assignee: Option<String>,
    /// Replacement priority.
    pub priority: TaskPriority,
    /// Replacement status.
    pub status: TaskStatus,
    /// Replacement due date.
    pub due_date: Option<NaiveDate>,
    /// Replacement column placement, when explicitly provided.
    pub column_key: Option<ColumnKey>,
}

impl Task {
    /// Creates a new task.
    #[must_use]
    pub fn new(data: NewTaskData, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            title: data.title,
            description: data.description,
            assignee: data.assignee,
            priority: data.priority,
            status: data.status,
            due_date: data.due_date,
            column_key: data.column_key,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            assignee: data.assignee,
            priority: data.priority,
            status: data.status,
            due_date: data.due_date,
            column_key: data.column_key,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the assignee, if any.
    #[must_use]
    pub fn assignee(&self) -> Option<&str> {
        self.assignee.as_deref()
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the column placement.
    #[must_use]
    pub const fn column_key(&self) -> &ColumnKey {
        &self.column_key
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies a full field replacement.
    ///
    /// The column placement is kept unless the update names one.
    pub fn apply_update(&mut self, update: TaskUpdate, clock: &impl Clock) {
        self.title = update.title;
        self.description = update.description;
        self.assignee = update.assignee;
        self.priority = update.priority;
        self.status = update.status;
        self.due_date = update.due_date;
        if let Some(column_key) = update.column_key {
            self.column_key = column_key;
        }
        self.touch(clock);
    }

    /// Changes the status and pulls the task into the matching reserved
    /// column, regardless of its previous placement.
    pub fn change_status(&mut self, status: TaskStatus, clock: &impl Clock) {
        self.status = status;
        self.column_key = status.default_column_key();
        self.touch(clock);
    }

    /// Moves the task to a column.
    ///
    /// A reserved key also updates the status; a custom key leaves it
    /// untouched.
    pub fn move_to_column(&mut self, column_key: ColumnKey, clock: &impl Clock) {
        if let Some(status) = TaskStatus::for_column_key(&column_key) {
            self.status = status;
        }
        self.column_key = column_key;
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
