//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Internal task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Optional assignee.
    pub assignee: Option<String>,
    /// Task priority.
    pub priority: String,
    /// Task status.
    pub status: String,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
    /// External key of the column holding the task.
    pub column_key: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Internal task identifier.
    pub id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Optional assignee.
    pub assignee: Option<String>,
    /// Task priority.
    pub priority: String,
    /// Task status.
    pub status: String,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
    /// External key of the column holding the task.
    pub column_key: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Changeset applied when persisting task mutations.
///
/// `treat_none_as_null` makes a cleared optional field write NULL instead of
/// skipping the column; full-replace updates rely on this.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskChangeset {
    /// Task title.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Optional assignee.
    pub assignee: Option<String>,
    /// Task priority.
    pub priority: String,
    /// Task status.
    pub status: String,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
    /// External key of the column holding the task.
    pub column_key: String,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
