//! Diesel schema for task persistence.

diesel::table! {
    /// Task records with board placement metadata.
    tasks (id) {
        /// Internal task identifier.
        id -> Uuid,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Optional free-form description.
        description -> Nullable<Text>,
        /// Optional assignee.
        #[max_length = 255]
        assignee -> Nullable<Varchar>,
        /// Task priority.
        #[max_length = 20]
        priority -> Varchar,
        /// Task status.
        #[max_length = 20]
        status -> Varchar,
        /// Optional due date.
        due_date -> Nullable<Date>,
        /// External key of the column holding the task.
        #[max_length = 255]
        column_key -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
