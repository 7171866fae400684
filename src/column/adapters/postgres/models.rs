//! Diesel row models for board column persistence.

use super::schema::board_columns;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for column records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = board_columns)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ColumnRow {
    /// Internal column record identifier.
    pub id: uuid::Uuid,
    /// Unique external column key.
    pub column_key: String,
    /// Display title.
    pub title: String,
    /// Presentation order.
    pub display_order: i32,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for column records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = board_columns)]
pub struct NewColumnRow {
    /// Internal column record identifier.
    pub id: uuid::Uuid,
    /// Unique external column key.
    pub column_key: String,
    /// Display title.
    pub title: String,
    /// Presentation order.
    pub display_order: i32,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Changeset applied when persisting column mutations.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = board_columns)]
pub struct ColumnChangeset {
    /// Unique external column key.
    pub column_key: String,
    /// Display title.
    pub title: String,
    /// Presentation order.
    pub display_order: i32,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
