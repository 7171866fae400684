//! Board column aggregate root.

use super::{ColumnId, ColumnKey, ColumnTitle};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Board column aggregate root.
///
/// A column is a named lane with an integer display position. Display order
/// uniqueness is maintained only by sequential reassignment during reorder,
/// never enforced as a hard constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardColumn {
    id: ColumnId,
    key: ColumnKey,
    title: ColumnTitle,
    display_order: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted column aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedColumnData {
    /// Persisted column record identifier.
    pub id: ColumnId,
    /// Persisted external key.
    pub key: ColumnKey,
    /// Persisted display title.
    pub title: ColumnTitle,
    /// Persisted display position.
    pub display_order: i32,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl BoardColumn {
    /// Creates a new column with the given key, title, and display position.
    #[must_use]
    pub fn new(
        key: ColumnKey,
        title: ColumnTitle,
        display_order: i32,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: ColumnId::new(),
            key,
            title,
            display_order,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a column from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedColumnData) -> Self {
        Self {
            id: data.id,
            key: data.key,
            title: data.title,
            display_order: data.display_order,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the column record identifier.
    #[must_use]
    pub const fn id(&self) -> ColumnId {
        self.id
    }

    /// Returns the external column key.
    #[must_use]
    pub const fn key(&self) -> &ColumnKey {
        &self.key
    }

    /// Returns the display title.
    #[must_use]
    pub const fn title(&self) -> &ColumnTitle {
        &self.title
    }

    /// Returns the display position.
    #[must_use]
    pub const fn display_order(&self) -> i32 {
        self.display_order
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

    /// Replaces the display title.
    pub fn rename(&mut self, title: ColumnTitle, clock: &impl Clock) {
        self.title = title;
        self.touch(clock);
    }

    /// Moves the column to a new display position.
    pub fn reposition(&mut self, display_order: i32, clock: &impl Clock) {
        self.display_order = display_order;
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
