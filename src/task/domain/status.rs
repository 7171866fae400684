//! Task status enum and its column-key mapping.

use super::ParseTaskStatusError;
use crate::column::domain::ColumnKey;
use serde::{Deserialize, Serialize};

/// Board status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Work has not started.
    Todo,
    /// Work is in progress.
    Doing,
    /// Work is finished.
    Done,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Doing => "doing",
            Self::Done => "done",
        }
    }

    /// Returns the grouping rank in board order (todo, doing, done).
    #[must_use]
    pub const fn board_rank(self) -> i16 {
        match self {
            Self::Todo => 1,
            Self::Doing => 2,
            Self::Done => 3,
        }
    }

    /// Returns the reserved column key derived from this status.
    #[must_use]
    pub fn default_column_key(self) -> ColumnKey {
        ColumnKey::from_static(self.as_str())
    }

    /// Maps a reserved column key back to its status.
    ///
    /// Returns `None` for custom column keys, which carry no status
    /// implication.
    #[must_use]
    pub fn for_column_key(key: &ColumnKey) -> Option<Self> {
        match key.as_str() {
            "todo" => Some(Self::Todo),
            "doing" => Some(Self::Doing),
            "done" => Some(Self::Done),
            _ => None,
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "todo" => Ok(Self::Todo),
            "doing" => Ok(Self::Doing),
            "done" => Ok(Self::Done),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}
