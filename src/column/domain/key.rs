//! External column key value type.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned when a column key is empty after trimming.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("column key must not be empty")]
pub struct EmptyColumnKeyError;

/// Stable external key distinguishing a board column (e.g. `"todo"`).
///
/// Keys are kept verbatim apart from whitespace trimming; custom columns may
/// use any non-empty key alongside the three reserved status keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnKey(String);

impl ColumnKey {
    /// Creates a validated column key.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyColumnKeyError`] when the value is empty after
    /// trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, EmptyColumnKeyError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(EmptyColumnKeyError);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Creates a key from a static literal known to be non-empty.
    ///
    /// Used for the reserved status keys; validated only in debug builds.
    #[must_use]
    pub fn from_static(value: &'static str) -> Self {
        debug_assert!(!value.trim().is_empty(), "static column key is empty");
        Self(value.to_owned())
    }

    /// Returns the key as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ColumnKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
