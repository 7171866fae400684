//! Domain model for board column layout.
//!
//! The column domain models named board lanes with a display position. The
//! external column key is the stable identifier clients move tasks with; the
//! record identifier only names the stored row.

mod column;
mod error;
mod ids;
mod key;
mod title;

pub use column::{BoardColumn, PersistedColumnData};
pub use error::ColumnDomainError;
pub use ids::ColumnId;
pub use key::{ColumnKey, EmptyColumnKeyError};
pub use title::ColumnTitle;
