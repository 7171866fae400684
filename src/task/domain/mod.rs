//! Domain model for kanban task management.
//!
//! The task domain models work items with a status, a priority, and a column
//! placement, keeping the status and the reserved column keys consistent
//! while leaving custom columns decoupled from status.

mod error;
mod ids;
mod priority;
mod status;
mod task;
mod title;

pub use error::{ParseTaskPriorityError, ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use priority::TaskPriority;
pub use status::TaskStatus;
pub use task::{NewTaskData, PersistedTaskData, Task, TaskUpdate};
pub use title::TaskTitle;
