//! Shared application state for API handlers.

use crate::column::{ports::ColumnRepository, services::ColumnLayoutService};
use crate::task::{ports::TaskRepository, services::TaskBoardService};
use mockable::Clock;

/// Application state carrying the two rule-engine services.
///
/// Constructed once at startup with the chosen repository adapters and
/// cloned into each handler invocation.
pub struct AppState<TR, CR, C>
where
    TR: TaskRepository,
    CR: ColumnRepository,
    C: Clock + Send + Sync,
{
    tasks: TaskBoardService<TR, C>,
    columns: ColumnLayoutService<CR, C>,
}

impl<TR, CR, C> Clone for AppState<TR, CR, C>
where
    TR: TaskRepository,
    CR: ColumnRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            tasks: self.tasks.clone(),
            columns: self.columns.clone(),
        }
    }
}

impl<TR, CR, C> AppState<TR, CR, C>
where
    TR: TaskRepository,
    CR: ColumnRepository,
    C: Clock + Send + Sync,
{
    /// Creates application state from the two services.
    #[must_use]
    pub const fn new(
        tasks: TaskBoardService<TR, C>,
        columns: ColumnLayoutService<CR, C>,
    ) -> Self {
        Self { tasks, columns }
    }

    /// Returns the task board service.
    #[must_use]
    pub const fn tasks(&self) -> &TaskBoardService<TR, C> {
        &self.tasks
    }

    /// Returns the column layout service.
    #[must_use]
    pub const fn columns(&self) -> &ColumnLayoutService<CR, C> {
        &self.columns
    }
}
