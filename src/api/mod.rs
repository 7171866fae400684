//! REST API layer for the task board.
//!
//! Thin request/response mapping over the rule-engine services: routers per
//! resource nested under `/api`, camelCase JSON payloads, and error
//! translation to HTTP status codes. No business logic lives here.

mod columns;
mod error;
mod extract;
mod state;
mod tasks;

pub use error::ApiError;
pub use extract::ApiJson;
pub use state::AppState;

use crate::column::ports::ColumnRepository;
use crate::task::ports::TaskRepository;
use axum::Router;
use mockable::Clock;

/// Builds the full application router with both resources under `/api`.
pub fn router<TR, CR, C>(state: AppState<TR, CR, C>) -> Router
where
    TR: TaskRepository + 'static,
    CR: ColumnRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .nest("/api/tasks", tasks::routes())
        .nest("/api/columns", columns::routes())
        .with_state(state)
}
