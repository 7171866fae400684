//! Shared fixtures for in-memory integration tests.

use mockable::DefaultClock;
use std::sync::Arc;
use std::time::Duration;
use taskboard::column::{adapters::memory::InMemoryColumnRepository, services::ColumnLayoutService};
use taskboard::task::{adapters::memory::InMemoryTaskRepository, services::TaskBoardService};

/// Both services wired over fresh in-memory repositories and a shared clock.
pub struct TestBoard {
    pub tasks: TaskBoardService<InMemoryTaskRepository, DefaultClock>,
    pub columns: ColumnLayoutService<InMemoryColumnRepository, DefaultClock>,
}

pub fn test_board() -> TestBoard {
    let clock = Arc::new(DefaultClock);
    TestBoard {
        tasks: TaskBoardService::new(Arc::new(InMemoryTaskRepository::new()), Arc::clone(&clock)),
        columns: ColumnLayoutService::new(Arc::new(InMemoryColumnRepository::new()), clock),
    }
}

/// Keeps creation timestamps strictly increasing between calls.
pub async fn settle_clock() {
    tokio::time::sleep(Duration::from_millis(2)).await;
}
