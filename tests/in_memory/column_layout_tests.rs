//! In-memory integration tests for column layout flows.

use super::helpers::test_board;
use taskboard::column::services::CreateColumnRequest;
use taskboard::task::{
    domain::{TaskPriority, TaskStatus},
    services::CreateTaskRequest,
};

#[tokio::test(flavor = "multi_thread")]
async fn seeding_is_idempotent_across_calls() {
    let board = test_board();

    board
        .columns
        .initialize_default_columns()
        .await
        .expect("seeding should succeed");
    board
        .columns
        .initialize_default_columns()
        .await
        .expect("repeat seeding should be a no-op");

    let columns = board
        .columns
        .list_columns()
        .await
        .expect("listing should succeed");
    let summary: Vec<_> = columns
        .iter()
        .map(|column| (column.key().as_str(), column.display_order()))
        .collect();
    assert_eq!(summary, vec![("todo", 1), ("doing", 2), ("done", 3)]);
}

#[tokio::test(flavor = "multi_thread")]
async fn seeding_skips_boards_with_existing_columns() {
    let board = test_board();
    board
        .columns
        .create_column(CreateColumnRequest::new("inbox", "Entrada"))
        .await
        .expect("column creation should succeed");

    board
        .columns
        .initialize_default_columns()
        .await
        .expect("seeding should succeed");

    let columns = board
        .columns
        .list_columns()
        .await
        .expect("listing should succeed");
    assert_eq!(columns.len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn reorder_applies_sequence_positions() {
    let board = test_board();
    board
        .columns
        .initialize_default_columns()
        .await
        .expect("seeding should succeed");

    board
        .columns
        .reorder_columns(vec![
            "done".to_owned(),
            "todo".to_owned(),
            "doing".to_owned(),
        ])
        .await
        .expect("reorder should succeed");

    let columns = board
        .columns
        .list_columns()
        .await
        .expect("listing should succeed");
    let summary: Vec<_> = columns
        .iter()
        .map(|column| (column.key().as_str(), column.display_order()))
        .collect();
    assert_eq!(summary, vec![("done", 1), ("todo", 2), ("doing", 3)]);
}

#[tokio::test(flavor = "multi_thread")]
async fn deleting_a_column_leaves_its_tasks_untouched() {
    let board = test_board();
    board
        .columns
        .initialize_default_columns()
        .await
        .expect("seeding should succeed");

    let task = board
        .tasks
        .create_task(
            CreateTaskRequest::new("Survives column removal", TaskPriority::Medium)
                .with_status(TaskStatus::Doing),
        )
        .await
        .expect("task creation should succeed");

    let doing = board
        .columns
        .get_column_by_key(task.column_key())
        .await
        .expect("lookup should succeed")
        .expect("seeded column should exist");
    board
        .columns
        .delete_column(doing.id())
        .await
        .expect("delete should succeed");

    let fetched = board
        .tasks
        .get_task(task.id())
        .await
        .expect("lookup should succeed")
        .expect("task should survive");
    assert_eq!(fetched.column_key().as_str(), "doing");
    assert_eq!(fetched.status(), TaskStatus::Doing);

    let remaining = board
        .columns
        .list_columns()
        .await
        .expect("listing should succeed");
    assert_eq!(remaining.len(), 2);
}
