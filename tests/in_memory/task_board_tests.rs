//! In-memory integration tests for task board flows.

use super::helpers::{settle_clock, test_board};
use taskboard::task::{
    domain::{TaskPriority, TaskStatus},
    ports::TaskRepositoryError,
    services::{CreateTaskRequest, TaskBoardError, UpdateTaskRequest},
};

#[tokio::test(flavor = "multi_thread")]
async fn created_task_is_retrievable_by_id() {
    let board = test_board();
    let created = board
        .tasks
        .create_task(
            CreateTaskRequest::new("Wire up telemetry", TaskPriority::High)
                .with_description("Emit spans for every handler")
                .with_assignee("carol"),
        )
        .await
        .expect("task creation should succeed");

    let fetched = board
        .tasks
        .get_task(created.id())
        .await
        .expect("lookup should succeed");

    assert_eq!(fetched, Some(created));
}

#[tokio::test(flavor = "multi_thread")]
async fn full_lifecycle_create_update_delete() {
    let board = test_board();
    let created = board
        .tasks
        .create_task(CreateTaskRequest::new("Prototype search", TaskPriority::Medium))
        .await
        .expect("task creation should succeed");

    settle_clock().await;
    let updated = board
        .tasks
        .update_task(
            created.id(),
            UpdateTaskRequest::new("Prototype search UI", TaskPriority::High, TaskStatus::Doing),
        )
        .await
        .expect("update should succeed");
    assert_eq!(updated.title().as_str(), "Prototype search UI");
    assert_eq!(updated.priority(), TaskPriority::High);
    assert!(updated.updated_at() > created.updated_at());

    board
        .tasks
        .delete_task(created.id())
        .await
        .expect("delete should succeed");

    let fetched = board
        .tasks
        .get_task(created.id())
        .await
        .expect("lookup should succeed");
    assert!(fetched.is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn status_change_and_column_move_stay_synchronized() {
    let board = test_board();
    let created = board
        .tasks
        .create_task(CreateTaskRequest::new("Harden auth flow", TaskPriority::High))
        .await
        .expect("task creation should succeed");

    let in_review = board
        .tasks
        .move_to_column(created.id(), "security-review")
        .await
        .expect("move should succeed");
    assert_eq!(in_review.status(), TaskStatus::Todo);
    assert_eq!(in_review.column_key().as_str(), "security-review");

    let done = board
        .tasks
        .update_status(created.id(), TaskStatus::Done)
        .await
        .expect("status update should succeed");
    assert_eq!(done.status(), TaskStatus::Done);
    assert_eq!(done.column_key().as_str(), "done");

    let reopened = board
        .tasks
        .move_to_column(created.id(), "todo")
        .await
        .expect("move should succeed");
    assert_eq!(reopened.status(), TaskStatus::Todo);
}

#[tokio::test(flavor = "multi_thread")]
async fn board_listing_orders_status_priority_then_creation() {
    let board = test_board();
    let requests = [
        ("Oldest medium todo", TaskPriority::Medium, TaskStatus::Todo),
        ("Done item", TaskPriority::High, TaskStatus::Done),
        ("High todo", TaskPriority::High, TaskStatus::Todo),
        ("Doing item", TaskPriority::Low, TaskStatus::Doing),
        ("Newest medium todo", TaskPriority::Medium, TaskStatus::Todo),
    ];
    for (title, priority, status) in requests {
        board
            .tasks
            .create_task(CreateTaskRequest::new(title, priority).with_status(status))
            .await
            .expect("task creation should succeed");
        settle_clock().await;
    }

    let listed = board
        .tasks
        .list_tasks()
        .await
        .expect("listing should succeed");
    let titles: Vec<_> = listed
        .iter()
        .map(|task| task.title().as_str().to_owned())
        .collect();

    assert_eq!(
        titles,
        vec![
            "High todo",
            "Oldest medium todo",
            "Newest medium todo",
            "Doing item",
            "Done item",
        ]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn column_listing_orders_by_creation() {
    let board = test_board();
    let first = board
        .tasks
        .create_task(
            CreateTaskRequest::new("First in backlog", TaskPriority::Low)
                .with_column_key("backlog"),
        )
        .await
        .expect("task creation should succeed");
    settle_clock().await;
    let second = board
        .tasks
        .create_task(
            CreateTaskRequest::new("Second in backlog", TaskPriority::High)
                .with_column_key("backlog"),
        )
        .await
        .expect("task creation should succeed");

    let listed = board
        .tasks
        .list_by_column("backlog")
        .await
        .expect("listing should succeed");

    let ids: Vec<_> = listed.iter().map(|task| task.id()).collect();
    assert_eq!(ids, vec![first.id(), second.id()]);
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_task_operations_report_not_found() {
    let board = test_board();
    let ghost = taskboard::task::domain::TaskId::new();

    let status_result = board.tasks.update_status(ghost, TaskStatus::Done).await;
    assert!(matches!(
        status_result,
        Err(TaskBoardError::Repository(TaskRepositoryError::NotFound(_)))
    ));

    let move_result = board.tasks.move_to_column(ghost, "todo").await;
    assert!(matches!(
        move_result,
        Err(TaskBoardError::Repository(TaskRepositoryError::NotFound(_)))
    ));
}
