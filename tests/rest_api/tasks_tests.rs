//! REST tests for the task endpoints.

use super::helpers::{id_of, send, send_json, test_router};
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test(flavor = "multi_thread")]
async fn post_without_status_defaults_to_todo() -> eyre::Result<()> {
    let router = test_router();

    let (status, task) = send_json(
        &router,
        "POST",
        "/api/tasks",
        Some(json!({"title": "Set up CI", "priority": "MEDIUM"})),
    )
    .await?;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(task["status"], "TODO");
    assert_eq!(task["columnId"], "todo");
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn post_with_doing_status_derives_doing_column() -> eyre::Result<()> {
    let router = test_router();

    let (status, task) = send_json(
        &router,
        "POST",
        "/api/tasks",
        Some(json!({"title": "Ship it", "priority": "HIGH", "status": "DOING"})),
    )
    .await?;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(task["columnId"], "doing");
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn post_without_priority_is_a_bad_request() -> eyre::Result<()> {
    let router = test_router();

    let (status, _) = send(
        &router,
        "POST",
        "/api/tasks",
        Some(json!({"title": "No priority"})),
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn post_with_blank_title_is_a_bad_request() -> eyre::Result<()> {
    let router = test_router();

    let (status, _) = send(
        &router,
        "POST",
        "/api/tasks",
        Some(json!({"title": "   ", "priority": "LOW"})),
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn get_unknown_task_is_not_found() -> eyre::Result<()> {
    let router = test_router();

    let (status, _) = send(
        &router,
        "GET",
        "/api/tasks/00000000-0000-0000-0000-000000000000",
        None,
    )
    .await?;

    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn patch_status_forces_matching_column() -> eyre::Result<()> {
    let router = test_router();
    let (_, created) = send_json(
        &router,
        "POST",
        "/api/tasks",
        Some(json!({"title": "Review PR", "priority": "HIGH", "columnId": "review"})),
    )
    .await?;
    let id = id_of(&created)?;

    let (status, task) = send_json(
        &router,
        "PATCH",
        &format!("/api/tasks/{id}/status"),
        Some(json!({"status": "DONE"})),
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(task["status"], "DONE");
    assert_eq!(task["columnId"], "done");
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn patch_status_with_unknown_literal_is_a_bad_request() -> eyre::Result<()> {
    let router = test_router();
    let (_, created) = send_json(
        &router,
        "POST",
        "/api/tasks",
        Some(json!({"title": "Review PR", "priority": "LOW"})),
    )
    .await?;
    let id = id_of(&created)?;

    let (status, _) = send(
        &router,
        "PATCH",
        &format!("/api/tasks/{id}/status"),
        Some(json!({"status": "BLOCKED"})),
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn move_to_reserved_column_updates_status() -> eyre::Result<()> {
    let router = test_router();
    let (_, created) = send_json(
        &router,
        "POST",
        "/api/tasks",
        Some(json!({"title": "Fix flaky test", "priority": "MEDIUM"})),
    )
    .await?;
    let id = id_of(&created)?;

    let (status, task) = send_json(
        &router,
        "PATCH",
        &format!("/api/tasks/{id}/move-to-column/doing"),
        None,
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(task["status"], "DOING");
    assert_eq!(task["columnId"], "doing");
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn move_to_custom_column_keeps_status() -> eyre::Result<()> {
    let router = test_router();
    let (_, created) = send_json(
        &router,
        "POST",
        "/api/tasks",
        Some(json!({"title": "Design spike", "priority": "LOW", "status": "DOING"})),
    )
    .await?;
    let id = id_of(&created)?;

    let (status, task) = send_json(
        &router,
        "PATCH",
        &format!("/api/tasks/{id}/move-to-column/custom-col"),
        None,
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(task["status"], "DOING");
    assert_eq!(task["columnId"], "custom-col");
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn put_replaces_fields_and_keeps_column_when_absent() -> eyre::Result<()> {
    let router = test_router();
    let (_, created) = send_json(
        &router,
        "POST",
        "/api/tasks",
        Some(json!({"title": "Old title", "priority": "LOW", "columnId": "backlog"})),
    )
    .await?;
    let id = id_of(&created)?;

    let (status, task) = send_json(
        &router,
        "PUT",
        &format!("/api/tasks/{id}"),
        Some(json!({
            "title": "New title",
            "priority": "HIGH",
            "status": "TODO",
            "assignee": "dave",
            "dueDate": "2026-09-01"
        })),
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(task["title"], "New title");
    assert_eq!(task["assignee"], "dave");
    assert_eq!(task["dueDate"], "2026-09-01");
    assert_eq!(task["columnId"], "backlog");
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn put_unknown_task_is_not_found() -> eyre::Result<()> {
    let router = test_router();

    let (status, _) = send(
        &router,
        "PUT",
        "/api/tasks/00000000-0000-0000-0000-000000000000",
        Some(json!({"title": "Ghost", "priority": "LOW", "status": "TODO"})),
    )
    .await?;

    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_answers_no_content_then_not_found() -> eyre::Result<()> {
    let router = test_router();
    let (_, created) = send_json(
        &router,
        "POST",
        "/api/tasks",
        Some(json!({"title": "Disposable", "priority": "LOW"})),
    )
    .await?;
    let id = id_of(&created)?;

    let (first, _) = send(&router, "DELETE", &format!("/api/tasks/{id}"), None).await?;
    assert_eq!(first, StatusCode::NO_CONTENT);

    let (second, _) = send(&router, "DELETE", &format!("/api/tasks/{id}"), None).await?;
    assert_eq!(second, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn status_listing_filters_and_rejects_unknown_literals() -> eyre::Result<()> {
    let router = test_router();
    for (title, status) in [("A", "TODO"), ("B", "DOING"), ("C", "DOING")] {
        send_json(
            &router,
            "POST",
            "/api/tasks",
            Some(json!({"title": title, "priority": "MEDIUM", "status": status})),
        )
        .await?;
    }

    let (status, listed) = send_json(&router, "GET", "/api/tasks/status/DOING", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().map(Vec::len), Some(2));

    let (bad, _) = send(&router, "GET", "/api/tasks/status/BOGUS", None).await?;
    assert_eq!(bad, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn count_endpoints_report_status_and_column_totals() -> eyre::Result<()> {
    let router = test_router();
    send_json(
        &router,
        "POST",
        "/api/tasks",
        Some(json!({"title": "One", "priority": "LOW"})),
    )
    .await?;
    send_json(
        &router,
        "POST",
        "/api/tasks",
        Some(json!({"title": "Two", "priority": "LOW", "columnId": "backlog"})),
    )
    .await?;

    let (status, count) = send_json(&router, "GET", "/api/tasks/count/TODO", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(count, json!(2));

    let (status, count) =
        send_json(&router, "GET", "/api/tasks/count/column/backlog", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(count, json!(1));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn assignee_listing_filters_exactly() -> eyre::Result<()> {
    let router = test_router();
    send_json(
        &router,
        "POST",
        "/api/tasks",
        Some(json!({"title": "Hers", "priority": "LOW", "assignee": "alice"})),
    )
    .await?;
    send_json(
        &router,
        "POST",
        "/api/tasks",
        Some(json!({"title": "His", "priority": "LOW", "assignee": "bob"})),
    )
    .await?;

    let (status, listed) = send_json(&router, "GET", "/api/tasks/assignee/alice", None).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().map(Vec::len), Some(1));
    assert_eq!(listed[0]["title"], "Hers");
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn column_listing_returns_tasks_in_that_column() -> eyre::Result<()> {
    let router = test_router();
    send_json(
        &router,
        "POST",
        "/api/tasks",
        Some(json!({"title": "In backlog", "priority": "LOW", "columnId": "backlog"})),
    )
    .await?;
    send_json(
        &router,
        "POST",
        "/api/tasks",
        Some(json!({"title": "In todo", "priority": "LOW"})),
    )
    .await?;

    let (status, listed) = send_json(&router, "GET", "/api/tasks/column/backlog", None).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().map(Vec::len), Some(1));
    assert_eq!(listed[0]["columnId"], "backlog");
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_task_id_is_a_bad_request() -> eyre::Result<()> {
    let router = test_router();

    let (status, _) = send(&router, "GET", "/api/tasks/not-a-uuid", None).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}
