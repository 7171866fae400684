//! REST tests for the column endpoints.

use super::helpers::{id_of, send, send_json, test_router};
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test(flavor = "multi_thread")]
async fn initialize_seeds_defaults_idempotently() -> eyre::Result<()> {
    let router = test_router();

    let (first, _) = send(&router, "POST", "/api/columns/initialize", None).await?;
    assert_eq!(first, StatusCode::OK);
    let (second, _) = send(&router, "POST", "/api/columns/initialize", None).await?;
    assert_eq!(second, StatusCode::OK);

    let (status, columns) = send_json(&router, "GET", "/api/columns", None).await?;
    assert_eq!(status, StatusCode::OK);

    let summary: Vec<_> = columns
        .as_array()
        .map(|items| {
            items
                .iter()
                .map(|column| {
                    (
                        column["columnId"].as_str().unwrap_or_default().to_owned(),
                        column["displayOrder"].as_i64().unwrap_or_default(),
                        column["title"].as_str().unwrap_or_default().to_owned(),
                    )
                })
                .collect()
        })
        .unwrap_or_default();
    assert_eq!(
        summary,
        vec![
            ("todo".to_owned(), 1, "A Fazer".to_owned()),
            ("doing".to_owned(), 2, "Em Progresso".to_owned()),
            ("done".to_owned(), 3, "Concluído".to_owned()),
        ]
    );
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn create_returns_column_and_rejects_duplicates() -> eyre::Result<()> {
    let router = test_router();

    let (status, column) = send_json(
        &router,
        "POST",
        "/api/columns",
        Some(json!({"columnId": "review", "title": "Em Revisão"})),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(column["columnId"], "review");
    assert_eq!(column["displayOrder"], 1);

    let (duplicate, _) = send(
        &router,
        "POST",
        "/api/columns",
        Some(json!({"columnId": "review", "title": "Outra"})),
    )
    .await?;
    assert_eq!(duplicate, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn create_without_order_appends_after_maximum() -> eyre::Result<()> {
    let router = test_router();
    send(&router, "POST", "/api/columns/initialize", None).await?;

    let (status, column) = send_json(
        &router,
        "POST",
        "/api/columns",
        Some(json!({"columnId": "review", "title": "Em Revisão"})),
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(column["displayOrder"], 4);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn get_update_and_delete_by_record_id() -> eyre::Result<()> {
    let router = test_router();
    let (_, created) = send_json(
        &router,
        "POST",
        "/api/columns",
        Some(json!({"columnId": "staging", "title": "Homologação"})),
    )
    .await?;
    let id = id_of(&created)?;

    let (status, fetched) = send_json(&router, "GET", &format!("/api/columns/{id}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["columnId"], "staging");

    let (status, updated) = send_json(
        &router,
        "PUT",
        &format!("/api/columns/{id}"),
        Some(json!({"title": "Em Homologação", "displayOrder": 7})),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["title"], "Em Homologação");
    assert_eq!(updated["displayOrder"], 7);

    let (deleted, _) = send(&router, "DELETE", &format!("/api/columns/{id}"), None).await?;
    assert_eq!(deleted, StatusCode::OK);

    let (missing, _) = send(&router, "GET", &format!("/api/columns/{id}"), None).await?;
    assert_eq!(missing, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn update_unknown_column_is_not_found() -> eyre::Result<()> {
    let router = test_router();

    let (status, _) = send(
        &router,
        "PUT",
        "/api/columns/00000000-0000-0000-0000-000000000000",
        Some(json!({"title": "Ghost"})),
    )
    .await?;

    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn reorder_applies_sequence_and_rejects_missing_key() -> eyre::Result<()> {
    let router = test_router();
    send(&router, "POST", "/api/columns/initialize", None).await?;

    let (status, _) = send(
        &router,
        "PUT",
        "/api/columns/reorder",
        Some(json!({"columnIds": ["done", "todo", "doing"]})),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);

    let (_, columns) = send_json(&router, "GET", "/api/columns", None).await?;
    let order: Vec<_> = columns
        .as_array()
        .map(|items| {
            items
                .iter()
                .map(|column| column["columnId"].as_str().unwrap_or_default().to_owned())
                .collect()
        })
        .unwrap_or_default();
    assert_eq!(
        order,
        vec!["done".to_owned(), "todo".to_owned(), "doing".to_owned()]
    );

    let (bad, _) = send(
        &router,
        "PUT",
        "/api/columns/reorder",
        Some(json!({"wrongKey": []})),
    )
    .await?;
    assert_eq!(bad, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn deleting_a_column_keeps_its_tasks() -> eyre::Result<()> {
    let router = test_router();
    send(&router, "POST", "/api/columns/initialize", None).await?;

    let (_, task) = send_json(
        &router,
        "POST",
        "/api/tasks",
        Some(json!({"title": "Sticky task", "priority": "LOW"})),
    )
    .await?;
    let task_id = id_of(&task)?;

    let (_, columns) = send_json(&router, "GET", "/api/columns", None).await?;
    let todo_id = columns
        .as_array()
        .and_then(|items| {
            items
                .iter()
                .find(|column| column["columnId"] == "todo")
                .and_then(|column| column["id"].as_str())
        })
        .map(str::to_owned)
        .ok_or_else(|| eyre::eyre!("seeded todo column missing"))?;

    let (deleted, _) = send(&router, "DELETE", &format!("/api/columns/{todo_id}"), None).await?;
    assert_eq!(deleted, StatusCode::OK);

    let (status, fetched) =
        send_json(&router, "GET", &format!("/api/tasks/{task_id}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["columnId"], "todo");
    assert_eq!(fetched["status"], "TODO");
    Ok(())
}
