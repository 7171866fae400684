//! Shared request helpers for REST API tests.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use mockable::DefaultClock;
use serde_json::Value;
use std::sync::Arc;
use taskboard::api::{self, AppState};
use taskboard::column::{adapters::memory::InMemoryColumnRepository, services::ColumnLayoutService};
use taskboard::task::{adapters::memory::InMemoryTaskRepository, services::TaskBoardService};
use tower::ServiceExt;

/// Builds the full application router over fresh in-memory repositories.
pub fn test_router() -> Router {
    let clock = Arc::new(DefaultClock);
    let tasks = TaskBoardService::new(Arc::new(InMemoryTaskRepository::new()), Arc::clone(&clock));
    let columns = ColumnLayoutService::new(Arc::new(InMemoryColumnRepository::new()), clock);
    api::router(AppState::new(tasks, columns))
}

/// Sends one request and returns the status with the raw body bytes.
pub async fn send(
    router: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> eyre::Result<(StatusCode, Vec<u8>)> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))?,
        None => builder.body(Body::empty())?,
    };

    let response = router
        .clone()
        .oneshot(request)
        .await
        .map_err(|err| eyre::eyre!("router error: {err}"))?;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .map_err(|err| eyre::eyre!("body read error: {err}"))?;
    Ok((status, bytes.to_vec()))
}

/// Sends one request and parses the response body as JSON.
pub async fn send_json(
    router: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> eyre::Result<(StatusCode, Value)> {
    let (status, bytes) = send(router, method, uri, body).await?;
    eyre::ensure!(!bytes.is_empty(), "expected a response body for {uri}");
    let value = serde_json::from_slice(&bytes)?;
    Ok((status, value))
}

/// Extracts the string `id` field from a JSON object.
pub fn id_of(value: &Value) -> eyre::Result<String> {
    value
        .get("id")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| eyre::eyre!("response has no id field: {value}"))
}
