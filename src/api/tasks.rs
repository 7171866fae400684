//! Task resource routes and payloads.

use super::{ApiError, ApiJson, AppState};
use crate::column::ports::ColumnRepository;
use crate::task::{
    domain::{Task, TaskId, TaskPriority, TaskStatus},
    ports::TaskRepository,
    services::{CreateTaskRequest, UpdateTaskRequest},
};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, patch};
use axum::{Json, Router};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Task representation returned by every task endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    id: Uuid,
    title: String,
    description: Option<String>,
    assignee: Option<String>,
    priority: TaskPriority,
    status: TaskStatus,
    due_date: Option<NaiveDate>,
    column_id: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id().into_inner(),
            title: task.title().as_str().to_owned(),
            description: task.description().map(str::to_owned),
            assignee: task.assignee().map(str::to_owned),
            priority: task.priority(),
            status: task.status(),
            due_date: task.due_date(),
            column_id: task.column_key().as_str().to_owned(),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
        }
    }
}

/// Request body for `POST /api/tasks`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskBody {
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    assignee: Option<String>,
    priority: TaskPriority,
    #[serde(default)]
    status: Option<TaskStatus>,
    #[serde(default)]
    due_date: Option<NaiveDate>,
    #[serde(default)]
    column_id: Option<String>,
}

/// Request body for `PUT /api/tasks/{id}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskBody {
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    assignee: Option<String>,
    priority: TaskPriority,
    status: TaskStatus,
    #[serde(default)]
    due_date: Option<NaiveDate>,
    #[serde(default)]
    column_id: Option<String>,
}

/// Request body for `PATCH /api/tasks/{id}/status`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdateBody {
    status: TaskStatus,
}

pub(super) fn routes<TR, CR, C>() -> Router<AppState<TR, CR, C>>
where
    TR: TaskRepository + 'static,
    CR: ColumnRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/",
            get(list_tasks::<TR, CR, C>).post(create_task::<TR, CR, C>),
        )
        .route("/status/:status", get(list_tasks_by_status::<TR, CR, C>))
        .route("/count/:status", get(count_tasks_by_status::<TR, CR, C>))
        .route(
            "/count/column/:column_id",
            get(count_tasks_by_column::<TR, CR, C>),
        )
        .route("/assignee/:assignee", get(list_tasks_by_assignee::<TR, CR, C>))
        .route("/column/:column_id", get(list_tasks_by_column::<TR, CR, C>))
        .route(
            "/:id",
            get(get_task::<TR, CR, C>)
                .put(replace_task::<TR, CR, C>)
                .delete(delete_task::<TR, CR, C>),
        )
        .route("/:id/status", patch(update_task_status::<TR, CR, C>))
        .route(
            "/:id/move-to-column/:column_id",
            patch(move_task_to_column::<TR, CR, C>),
        )
}

async fn list_tasks<TR, CR, C>(
    State(state): State<AppState<TR, CR, C>>,
) -> Result<Json<Vec<TaskResponse>>, ApiError>
where
    TR: TaskRepository + 'static,
    CR: ColumnRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let tasks = state.tasks().list_tasks().await?;
    Ok(Json(tasks.into_iter().map(TaskResponse::from).collect()))
}

async fn list_tasks_by_status<TR, CR, C>(
    State(state): State<AppState<TR, CR, C>>,
    Path(status): Path<String>,
) -> Result<Json<Vec<TaskResponse>>, ApiError>
where
    TR: TaskRepository + 'static,
    CR: ColumnRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let parsed = parse_status(&status)?;
    let tasks = state.tasks().list_by_status(parsed).await?;
    Ok(Json(tasks.into_iter().map(TaskResponse::from).collect()))
}

async fn get_task<TR, CR, C>(
    State(state): State<AppState<TR, CR, C>>,
    Path(id): Path<Uuid>,
) -> Result<Json<TaskResponse>, ApiError>
where
    TR: TaskRepository + 'static,
    CR: ColumnRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let task = state
        .tasks()
        .get_task(TaskId::from_uuid(id))
        .await?
        .ok_or_else(ApiError::not_found)?;
    Ok(Json(task.into()))
}

async fn create_task<TR, CR, C>(
    State(state): State<AppState<TR, CR, C>>,
    ApiJson(body): ApiJson<CreateTaskBody>,
) -> Result<(StatusCode, Json<TaskResponse>), ApiError>
where
    TR: TaskRepository + 'static,
    CR: ColumnRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let mut request = CreateTaskRequest::new(body.title, body.priority);
    if let Some(description) = body.description {
        request = request.with_description(description);
    }
    if let Some(assignee) = body.assignee {
        request = request.with_assignee(assignee);
    }
    if let Some(status) = body.status {
        request = request.with_status(status);
    }
    if let Some(due_date) = body.due_date {
        request = request.with_due_date(due_date);
    }
    if let Some(column_id) = body.column_id {
        request = request.with_column_key(column_id);
    }

    let task = state.tasks().create_task(request).await?;
    Ok((StatusCode::CREATED, Json(task.into())))
}

async fn replace_task<TR, CR, C>(
    State(state): State<AppState<TR, CR, C>>,
    Path(id): Path<Uuid>,
    ApiJson(body): ApiJson<UpdateTaskBody>,
) -> Result<Json<TaskResponse>, ApiError>
where
    TR: TaskRepository + 'static,
    CR: ColumnRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let mut request = UpdateTaskRequest::new(body.title, body.priority, body.status);
    if let Some(description) = body.description {
        request = request.with_description(description);
    }
    if let Some(assignee) = body.assignee {
        request = request.with_assignee(assignee);
    }
    if let Some(due_date) = body.due_date {
        request = request.with_due_date(due_date);
    }
    if let Some(column_id) = body.column_id {
        request = request.with_column_key(column_id);
    }

    let task = state
        .tasks()
        .update_task(TaskId::from_uuid(id), request)
        .await?;
    Ok(Json(task.into()))
}

async fn update_task_status<TR, CR, C>(
    State(state): State<AppState<TR, CR, C>>,
    Path(id): Path<Uuid>,
    ApiJson(body): ApiJson<StatusUpdateBody>,
) -> Result<Json<TaskResponse>, ApiError>
where
    TR: TaskRepository + 'static,
    CR: ColumnRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let task = state
        .tasks()
        .update_status(TaskId::from_uuid(id), body.status)
        .await?;
    Ok(Json(task.into()))
}

async fn move_task_to_column<TR, CR, C>(
    State(state): State<AppState<TR, CR, C>>,
    Path((id, column_id)): Path<(Uuid, String)>,
) -> Result<Json<TaskResponse>, ApiError>
where
    TR: TaskRepository + 'static,
    CR: ColumnRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let task = state
        .tasks()
        .move_to_column(TaskId::from_uuid(id), column_id)
        .await?;
    Ok(Json(task.into()))
}

async fn delete_task<TR, CR, C>(
    State(state): State<AppState<TR, CR, C>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError>
where
    TR: TaskRepository + 'static,
    CR: ColumnRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    state.tasks().delete_task(TaskId::from_uuid(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn count_tasks_by_status<TR, CR, C>(
    State(state): State<AppState<TR, CR, C>>,
    Path(status): Path<String>,
) -> Result<Json<u64>, ApiError>
where
    TR: TaskRepository + 'static,
    CR: ColumnRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let parsed = parse_status(&status)?;
    let count = state.tasks().count_by_status(parsed).await?;
    Ok(Json(count))
}

async fn list_tasks_by_assignee<TR, CR, C>(
    State(state): State<AppState<TR, CR, C>>,
    Path(assignee): Path<String>,
) -> Result<Json<Vec<TaskResponse>>, ApiError>
where
    TR: TaskRepository + 'static,
    CR: ColumnRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let tasks = state.tasks().list_by_assignee(&assignee).await?;
    Ok(Json(tasks.into_iter().map(TaskResponse::from).collect()))
}

async fn list_tasks_by_column<TR, CR, C>(
    State(state): State<AppState<TR, CR, C>>,
    Path(column_id): Path<String>,
) -> Result<Json<Vec<TaskResponse>>, ApiError>
where
    TR: TaskRepository + 'static,
    CR: ColumnRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let tasks = state.tasks().list_by_column(column_id).await?;
    Ok(Json(tasks.into_iter().map(TaskResponse::from).collect()))
}

async fn count_tasks_by_column<TR, CR, C>(
    State(state): State<AppState<TR, CR, C>>,
    Path(column_id): Path<String>,
) -> Result<Json<u64>, ApiError>
where
    TR: TaskRepository + 'static,
    CR: ColumnRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let count = state.tasks().count_by_column(column_id).await?;
    Ok(Json(count))
}

/// Parses a status path segment, rejecting unknown literals with a 400.
fn parse_status(raw: &str) -> Result<TaskStatus, ApiError> {
    TaskStatus::try_from(raw).map_err(|_| ApiError::bad_request())
}
