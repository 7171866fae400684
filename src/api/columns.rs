//! Column resource routes and payloads.

use super::{ApiError, ApiJson, AppState};
use crate::column::{
    domain::{BoardColumn, ColumnId},
    ports::ColumnRepository,
    services::{CreateColumnRequest, UpdateColumnRequest},
};
use crate::task::ports::TaskRepository;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Column representation returned by every column endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnResponse {
    id: Uuid,
    column_id: String,
    title: String,
    display_order: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<BoardColumn> for ColumnResponse {
    fn from(column: BoardColumn) -> Self {
        Self {
            id: column.id().into_inner(),
            column_id: column.key().as_str().to_owned(),
            title: column.title().as_str().to_owned(),
            display_order: column.display_order(),
            created_at: column.created_at(),
            updated_at: column.updated_at(),
        }
    }
}

/// Request body for `POST /api/columns`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateColumnBody {
    column_id: String,
    title: String,
    #[serde(default)]
    display_order: Option<i32>,
}

/// Request body for `PUT /api/columns/{id}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateColumnBody {
    title: String,
    #[serde(default)]
    display_order: Option<i32>,
}

/// Request body for `PUT /api/columns/reorder`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderBody {
    column_ids: Vec<String>,
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
            get(list_columns::<TR, CR, C>).post(create_column::<TR, CR, C>),
        )
        .route("/reorder", put(reorder_columns::<TR, CR, C>))
        .route("/initialize", post(initialize_columns::<TR, CR, C>))
        .route(
            "/:id",
            get(get_column::<TR, CR, C>)
                .put(update_column::<TR, CR, C>)
                .delete(delete_column::<TR, CR, C>),
        )
}

async fn list_columns<TR, CR, C>(
    State(state): State<AppState<TR, CR, C>>,
) -> Result<Json<Vec<ColumnResponse>>, ApiError>
where
    TR: TaskRepository + 'static,
    CR: ColumnRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let columns = state.columns().list_columns().await?;
    Ok(Json(columns.into_iter().map(ColumnResponse::from).collect()))
}

async fn get_column<TR, CR, C>(
    State(state): State<AppState<TR, CR, C>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ColumnResponse>, ApiError>
where
    TR: TaskRepository + 'static,
    CR: ColumnRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let column = state
        .columns()
        .get_column(ColumnId::from_uuid(id))
        .await?
        .ok_or_else(ApiError::not_found)?;
    Ok(Json(column.into()))
}

async fn create_column<TR, CR, C>(
    State(state): State<AppState<TR, CR, C>>,
    ApiJson(body): ApiJson<CreateColumnBody>,
) -> Result<Json<ColumnResponse>, ApiError>
where
    TR: TaskRepository + 'static,
    CR: ColumnRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let mut request = CreateColumnRequest::new(body.column_id, body.title);
    if let Some(display_order) = body.display_order {
        request = request.with_display_order(display_order);
    }

    let column = state.columns().create_column(request).await?;
    Ok(Json(column.into()))
}

async fn update_column<TR, CR, C>(
    State(state): State<AppState<TR, CR, C>>,
    Path(id): Path<Uuid>,
    ApiJson(body): ApiJson<UpdateColumnBody>,
) -> Result<Json<ColumnResponse>, ApiError>
where
    TR: TaskRepository + 'static,
    CR: ColumnRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let mut request = UpdateColumnRequest::new(body.title);
    if let Some(display_order) = body.display_order {
        request = request.with_display_order(display_order);
    }

    let column = state
        .columns()
        .update_column(ColumnId::from_uuid(id), request)
        .await?;
    Ok(Json(column.into()))
}

async fn delete_column<TR, CR, C>(
    State(state): State<AppState<TR, CR, C>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError>
where
    TR: TaskRepository + 'static,
    CR: ColumnRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    state
        .columns()
        .delete_column(ColumnId::from_uuid(id))
        .await?;
    Ok(StatusCode::OK)
}

async fn reorder_columns<TR, CR, C>(
    State(state): State<AppState<TR, CR, C>>,
    ApiJson(body): ApiJson<ReorderBody>,
) -> Result<StatusCode, ApiError>
where
    TR: TaskRepository + 'static,
    CR: ColumnRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    state.columns().reorder_columns(body.column_ids).await?;
    Ok(StatusCode::OK)
}

async fn initialize_columns<TR, CR, C>(
    State(state): State<AppState<TR, CR, C>>,
) -> Result<StatusCode, ApiError>
where
    TR: TaskRepository + 'static,
    CR: ColumnRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    state.columns().initialize_default_columns().await?;
    Ok(StatusCode::OK)
}
