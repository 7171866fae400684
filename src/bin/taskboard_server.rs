//! Serves the task board REST API backed by `PostgreSQL`.
//!
//! Startup sequence: read configuration from the environment, build the
//! connection pool, create missing tables, seed the default columns when the
//! board is empty, then serve the API until the process is stopped.
//!
//! Configuration:
//!
//! - `DATABASE_URL` — `PostgreSQL` connection string (required)
//! - `TASKBOARD_BIND_ADDR` — listen address (default `127.0.0.1:8080`)
//! - `RUST_LOG` — tracing filter (e.g. `taskboard=debug`)

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::DefaultClock;
use std::sync::Arc;
use taskboard::api::{self, AppState};
use taskboard::column::adapters::postgres::PostgresColumnRepository;
use taskboard::column::services::ColumnLayoutService;
use taskboard::config::ServerConfig;
use taskboard::task::adapters::postgres::PostgresTaskRepository;
use taskboard::task::services::TaskBoardService;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = ServerConfig::from_env()?;

    let manager = ConnectionManager::<PgConnection>::new(config.database_url.clone());
    let pool = Pool::builder().build(manager)?;

    let task_repository = Arc::new(PostgresTaskRepository::new(pool.clone()));
    let column_repository = Arc::new(PostgresColumnRepository::new(pool));
    task_repository.ensure_schema().await?;
    column_repository.ensure_schema().await?;

    let clock = Arc::new(DefaultClock);
    let tasks = TaskBoardService::new(task_repository, Arc::clone(&clock));
    let columns = ColumnLayoutService::new(column_repository, clock);

    columns.initialize_default_columns().await?;

    let state = AppState::new(tasks, columns);
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(address = %config.bind_addr, "task board API listening");
    axum::serve(listener, api::router(state)).await?;

    Ok(())
}
