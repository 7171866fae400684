//! `PostgreSQL` adapters for board column persistence.

mod models;
mod repository;
mod schema;

pub use repository::{ColumnPgPool, PostgresColumnRepository};
