//! Port contracts for board column layout.
//!
//! Ports define infrastructure-agnostic interfaces used by column services.

pub mod repository;

pub use repository::{ColumnRepository, ColumnRepositoryError, ColumnRepositoryResult};
