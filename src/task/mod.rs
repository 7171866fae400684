//! Kanban task management.
//!
//! This module covers the task lifecycle: creation with status and column
//! defaulting, full-field updates, status/column synchronization, board
//! queries, and counting. The status and the column placement stay
//! consistent by convention: the three reserved column keys mirror the task
//! statuses while custom columns leave the status untouched. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
