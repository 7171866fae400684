//! Board column layout for the task board.
//!
//! Columns are named lanes ordered by an integer display position. The
//! module covers column CRUD, sequential reordering, and one-time default
//! seeding of the todo/doing/done lanes. It follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
