//! Application services for kanban task orchestration.

mod board;

pub use board::{
    CreateTaskRequest, TaskBoardError, TaskBoardResult, TaskBoardService, UpdateTaskRequest,
};
