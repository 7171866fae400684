//! Application services for board column layout.

mod layout;

pub use layout::{
    ColumnLayoutError, ColumnLayoutResult, ColumnLayoutService, CreateColumnRequest,
    UpdateColumnRequest,
};
