//! Error-to-status translation for the REST layer.

use crate::column::{ports::ColumnRepositoryError, services::ColumnLayoutError};
use crate::task::{ports::TaskRepositoryError, services::TaskBoardError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// API-level error carrying only the response status.
///
/// Bodies stay empty: not-found and validation outcomes are conveyed by the
/// status code alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiError(StatusCode);

impl ApiError {
    /// A 400 response for malformed or invalid request data.
    #[must_use]
    pub const fn bad_request() -> Self {
        Self(StatusCode::BAD_REQUEST)
    }

    /// A 404 response for missing resources.
    #[must_use]
    pub const fn not_found() -> Self {
        Self(StatusCode::NOT_FOUND)
    }

    /// Returns the response status.
    #[must_use]
    pub const fn status(self) -> StatusCode {
        self.0
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.0.into_response()
    }
}

impl From<TaskBoardError> for ApiError {
    fn from(err: TaskBoardError) -> Self {
        match err {
            TaskBoardError::Domain(_) => Self(StatusCode::BAD_REQUEST),
            TaskBoardError::Repository(TaskRepositoryError::NotFound(_)) => {
                Self(StatusCode::NOT_FOUND)
            }
            TaskBoardError::Repository(repository_err) => {
                tracing::error!(error = %repository_err, "task persistence failure");
                Self(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}

impl From<ColumnLayoutError> for ApiError {
    fn from(err: ColumnLayoutError) -> Self {
        match err {
            ColumnLayoutError::Domain(_)
            | ColumnLayoutError::Repository(ColumnRepositoryError::DuplicateColumnKey(_)) => {
                Self(StatusCode::BAD_REQUEST)
            }
            ColumnLayoutError::Repository(ColumnRepositoryError::NotFound(_)) => {
                Self(StatusCode::NOT_FOUND)
            }
            ColumnLayoutError::Repository(repository_err) => {
                tracing::error!(error = %repository_err, "column persistence failure");
                Self(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}
