//! Task Error Types

use axum::response::{IntoResponse, Response};
use kernel::error::app_error::AppError;
use thiserror::Error;

/// Task-specific result type alias
pub type TaskResult<T> = Result<T, TaskError>;

/// Task-specific error variants
#[derive(Debug, Error)]
pub enum TaskError {
    /// No task with this id belongs to the requesting user
    #[error("Task not found")]
    TaskNotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TaskError {
    /// Convert to AppError
    pub fn into_app_error(self) -> AppError {
        match self {
            TaskError::TaskNotFound => AppError::not_found("Task not found"),
            TaskError::Database(e) => AppError::from(e),
            TaskError::Internal(_) => AppError::internal("Internal error"),
        }
    }

    fn log(&self) {
        match self {
            TaskError::Database(e) => {
                tracing::error!(error = %e, "Task database error");
            }
            TaskError::Internal(msg) => {
                tracing::error!(message = %msg, "Task internal error");
            }
            TaskError::TaskNotFound => {
                tracing::debug!("Task not found for owner");
            }
        }
    }
}

impl IntoResponse for TaskError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}
