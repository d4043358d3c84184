//! Auth Error Types
//!
//! Form rejections are not errors (see [`crate::domain::validation`]) and
//! malformed session cookies simply mean "anonymous". What remains here are
//! infrastructure failures, which integrate with `kernel::error::AppError`.

use axum::response::{IntoResponse, Response};
use kernel::error::app_error::AppError;
use platform::password::PasswordDigestError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Convert to AppError
    ///
    /// Datastore failures keep the kernel's classification (503 when the
    /// database is unreachable); the driver message never leaves the process.
    pub fn into_app_error(self) -> AppError {
        match self {
            AuthError::Database(e) => AppError::from(e),
            AuthError::Internal(_) => AppError::internal("Internal error"),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

impl From<PasswordDigestError> for AuthError {
    fn from(err: PasswordDigestError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{StatusCode, header};
    use kernel::error::kind::ErrorKind;

    #[test]
    fn test_pool_timeout_is_service_unavailable() {
        let err = AuthError::from(sqlx::Error::PoolTimedOut);
        let app_err = err.into_app_error();
        assert_eq!(app_err.kind(), ErrorKind::ServiceUnavailable);
        assert!(app_err.is_retryable());
    }

    #[test]
    fn test_internal_hides_message() {
        let app_err = AuthError::Internal("secret detail".into()).into_app_error();
        assert_eq!(app_err.kind(), ErrorKind::InternalServerError);
        assert!(!app_err.message().contains("secret"));
    }

    #[test]
    fn test_unavailable_response_has_retry_after() {
        let response = AuthError::from(sqlx::Error::PoolClosed).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(response.headers().contains_key(header::RETRY_AFTER));
    }

    #[test]
    fn test_corrupt_digest_is_internal() {
        let err: AuthError = PasswordDigestError::InvalidFormat.into();
        assert!(matches!(err, AuthError::Internal(_)));
    }
}
