//! Error conversions - From implementations for infrastructure errors
//!
//! Datastore failures are split into "unavailable" (retryable, 503) and
//! everything else (500). Neither ever exposes the driver message.

#[cfg(feature = "sqlx")]
use super::app_error::AppError;

/// Action attached to retryable datastore failures
#[cfg(feature = "sqlx")]
pub const RETRY_ACTION: &str = "Please try again in a few moments";

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        let unavailable = || AppError::service_unavailable("Datastore unavailable").with_action(RETRY_ACTION);

        let app_err = match &err {
            sqlx::Error::RowNotFound => AppError::not_found("Record not found"),
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                unavailable()
            }
            sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
                // Class 23: Integrity Constraint Violation
                Some("23505") => AppError::conflict("Duplicate key value"),
                Some("23503") => AppError::conflict("Foreign key violation"),
                // Class 08: Connection Exception
                // Class 53: Insufficient Resources
                // Class 57: Operator Intervention
                Some(code)
                    if code.starts_with("08") || code.starts_with("53") || code.starts_with("57") =>
                {
                    unavailable()
                }
                _ => AppError::internal("Datastore error"),
            },
            _ => AppError::internal("Datastore error"),
        };
        app_err.with_source(err)
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for super::app_error::AppError {
    fn into_response(self) -> axum::response::Response {
        use super::app_error::DEFAULT_RETRY_AFTER_SECS;
        use axum::Json;
        use axum::http::{HeaderValue, StatusCode, header};

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // RFC 7807 Problem Details for HTTP APIs
        let body = serde_json::json!({
            "type": format!("https://httpstatuses.io/{}", self.status_code()),
            "title": self.kind().as_str(),
            "status": self.status_code(),
            "detail": self.message(),
            "action": self.action(),
            "retryable": self.is_retryable(),
        });

        let mut response = (status, Json(body)).into_response();
        if self.is_retryable() {
            response
                .headers_mut()
                .insert(header::RETRY_AFTER, HeaderValue::from(DEFAULT_RETRY_AFTER_SECS));
        }
        response
    }
}
