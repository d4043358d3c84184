//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - User entity, form validation rules, repository traits
//! - `application/` - Register/login use cases and the session manager
//! - `infra/` - PostgreSQL and in-memory implementations
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - Registration and login with email + password
//! - Self-certifying session cookie (`userId|digest|salt`), no server-side state
//! - Middleware guarding routes that need a signed-in user
//!
//! ## Security Model
//! - Passwords stored as a blind keyed digest (HMAC-SHA256 with a per-user salt)
//! - Session cookies keyed with a separate secret, verified in constant time
//! - Sessions have no expiry; logout overwrites the cookie

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::session::SessionManager;
pub use domain::value_object::user_id::UserId;
pub use error::{AuthError, AuthResult};
pub use infra::{memory::MemoryUserRepository, postgres::PgUserRepository};
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::validation::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
