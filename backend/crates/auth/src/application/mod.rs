//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod login;
pub mod register;
pub mod session;

// Re-exports
pub use config::AuthConfig;
pub use login::{LoginInput, LoginOutcome, LoginUseCase, validate_login_fields};
pub use register::{RegisterInput, RegisterOutcome, RegisterUseCase, validate_registration_fields};
pub use session::{SessionManager, SessionToken};
