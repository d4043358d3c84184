//! Domain Layer
//!
//! Contains the user entity, form validation rules, and repository traits.

pub mod entity;
pub mod repository;
pub mod validation;
pub mod value_object;

// Re-exports
pub use entity::user::User;
pub use repository::UserRepository;
pub use validation::{FormField, Validation};
