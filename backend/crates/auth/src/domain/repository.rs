//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infrastructure layer.

use crate::domain::entity::user::User;
use crate::domain::value_object::user_id::UserId;
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find the earliest registered user with this email
    async fn find_by_email(&self, email: &str) -> AuthResult<Option<User>>;

    /// Check if any user is registered with this email
    async fn exists_by_email(&self, email: &str) -> AuthResult<bool>;
}
