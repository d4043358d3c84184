//! User Entity
//!
//! A registered account. Users are created once at registration and are
//! never mutated or deleted afterwards.

use chrono::{DateTime, SubsecRound, Utc};
use platform::password::PasswordDigest;

use crate::domain::value_object::user_id::UserId;

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier, also carried by the session cookie
    pub user_id: UserId,
    /// Display name (not unique)
    pub user_name: String,
    /// Login key
    pub email: String,
    /// Blind keyed digest of the password
    pub password_digest: PasswordDigest,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a fresh identifier
    pub fn new(
        user_name: impl Into<String>,
        email: impl Into<String>,
        password_digest: PasswordDigest,
    ) -> Self {
        Self {
            user_id: UserId::new(),
            user_name: user_name.into(),
            email: email.into(),
            password_digest,
            // Postgres keeps microseconds; match it so both stores agree.
            created_at: Utc::now().trunc_subsecs(6),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::crypto::HashCodec;
    use platform::password::ClearTextPassword;

    #[test]
    fn test_new_user_gets_distinct_ids() {
        let codec = HashCodec::new([1u8; 32]);
        let digest = ClearTextPassword::new("pw123").digest(&codec);

        let a = User::new("bob12", "bob@x.com", digest.clone());
        let b = User::new("bob12", "bob@x.com", digest);

        assert_ne!(a.user_id, b.user_id);
        assert_eq!(a.user_name, "bob12");
        assert_eq!(a.email, "bob@x.com");
    }

    #[test]
    fn test_created_at_has_microsecond_precision() {
        let codec = HashCodec::new([1u8; 32]);
        let user = User::new("bob12", "bob@x.com", ClearTextPassword::new("pw").digest(&codec));
        assert_eq!(user.created_at.timestamp_subsec_nanos() % 1_000, 0);
    }
}
