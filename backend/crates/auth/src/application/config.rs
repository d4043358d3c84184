//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::fmt;

use platform::cookie::CookieConfig;
use platform::crypto::HashCodec;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// Key for session cookie digests (32 bytes)
    pub session_secret: [u8; 32],
    /// Key for password digests (32 bytes)
    pub password_secret: [u8; 32],
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "userId".to_string(),
            session_secret: [0u8; 32],
            password_secret: [0u8; 32],
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
        }
    }
}

impl AuthConfig {
    /// Create config with random secrets (for development)
    ///
    /// Sessions and stored passwords do not survive a restart.
    pub fn with_random_secret() -> Self {
        Self {
            session_secret: random_secret(),
            password_secret: random_secret(),
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    /// Cookie attributes for the session cookie
    pub fn session_cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.session_cookie_name.clone(),
            secure: self.cookie_secure,
            same_site: self.cookie_same_site,
            ..Default::default()
        }
    }

    pub fn session_codec(&self) -> HashCodec {
        HashCodec::new(self.session_secret)
    }

    pub fn password_codec(&self) -> HashCodec {
        HashCodec::new(self.password_secret)
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("session_cookie_name", &self.session_cookie_name)
            .field("session_secret", &"[REDACTED]")
            .field("password_secret", &"[REDACTED]")
            .field("cookie_secure", &self.cookie_secure)
            .field("cookie_same_site", &self.cookie_same_site)
            .finish()
    }
}

fn random_secret() -> [u8; 32] {
    use rand::RngCore;
    let mut secret = [0u8; 32];
    rand::rng().fill_bytes(&mut secret);
    secret
}
