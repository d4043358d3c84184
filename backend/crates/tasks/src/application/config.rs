//! Application Configuration

use platform::cookie::{CookieConfig, SameSite};

/// Task application configuration
#[derive(Debug, Clone)]
pub struct TaskConfig {
    /// Cookie remembering the client's sort directive
    pub sort_cookie_name: String,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
}

impl Default for TaskConfig {
    fn default() -> Self {
        Self {
            sort_cookie_name: "taskSort".to_string(),
            cookie_secure: true,
        }
    }
}

impl TaskConfig {
    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Default::default()
        }
    }

    /// Cookie attributes for the sort directive cookie
    pub fn sort_cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.sort_cookie_name.clone(),
            secure: self.cookie_secure,
            same_site: SameSite::Lax,
            ..Default::default()
        }
    }
}
