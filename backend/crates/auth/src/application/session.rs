//! Session Manager
//!
//! A session is nothing more than a cookie carrying the packed digest of the
//! user id (`<userId>|<digestHex>|<salt>`). Nothing is stored server side:
//! the cookie certifies itself, and logging out overwrites it with an empty
//! value. Sessions do not expire.

use axum::http::HeaderMap;
use platform::cookie::{CookieConfig, extract_cookie};
use platform::crypto::{FIELD_SEPARATOR, HashCodec};

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_id::UserId;
use crate::error::AuthResult;

/// Session cookie value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Issues and validates session tokens
#[derive(Debug, Clone)]
pub struct SessionManager {
    codec: HashCodec,
    cookie: CookieConfig,
}

impl SessionManager {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            codec: config.session_codec(),
            cookie: config.session_cookie(),
        }
    }

    /// Token bound to `user_id`, salted freshly on every call
    pub fn issue(&self, user_id: &UserId) -> SessionToken {
        SessionToken(self.codec.make_digest(&user_id.to_string(), None))
    }

    /// User id certified by `token`, if any
    pub fn validate(&self, token: &str) -> Option<UserId> {
        let (candidate, _) = token.split_once(FIELD_SEPARATOR)?;
        if !self.codec.verify(candidate, token) {
            return None;
        }
        candidate.parse().ok()
    }

    /// `Set-Cookie` value establishing the session
    pub fn set_cookie(&self, token: &SessionToken) -> String {
        self.cookie.build_set_cookie(token.as_str())
    }

    /// `Set-Cookie` value ending the session
    pub fn revoke(&self) -> String {
        self.cookie.build_delete_cookie()
    }

    /// Session token sent by the client
    pub fn token_from_headers(&self, headers: &HeaderMap) -> Option<String> {
        extract_cookie(headers, &self.cookie.name)
    }

    /// Validate the token and load its user
    ///
    /// A well-formed token for a user that no longer exists is anonymous too.
    pub async fn resolve_user<U>(&self, repo: &U, token: &str) -> AuthResult<Option<User>>
    where
        U: UserRepository,
    {
        let Some(user_id) = self.validate(token) else {
            tracing::debug!("Rejected session cookie");
            return Ok(None);
        };
        repo.find_by_id(&user_id).await
    }

    /// [`resolve_user`](Self::resolve_user) for the request's cookie
    pub async fn current_user<U>(&self, repo: &U, headers: &HeaderMap) -> AuthResult<Option<User>>
    where
        U: UserRepository,
    {
        match self.token_from_headers(headers) {
            Some(token) => self.resolve_user(repo, &token).await,
            None => Ok(None),
        }
    }
}
