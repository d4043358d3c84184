//! Auth Middleware
//!
//! Middleware for requiring authentication on protected routes.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use std::sync::Arc;

use crate::application::SessionManager;
use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_id::UserId;

/// Where anonymous requests to protected routes are sent
pub const LOGIN_PATH: &str = "/login";

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState<U>
where
    U: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<U>,
    pub sessions: SessionManager,
}

impl<U> AuthMiddlewareState<U>
where
    U: UserRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: Arc<U>, config: &AuthConfig) -> Self {
        Self {
            repo,
            sessions: SessionManager::new(config),
        }
    }
}

/// Signed-in user, stored in request extensions by [`require_auth_session`]
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
}

impl From<User> for CurrentUser {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id,
            user_name: user.user_name,
            email: user.email,
        }
    }
}

/// Middleware that requires a valid session cookie
///
/// Anonymous requests are redirected to the login page.
pub async fn require_auth_session<U>(
    State(state): State<AuthMiddlewareState<U>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let user = state
        .sessions
        .current_user(state.repo.as_ref(), req.headers())
        .await
        .map_err(IntoResponse::into_response)?;

    let Some(user) = user else {
        return Err(Redirect::to(LOGIN_PATH).into_response());
    };

    req.extensions_mut().insert(CurrentUser::from(user));

    Ok(next.run(req).await)
}
