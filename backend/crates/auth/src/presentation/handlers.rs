//! HTTP Handlers
//!
//! Pages are [`View`] descriptors; successful form posts answer with a
//! `303 See Other` redirect.

use axum::Form;
use axum::extract::State;
use axum::http::{HeaderMap, header};
use axum::response::{IntoResponse, Redirect, Response};
use std::sync::Arc;

use platform::cookie::set_cookie_header;
use platform::view::View;

use crate::application::config::AuthConfig;
use crate::application::{
    LoginOutcome, LoginUseCase, RegisterOutcome, RegisterUseCase, SessionManager,
};
use crate::domain::repository::UserRepository;
use crate::domain::validation::Validation;
use crate::domain::value_object::user_id::UserId;
use crate::error::AuthResult;
use crate::presentation::dto::{LoginForm, RegisterForm};

/// Landing page for signed-in users
pub const HOME_PATH: &str = "/homepage";

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<U>
where
    U: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<U>,
    pub config: Arc<AuthConfig>,
    pub sessions: SessionManager,
}

impl<U> AuthAppState<U>
where
    U: UserRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        let sessions = SessionManager::new(&config);
        Self {
            repo,
            config,
            sessions,
        }
    }

    /// Redirect to the homepage when the request carries a live session
    async fn home_if_signed_in(&self, headers: &HeaderMap) -> AuthResult<Option<Response>> {
        let user = self.sessions.current_user(self.repo.as_ref(), headers).await?;
        Ok(user.map(|_| Redirect::to(HOME_PATH).into_response()))
    }

    /// Redirect to `to` with a fresh session cookie
    fn sign_in_redirect(&self, user_id: &UserId, to: &str) -> Response {
        let token = self.sessions.issue(user_id);
        let cookie = self.sessions.set_cookie(&token);
        (
            [(header::SET_COOKIE, set_cookie_header(&cookie))],
            Redirect::to(to),
        )
            .into_response()
    }
}

fn rejected_form(view: &'static str, validation: Validation) -> Response {
    View::new(view)
        .with_fields(validation.fields)
        .with_errors(validation.field_errors)
        .rejected()
        .into_response()
}

// ============================================================================
// Front Page
// ============================================================================

/// GET /
pub async fn index<U>(
    State(state): State<AuthAppState<U>>,
    headers: HeaderMap,
) -> AuthResult<Response>
where
    U: UserRepository + Clone + Send + Sync + 'static,
{
    if let Some(redirect) = state.home_if_signed_in(&headers).await? {
        return Ok(redirect);
    }
    Ok(View::new("index").into_response())
}

// ============================================================================
// Login / Logout
// ============================================================================

/// GET /login
pub async fn login_page<U>(
    State(state): State<AuthAppState<U>>,
    headers: HeaderMap,
) -> AuthResult<Response>
where
    U: UserRepository + Clone + Send + Sync + 'static,
{
    if let Some(redirect) = state.home_if_signed_in(&headers).await? {
        return Ok(redirect);
    }
    Ok(View::new("login").into_response())
}

/// POST /login
pub async fn login<U>(
    State(state): State<AuthAppState<U>>,
    Form(form): Form<LoginForm>,
) -> AuthResult<Response>
where
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.config.clone());

    match use_case.execute(form.into()).await? {
        LoginOutcome::Authenticated(user_id) => Ok(state.sign_in_redirect(&user_id, "/")),
        LoginOutcome::Rejected(validation) => Ok(rejected_form("login", validation)),
    }
}

/// GET /logout
pub async fn logout<U>(State(state): State<AuthAppState<U>>) -> impl IntoResponse
where
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let cookie = state.sessions.revoke();
    (
        [(header::SET_COOKIE, set_cookie_header(&cookie))],
        Redirect::to("/"),
    )
}

// ============================================================================
// Registration
// ============================================================================

/// GET /register
pub async fn register_page<U>(
    State(state): State<AuthAppState<U>>,
    headers: HeaderMap,
) -> AuthResult<Response>
where
    U: UserRepository + Clone + Send + Sync + 'static,
{
    if let Some(redirect) = state.home_if_signed_in(&headers).await? {
        return Ok(redirect);
    }
    Ok(View::new("register").into_response())
}

/// POST /register
pub async fn register<U>(
    State(state): State<AuthAppState<U>>,
    Form(form): Form<RegisterForm>,
) -> AuthResult<Response>
where
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    match use_case.execute(form.into()).await? {
        RegisterOutcome::Registered(user_id) => Ok(state.sign_in_redirect(&user_id, HOME_PATH)),
        RegisterOutcome::Rejected(validation) => Ok(rejected_form("register", validation)),
    }
}
