//! Taskboard Application
//!
//! Wires the auth and task routers over a pair of repositories. The binary
//! picks Postgres or in-memory repositories; tests use the in-memory ones.

pub mod config;

use std::sync::Arc;

use auth::domain::repository::UserRepository;
use auth::middleware::AuthMiddlewareState;
use auth::{AuthConfig, auth_router};
use axum::Router;
use tasks::domain::repository::TaskRepository;
use tasks::{TaskConfig, tasks_router};

pub use config::AppConfig;

/// Build the application router
pub fn build_router<U, T>(
    users: U,
    tasks: T,
    auth_config: AuthConfig,
    task_config: TaskConfig,
) -> Router
where
    U: UserRepository + Clone + Send + Sync + 'static,
    T: TaskRepository + Clone + Send + Sync + 'static,
{
    let users = Arc::new(users);
    let auth_config = Arc::new(auth_config);
    let session_guard = AuthMiddlewareState::new(users.clone(), &auth_config);

    Router::new()
        .merge(auth_router(users, auth_config))
        .merge(tasks_router(
            Arc::new(tasks),
            session_guard,
            Arc::new(task_config),
        ))
}
