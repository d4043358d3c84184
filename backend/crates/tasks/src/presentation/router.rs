//! Task Router

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use auth::domain::repository::UserRepository;
use auth::middleware::{AuthMiddlewareState, require_auth_session};

use crate::application::config::TaskConfig;
use crate::domain::repository::TaskRepository;
use crate::presentation::handlers::{self, TaskAppState};

/// Create the Task router
///
/// Every `/homepage` route requires a signed-in user; anonymous requests
/// are redirected to the login page.
pub fn tasks_router<U, T>(
    task_repo: Arc<T>,
    auth: AuthMiddlewareState<U>,
    config: Arc<TaskConfig>,
) -> Router
where
    U: UserRepository + Clone + Send + Sync + 'static,
    T: TaskRepository + Clone + Send + Sync + 'static,
{
    let state = TaskAppState {
        repo: task_repo,
        config,
    };

    Router::new()
        .route("/homepage", get(handlers::homepage::<T>))
        .route(
            "/homepage/newtask",
            get(handlers::new_task_page).post(handlers::new_task::<T>),
        )
        .route("/homepage/deltask", post(handlers::delete_task::<T>))
        .route("/homepage/task/{id}", get(handlers::task_page::<T>))
        .route("/homepage/edittask", post(handlers::edit_task_page::<T>))
        .route("/homepage/updatetask", post(handlers::update_task::<T>))
        .route("/homepage/sort/{directive}", get(handlers::sort_tasks::<T>))
        .route_layer(middleware::from_fn_with_state(
            auth,
            require_auth_session::<U>,
        ))
        .with_state(state)
}
