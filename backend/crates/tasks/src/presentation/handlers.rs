//! HTTP Handlers
//!
//! All handlers sit behind `require_auth_session`, which provides the
//! [`CurrentUser`] extension.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, header};
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Extension, Form};
use serde_json::{Value, json};
use std::sync::Arc;

use auth::middleware::CurrentUser;
use platform::cookie::{extract_cookie, set_cookie_header};
use platform::view::View;

use crate::application::{TaskConfig, TaskStore};
use crate::domain::entity::task::Task;
use crate::domain::repository::TaskRepository;
use crate::domain::sort::SortPolicy;
use crate::domain::value_object::task_id::TaskId;
use crate::error::{TaskError, TaskResult};
use crate::presentation::dto::{TaskForm, TaskRefForm, UpdateTaskForm};

/// Task list page
pub const HOME_PATH: &str = "/homepage";

/// Shared state for task handlers
#[derive(Clone)]
pub struct TaskAppState<T>
where
    T: TaskRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<T>,
    pub config: Arc<TaskConfig>,
}

impl<T> TaskAppState<T>
where
    T: TaskRepository + Clone + Send + Sync + 'static,
{
    fn store(&self) -> TaskStore<T> {
        TaskStore::new(self.repo.clone())
    }

    /// Sort policy remembered by this client
    fn sort_policy(&self, headers: &HeaderMap) -> SortPolicy {
        extract_cookie(headers, &self.config.sort_cookie_name)
            .filter(|directive| !directive.is_empty())
            .map(|directive| SortPolicy::resolve(&directive))
            .unwrap_or_default()
    }
}

fn user_json(user: &CurrentUser) -> Value {
    json!({
        "userId": user.user_id,
        "userName": user.user_name,
        "email": user.email,
    })
}

fn task_view(view: &'static str, user: &CurrentUser, task: Option<Task>) -> Response {
    View::new(view)
        .with_fields(json!({
            "user": user_json(user),
            "userTask": task,
        }))
        .into_response()
}

// ============================================================================
// Task List
// ============================================================================

/// GET /homepage
pub async fn homepage<T>(
    State(state): State<TaskAppState<T>>,
    Extension(user): Extension<CurrentUser>,
    headers: HeaderMap,
) -> TaskResult<Response>
where
    T: TaskRepository + Clone + Send + Sync + 'static,
{
    let sort = state.sort_policy(&headers);
    let tasks = state.store().list_by_owner(&user.user_id, sort).await?;

    Ok(View::new("homepage")
        .with_fields(json!({
            "user": user_json(&user),
            "userTasks": tasks,
            "sortMethod": sort.directive(),
        }))
        .into_response())
}

/// GET /homepage/sort/{directive}
///
/// Any directive is accepted; it is stored in canonical form.
pub async fn sort_tasks<T>(
    State(state): State<TaskAppState<T>>,
    Path(directive): Path<String>,
) -> impl IntoResponse
where
    T: TaskRepository + Clone + Send + Sync + 'static,
{
    let sort = SortPolicy::resolve(&directive);
    let cookie = state
        .config
        .sort_cookie()
        .build_set_cookie(&sort.directive().unwrap_or_default());

    (
        [(header::SET_COOKIE, set_cookie_header(&cookie))],
        Redirect::to(HOME_PATH),
    )
}

// ============================================================================
// Create
// ============================================================================

/// GET /homepage/newtask
pub async fn new_task_page(Extension(user): Extension<CurrentUser>) -> View {
    View::new("newtask").with_fields(json!({ "user": user_json(&user) }))
}

/// POST /homepage/newtask
pub async fn new_task<T>(
    State(state): State<TaskAppState<T>>,
    Extension(user): Extension<CurrentUser>,
    Form(form): Form<TaskForm>,
) -> TaskResult<Redirect>
where
    T: TaskRepository + Clone + Send + Sync + 'static,
{
    state.store().create(&user.user_id, form.into()).await?;
    Ok(Redirect::to(HOME_PATH))
}

// ============================================================================
// Read
// ============================================================================

/// GET /homepage/task/{id}
///
/// Unknown, foreign and malformed ids all render with no task.
pub async fn task_page<T>(
    State(state): State<TaskAppState<T>>,
    Extension(user): Extension<CurrentUser>,
    Path(task_id): Path<String>,
) -> TaskResult<Response>
where
    T: TaskRepository + Clone + Send + Sync + 'static,
{
    let task = match task_id.parse::<TaskId>() {
        Ok(task_id) => state.store().get_by_owner_and_id(&user.user_id, &task_id).await?,
        Err(_) => None,
    };
    Ok(task_view("task", &user, task))
}

/// POST /homepage/edittask
pub async fn edit_task_page<T>(
    State(state): State<TaskAppState<T>>,
    Extension(user): Extension<CurrentUser>,
    Form(form): Form<TaskRefForm>,
) -> TaskResult<Response>
where
    T: TaskRepository + Clone + Send + Sync + 'static,
{
    let task = match form.task_id() {
        Some(task_id) => state.store().get_by_owner_and_id(&user.user_id, &task_id).await?,
        None => None,
    };
    Ok(task_view("edittask", &user, task))
}

// ============================================================================
// Update / Delete
// ============================================================================

/// POST /homepage/updatetask
pub async fn update_task<T>(
    State(state): State<TaskAppState<T>>,
    Extension(user): Extension<CurrentUser>,
    Form(form): Form<UpdateTaskForm>,
) -> TaskResult<Redirect>
where
    T: TaskRepository + Clone + Send + Sync + 'static,
{
    let (task_id, fields) = form.into_parts();
    let task_id = task_id.ok_or(TaskError::TaskNotFound)?;

    state
        .store()
        .update_by_ref(&user.user_id, &task_id, fields)
        .await?;
    Ok(Redirect::to(HOME_PATH))
}

/// POST /homepage/deltask
pub async fn delete_task<T>(
    State(state): State<TaskAppState<T>>,
    Extension(user): Extension<CurrentUser>,
    Form(form): Form<TaskRefForm>,
) -> TaskResult<Redirect>
where
    T: TaskRepository + Clone + Send + Sync + 'static,
{
    let task_id = form.task_id().ok_or(TaskError::TaskNotFound)?;

    state.store().delete_by_ref(&user.user_id, &task_id).await?;
    Ok(Redirect::to(HOME_PATH))
}
