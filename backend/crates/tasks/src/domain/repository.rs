//! Repository Traits
//!
//! Every lookup and mutation is scoped to the owning user.

use auth::UserId;

use crate::domain::entity::task::Task;
use crate::domain::sort::SortPolicy;
use crate::domain::value_object::task_id::TaskId;
use crate::error::TaskResult;

/// Task repository trait
#[trait_variant::make(TaskRepository: Send)]
pub trait LocalTaskRepository {
    /// Persist a new task
    async fn insert(&self, task: &Task) -> TaskResult<()>;

    /// Find a task by id, only if `owner_id` owns it
    async fn find_by_owner_and_id(
        &self,
        owner_id: &UserId,
        task_id: &TaskId,
    ) -> TaskResult<Option<Task>>;

    /// All tasks of `owner_id`, ordered by `sort`
    async fn list_by_owner(&self, owner_id: &UserId, sort: SortPolicy) -> TaskResult<Vec<Task>>;

    /// Overwrite a stored task; `false` when no task with this id and owner exists
    async fn update(&self, task: &Task) -> TaskResult<bool>;

    /// Delete a task; `false` when no task with this id and owner exists
    async fn delete(&self, owner_id: &UserId, task_id: &TaskId) -> TaskResult<bool>;
}
