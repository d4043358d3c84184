//! Task Store
//!
//! Owner-scoped task operations. A task that exists but belongs to someone
//! else is indistinguishable from one that does not exist.

use std::sync::Arc;

use auth::UserId;

use crate::domain::entity::task::{NewTask, Task, TaskFields};
use crate::domain::repository::TaskRepository;
use crate::domain::sort::SortPolicy;
use crate::domain::value_object::task_id::TaskId;
use crate::error::{TaskError, TaskResult};

/// Task store service
pub struct TaskStore<T>
where
    T: TaskRepository,
{
    repo: Arc<T>,
}

impl<T> TaskStore<T>
where
    T: TaskRepository,
{
    pub fn new(repo: Arc<T>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, owner_id: &UserId, fields: NewTask) -> TaskResult<Task> {
        let task = Task::new(*owner_id, fields);
        self.repo.insert(&task).await?;

        tracing::info!(
            user_id = %owner_id,
            task_id = %task.task_id,
            "Task created"
        );

        Ok(task)
    }

    pub async fn list_by_owner(&self, owner_id: &UserId, sort: SortPolicy) -> TaskResult<Vec<Task>> {
        self.repo.list_by_owner(owner_id, sort).await
    }

    pub async fn get_by_owner_and_id(
        &self,
        owner_id: &UserId,
        task_id: &TaskId,
    ) -> TaskResult<Option<Task>> {
        self.repo.find_by_owner_and_id(owner_id, task_id).await
    }

    /// Overwrite a task's editable fields
    pub async fn update_by_ref(
        &self,
        owner_id: &UserId,
        task_id: &TaskId,
        fields: TaskFields,
    ) -> TaskResult<Task> {
        let mut task = self
            .repo
            .find_by_owner_and_id(owner_id, task_id)
            .await?
            .ok_or(TaskError::TaskNotFound)?;

        task.apply(fields);

        // Deleted between the read and the write
        if !self.repo.update(&task).await? {
            return Err(TaskError::TaskNotFound);
        }

        tracing::info!(
            user_id = %owner_id,
            task_id = %task_id,
            "Task updated"
        );

        Ok(task)
    }

    /// Permanently delete a task; deleting it again is `TaskNotFound`
    pub async fn delete_by_ref(&self, owner_id: &UserId, task_id: &TaskId) -> TaskResult<()> {
        if !self.repo.delete(owner_id, task_id).await? {
            return Err(TaskError::TaskNotFound);
        }

        tracing::info!(
            user_id = %owner_id,
            task_id = %task_id,
            "Task deleted"
        );

        Ok(())
    }
}
