//! In-Memory Repository Implementation
//!
//! Used by tests and by the server when no database is configured.
//! Clones share the same storage.

use std::collections::HashMap;
use std::sync::Arc;

use auth::UserId;
use tokio::sync::RwLock;

use crate::domain::entity::task::Task;
use crate::domain::repository::TaskRepository;
use crate::domain::sort::SortPolicy;
use crate::domain::value_object::task_id::TaskId;
use crate::error::TaskResult;

/// In-memory task repository
#[derive(Clone, Default)]
pub struct MemoryTaskRepository {
    tasks: Arc<RwLock<HashMap<TaskId, Task>>>,
}

impl MemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TaskRepository for MemoryTaskRepository {
    async fn insert(&self, task: &Task) -> TaskResult<()> {
        self.tasks.write().await.insert(task.task_id, task.clone());
        Ok(())
    }

    async fn find_by_owner_and_id(
        &self,
        owner_id: &UserId,
        task_id: &TaskId,
    ) -> TaskResult<Option<Task>> {
        let tasks = self.tasks.read().await;
        Ok(tasks
            .get(task_id)
            .filter(|task| task.is_owned_by(owner_id))
            .cloned())
    }

    async fn list_by_owner(&self, owner_id: &UserId, sort: SortPolicy) -> TaskResult<Vec<Task>> {
        let mut owned: Vec<Task> = {
            let tasks = self.tasks.read().await;
            tasks
                .values()
                .filter(|task| task.is_owned_by(owner_id))
                .cloned()
                .collect()
        };
        sort.sort(&mut owned);
        Ok(owned)
    }

    async fn update(&self, task: &Task) -> TaskResult<bool> {
        let mut tasks = self.tasks.write().await;
        match tasks.get_mut(&task.task_id) {
            Some(stored) if stored.is_owned_by(&task.owner_id) => {
                *stored = task.clone();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete(&self, owner_id: &UserId, task_id: &TaskId) -> TaskResult<bool> {
        let mut tasks = self.tasks.write().await;
        if tasks.get(task_id).is_some_and(|task| task.is_owned_by(owner_id)) {
            tasks.remove(task_id);
            return Ok(true);
        }
        Ok(false)
    }
}
