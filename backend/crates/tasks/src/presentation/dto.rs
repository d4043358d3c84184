//! Data Transfer Objects
//!
//! Task form bodies. `k` is the task reference carried by hidden inputs.
//! Missing fields deserialize as empty strings.

use serde::Deserialize;

use crate::domain::entity::task::TaskFields;
use crate::domain::value_object::task_id::TaskId;

/// POST /homepage/newtask body
#[derive(Debug, Deserialize)]
pub struct TaskForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "dueDate", default)]
    pub due_date: String,
    #[serde(default)]
    pub priority: String,
}

impl From<TaskForm> for TaskFields {
    fn from(form: TaskForm) -> Self {
        TaskFields {
            title: form.title,
            description: form.description,
            due_date: form.due_date,
            priority: form.priority,
        }
    }
}

/// POST /homepage/deltask and /homepage/edittask body
#[derive(Debug, Deserialize)]
pub struct TaskRefForm {
    #[serde(default)]
    pub k: String,
}

impl TaskRefForm {
    /// `None` when `k` is not a task id
    pub fn task_id(&self) -> Option<TaskId> {
        self.k.parse().ok()
    }
}

/// POST /homepage/updatetask body
#[derive(Debug, Deserialize)]
pub struct UpdateTaskForm {
    #[serde(default)]
    pub k: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "dueDate", default)]
    pub due_date: String,
    #[serde(default)]
    pub priority: String,
}

impl UpdateTaskForm {
    /// Split into the task reference and the new field values
    pub fn into_parts(self) -> (Option<TaskId>, TaskFields) {
        let task_id = self.k.parse().ok();
        let fields = TaskFields {
            title: self.title,
            description: self.description,
            due_date: self.due_date,
            priority: self.priority,
        };
        (task_id, fields)
    }
}
