//! Task Entity

use auth::UserId;
use chrono::{DateTime, SubsecRound, Utc};
use serde::Serialize;

use crate::domain::due_date::normalize_due_date;
use crate::domain::value_object::task_id::TaskId;

/// Editable task fields, as submitted by the task forms
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFields {
    pub title: String,
    pub description: String,
    /// Due date exactly as entered
    pub due_date: String,
    pub priority: String,
}

/// Fields of a task about to be created
pub type NewTask = TaskFields;

/// Task entity
///
/// A task belongs to the user who created it for its whole lifetime and is
/// only ever reachable through that owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub task_id: TaskId,
    #[serde(skip)]
    pub owner_id: UserId,
    pub title: String,
    pub description: String,
    pub due_date: String,
    /// `month/day/year` when `due_date` has the `year-month-day` shape
    pub fixed_due_date: Option<String>,
    pub priority: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn new(owner_id: UserId, fields: NewTask) -> Self {
        // Postgres keeps microseconds; match it so both stores order alike.
        let now = Utc::now().trunc_subsecs(6);
        let fixed_due_date = normalize_due_date(&fields.due_date);

        Self {
            task_id: TaskId::new(),
            owner_id,
            title: fields.title,
            description: fields.description,
            due_date: fields.due_date,
            fixed_due_date,
            priority: fields.priority,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the editable fields
    ///
    /// The normalized due date is re-derived when the raw value changed.
    pub fn apply(&mut self, fields: TaskFields) {
        if fields.due_date != self.due_date {
            self.fixed_due_date = normalize_due_date(&fields.due_date);
        }
        self.title = fields.title;
        self.description = fields.description;
        self.due_date = fields.due_date;
        self.priority = fields.priority;
        self.updated_at = Utc::now().trunc_subsecs(6);
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.owner_id == user_id
    }
}
