//! Task Sort Policy
//!
//! A sort directive such as `duedate-asc` or `priority-desc` names a field
//! and a direction. It is resolved per request and handed explicitly to the
//! store; there is no shared "current sort".
//!
//! Both stores order the same way: strings compare byte-wise, a missing
//! normalized due date sorts after every date (so first when descending),
//! and ties fall back to creation time then id, ascending.

use std::cmp::Ordering;

use derive_more::Display;

use crate::domain::entity::task::Task;

/// Field a task list is ordered by
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    #[display("created")]
    CreatedAt,
    #[display("duedate")]
    DueDate,
    #[display("priority")]
    Priority,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    #[display("asc")]
    Ascending,
    #[display("desc")]
    Descending,
}

/// Resolved ordering for a task listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortPolicy {
    field: SortField,
    direction: SortDirection,
}

impl Default for SortPolicy {
    /// Creation order, oldest first
    fn default() -> Self {
        Self {
            field: SortField::CreatedAt,
            direction: SortDirection::Ascending,
        }
    }
}

impl SortPolicy {
    /// Resolve a `field-direction` directive
    ///
    /// `duedate` selects the normalized due date and any other field name
    /// selects priority. Exactly `asc` is ascending; anything else,
    /// including a missing direction, is descending.
    pub fn resolve(directive: &str) -> Self {
        let (field, direction) = directive.split_once('-').unwrap_or((directive, ""));

        let field = match field {
            "duedate" => SortField::DueDate,
            _ => SortField::Priority,
        };
        let direction = match direction {
            "asc" => SortDirection::Ascending,
            _ => SortDirection::Descending,
        };

        Self { field, direction }
    }

    pub fn field(&self) -> SortField {
        self.field
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Canonical directive, `None` for the default creation order
    pub fn directive(&self) -> Option<String> {
        match self.field {
            SortField::CreatedAt => None,
            field => Some(format!("{}-{}", field, self.direction)),
        }
    }

    /// Order two tasks
    pub fn compare(&self, a: &Task, b: &Task) -> Ordering {
        let primary = match self.field {
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            SortField::DueDate => nulls_last(&a.fixed_due_date, &b.fixed_due_date),
            SortField::Priority => a.priority.as_bytes().cmp(b.priority.as_bytes()),
        };
        let primary = match self.direction {
            SortDirection::Ascending => primary,
            SortDirection::Descending => primary.reverse(),
        };

        primary
            .then_with(|| a.created_at.cmp(&b.created_at))
            .then_with(|| a.task_id.cmp(&b.task_id))
    }

    pub fn sort(&self, tasks: &mut [Task]) {
        tasks.sort_by(|a, b| self.compare(a, b));
    }

    /// `ORDER BY` clause matching [`compare`](Self::compare)
    pub fn sql_order_by(&self) -> &'static str {
        use SortDirection::*;
        use SortField::*;

        match (self.field, self.direction) {
            (CreatedAt, Ascending) => "created_at ASC, task_id ASC",
            (CreatedAt, Descending) => "created_at DESC, task_id ASC",
            (DueDate, Ascending) => {
                r#"fixed_due_date COLLATE "C" ASC, created_at ASC, task_id ASC"#
            }
            (DueDate, Descending) => {
                r#"fixed_due_date COLLATE "C" DESC, created_at ASC, task_id ASC"#
            }
            (Priority, Ascending) => r#"priority COLLATE "C" ASC, created_at ASC, task_id ASC"#,
            (Priority, Descending) => r#"priority COLLATE "C" DESC, created_at ASC, task_id ASC"#,
        }
    }
}

fn nulls_last(a: &Option<String>, b: &Option<String>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.as_bytes().cmp(b.as_bytes()),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
