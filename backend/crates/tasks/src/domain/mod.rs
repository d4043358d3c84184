//! Domain Layer
//!
//! Task entity, due-date normalization, sort policy and the repository trait.

pub mod due_date;
pub mod entity;
pub mod repository;
pub mod sort;
pub mod value_object;

// Re-exports
pub use due_date::normalize_due_date;
pub use entity::task::{NewTask, Task, TaskFields};
pub use repository::TaskRepository;
pub use sort::{SortDirection, SortField, SortPolicy};
