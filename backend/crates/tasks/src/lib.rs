//! Tasks Backend Module
//!
//! Personal task lists, one per user:
//! - `domain/` - Task entity, due-date normalization, sort policy, repository trait
//! - `application/` - Owner-scoped task store and configuration
//! - `infra/` - PostgreSQL and in-memory implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! Tasks are only reachable through their owner: a task of another user
//! looks exactly like a task that does not exist.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::{TaskConfig, TaskStore};
pub use domain::{SortPolicy, Task, TaskFields};
pub use error::{TaskError, TaskResult};
pub use infra::{memory::MemoryTaskRepository, postgres::PgTaskRepository};
pub use presentation::router::tasks_router;
