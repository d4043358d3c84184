//! Application Layer
//!
//! Task store service and configuration.

pub mod config;
pub mod task_store;

// Re-exports
pub use config::TaskConfig;
pub use task_store::TaskStore;
