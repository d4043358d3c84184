//! Value Object Module

pub mod task_id;
