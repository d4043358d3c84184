//! Entity Module

pub mod task;
