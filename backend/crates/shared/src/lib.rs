//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the vocabulary every backend crate agrees on:
//! - The application error envelope and its HTTP classification
//! - Typed identifiers for persisted entities
//!
//! Anything that only one domain cares about lives in that domain's crate.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
