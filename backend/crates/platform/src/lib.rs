//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Keyed digests (HMAC-SHA256) packed as `value|digest|salt`
//! - Clear-text password handling and password digests
//! - Cookie management
//! - Render descriptors handed to the view layer

pub mod cookie;
pub mod crypto;
pub mod password;
pub mod view;
