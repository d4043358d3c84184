//! Infrastructure Layer
//!
//! Database and in-memory repository implementations.

pub mod memory;
pub mod postgres;

pub use memory::MemoryUserRepository;
pub use postgres::PgUserRepository;
