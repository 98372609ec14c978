//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - Database repositories (PostgreSQL, in-memory)
//! - Configuration

pub mod config;
pub mod database;
pub mod in_memory;
pub mod postgres;

pub use config::AppConfig;
pub use in_memory::InMemoryStore;
pub use postgres::{PostgresBusRepository, PostgresDriverRepository};
