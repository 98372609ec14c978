//! Bus Fleet Admin API
//!
//! Administrative REST backend for managing drivers and the buses they are
//! assigned to, following Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
