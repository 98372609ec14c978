//! HTTP Handlers

pub mod buses;
pub mod drivers;
pub mod health;
