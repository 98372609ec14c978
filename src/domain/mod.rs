//! Domain Layer
//!
//! Contains the core business logic, domain models, and gateway traits (ports).
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::{BusRepository, DriverRepository};
pub use models::{Bus, BusData, BusId, BusPatch, Driver, DriverData, DriverId, DriverPatch};
