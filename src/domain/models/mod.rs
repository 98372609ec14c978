//! Domain Models
//!
//! Pure domain entities, value objects and field rules.

pub mod bus;
pub mod driver;
pub mod validation;

pub use bus::{Bus, BusData, BusId, BusPatch};
pub use driver::{Driver, DriverData, DriverId, DriverPatch};
