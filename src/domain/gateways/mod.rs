//! Gateway Traits (Ports)
//!
//! Abstract interfaces defining contracts for external dependencies.
//! These are implemented by driven adapters in the infrastructure layer.

pub mod bus_repository;
pub mod driver_repository;

pub use bus_repository::BusRepository;
pub use driver_repository::DriverRepository;

#[cfg(test)]
pub use bus_repository::MockBusRepository;
#[cfg(test)]
pub use driver_repository::MockDriverRepository;
