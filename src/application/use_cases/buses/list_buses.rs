//! List Buses Use Case
//!
//! Retrieves all buses with their assigned drivers, sorted by bus name.

use std::sync::Arc;

use crate::domain::gateways::BusRepository;
use crate::domain::models::bus::Bus;
use crate::shared::errors::UseCaseError;

/// Use case for listing all buses
pub struct ListBusesUseCase {
    bus_repository: Arc<dyn BusRepository>,
}

impl ListBusesUseCase {
    #[must_use]
    pub fn new(bus_repository: Arc<dyn BusRepository>) -> Self {
        Self { bus_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self) -> Result<Vec<Bus>, UseCaseError> {
        tracing::debug!("Listing buses");

        let buses = self.bus_repository.find_all().await?;

        tracing::debug!(count = buses.len(), "Found buses");
        Ok(buses)
    }
}
