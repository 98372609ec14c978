//! Update Bus Use Case (PUT)
//!
//! Replaces every writable field of a bus, including its driver assignment.

use std::sync::Arc;

use super::{ensure_driver_exists, map_write_error, RESOURCE};
use crate::domain::gateways::{BusRepository, DriverRepository};
use crate::domain::models::bus::{Bus, BusData, BusId};
use crate::shared::errors::UseCaseError;

/// Use case for full bus update (PUT)
pub struct UpdateBusUseCase {
    bus_repository: Arc<dyn BusRepository>,
    driver_repository: Arc<dyn DriverRepository>,
}

impl UpdateBusUseCase {
    #[must_use]
    pub fn new(bus_repository: Arc<dyn BusRepository>, driver_repository: Arc<dyn DriverRepository>) -> Self {
        Self {
            bus_repository,
            driver_repository,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the bus doesn't exist.
    /// Returns `UseCaseError::Validation` if the assigned driver does not exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: BusId, data: BusData) -> Result<Bus, UseCaseError> {
        tracing::info!(bus_id = %id, "Updating bus");

        if self.bus_repository.find_by_id(id).await?.is_none() {
            tracing::warn!(bus_id = %id, "Bus not found for update");
            return Err(UseCaseError::not_found(RESOURCE, id));
        }

        ensure_driver_exists(self.driver_repository.as_ref(), data.assigned_driver_id).await?;

        let updated = self
            .bus_repository
            .update(id, &data)
            .await
            .map_err(|e| map_write_error(e, data.assigned_driver_id))?
            .ok_or_else(|| UseCaseError::not_found(RESOURCE, id))?;

        tracing::info!(bus_id = %id, "Bus updated successfully");
        Ok(updated)
    }
}
