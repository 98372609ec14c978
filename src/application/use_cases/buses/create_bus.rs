//! Create Bus Use Case
//!
//! Creates a bus, verifying the assigned driver (if any) exists first.

use std::sync::Arc;

use super::{ensure_driver_exists, map_write_error};
use crate::domain::gateways::{BusRepository, DriverRepository};
use crate::domain::models::bus::{Bus, BusData};
use crate::shared::errors::UseCaseError;

/// Use case for creating a new bus
pub struct CreateBusUseCase {
    bus_repository: Arc<dyn BusRepository>,
    driver_repository: Arc<dyn DriverRepository>,
}

impl CreateBusUseCase {
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
    /// Returns `UseCaseError::Validation` naming `assigned_driver_id` if the
    /// referenced driver does not exist; nothing is written in that case.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, data: BusData) -> Result<Bus, UseCaseError> {
        tracing::info!(bus_name = %data.bus_name, "Creating new bus");

        ensure_driver_exists(self.driver_repository.as_ref(), data.assigned_driver_id).await?;

        let created = self
            .bus_repository
            .create(&data)
            .await
            .map_err(|e| map_write_error(e, data.assigned_driver_id))?;

        tracing::info!(bus_id = %created.id(), "Bus created successfully");
        Ok(created)
    }
}
