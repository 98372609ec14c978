//! Update Driver Use Case (PUT)
//!
//! Replaces every writable field of an existing driver.

use std::sync::Arc;

use super::RESOURCE;
use crate::domain::gateways::DriverRepository;
use crate::domain::models::driver::{Driver, DriverData, DriverId};
use crate::shared::errors::UseCaseError;

/// Use case for full driver update (PUT)
pub struct UpdateDriverUseCase {
    driver_repository: Arc<dyn DriverRepository>,
}

impl UpdateDriverUseCase {
    #[must_use]
    pub fn new(driver_repository: Arc<dyn DriverRepository>) -> Self {
        Self { driver_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the driver doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: DriverId, data: DriverData) -> Result<Driver, UseCaseError> {
        tracing::info!(driver_id = %id, "Updating driver");

        let updated = self.driver_repository.update(id, &data).await?.ok_or_else(|| {
            tracing::warn!(driver_id = %id, "Driver not found for update");
            UseCaseError::not_found(RESOURCE, id)
        })?;

        tracing::info!(driver_id = %id, "Driver updated successfully");
        Ok(updated)
    }
}
