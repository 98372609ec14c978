//! Delete Driver Use Case
//!
//! Removes a driver. Buses assigned to it keep existing with no driver.

use std::sync::Arc;

use super::RESOURCE;
use crate::domain::gateways::DriverRepository;
use crate::domain::models::driver::DriverId;
use crate::shared::errors::UseCaseError;

/// Use case for deleting a driver
pub struct DeleteDriverUseCase {
    driver_repository: Arc<dyn DriverRepository>,
}

impl DeleteDriverUseCase {
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
    pub async fn execute(&self, id: DriverId) -> Result<(), UseCaseError> {
        tracing::info!(driver_id = %id, "Deleting driver");

        if !self.driver_repository.delete(id).await? {
            tracing::warn!(driver_id = %id, "Driver not found for deletion");
            return Err(UseCaseError::not_found(RESOURCE, id));
        }

        tracing::info!(driver_id = %id, "Driver deleted successfully");
        Ok(())
    }
}
