//! Partial Update Driver Use Case (PATCH)
//!
//! Updates only the provided fields of a driver.

use std::sync::Arc;

use super::RESOURCE;
use crate::domain::gateways::DriverRepository;
use crate::domain::models::driver::{Driver, DriverId, DriverPatch};
use crate::shared::errors::UseCaseError;

/// Use case for partial driver update (PATCH)
pub struct PartialUpdateDriverUseCase {
    driver_repository: Arc<dyn DriverRepository>,
}

impl PartialUpdateDriverUseCase {
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
    pub async fn execute(&self, id: DriverId, patch: DriverPatch) -> Result<Driver, UseCaseError> {
        tracing::info!(driver_id = %id, "Partially updating driver");

        let existing = self.driver_repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(driver_id = %id, "Driver not found for partial update");
            UseCaseError::not_found(RESOURCE, id)
        })?;

        let data = existing.with_patch(patch);
        let updated = self
            .driver_repository
            .update(id, &data)
            .await?
            .ok_or_else(|| UseCaseError::not_found(RESOURCE, id))?;

        tracing::info!(driver_id = %id, "Driver partially updated successfully");
        Ok(updated)
    }
}
