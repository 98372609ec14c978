//! Get Bus By ID Use Case

use std::sync::Arc;

use super::RESOURCE;
use crate::domain::gateways::BusRepository;
use crate::domain::models::bus::{Bus, BusId};
use crate::shared::errors::UseCaseError;

/// Use case for getting a bus by ID
pub struct GetBusByIdUseCase {
    bus_repository: Arc<dyn BusRepository>,
}

impl GetBusByIdUseCase {
    #[must_use]
    pub fn new(bus_repository: Arc<dyn BusRepository>) -> Self {
        Self { bus_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the bus doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: BusId) -> Result<Bus, UseCaseError> {
        tracing::debug!(bus_id = %id, "Getting bus by ID");

        self.bus_repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(bus_id = %id, "Bus not found");
            UseCaseError::not_found(RESOURCE, id)
        })
    }
}
