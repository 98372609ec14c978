//! Delete Bus Use Case

use std::sync::Arc;

use super::RESOURCE;
use crate::domain::gateways::BusRepository;
use crate::domain::models::bus::BusId;
use crate::shared::errors::UseCaseError;

/// Use case for deleting a bus; its driver is untouched
pub struct DeleteBusUseCase {
    bus_repository: Arc<dyn BusRepository>,
}

impl DeleteBusUseCase {
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
    pub async fn execute(&self, id: BusId) -> Result<(), UseCaseError> {
        tracing::info!(bus_id = %id, "Deleting bus");

        if !self.bus_repository.delete(id).await? {
            tracing::warn!(bus_id = %id, "Bus not found for deletion");
            return Err(UseCaseError::not_found(RESOURCE, id));
        }

        tracing::info!(bus_id = %id, "Bus deleted successfully");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::MockBusRepository;

    #[tokio::test]
    async fn should_delete_bus_when_found() {
        let mut repo = MockBusRepository::new();
        repo.expect_delete().times(1).returning(|_| Ok(true));

        let use_case = DeleteBusUseCase::new(Arc::new(repo));
        assert!(use_case.execute(BusId::new(1)).await.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_bus_does_not_exist() {
        let mut repo = MockBusRepository::new();
        repo.expect_delete().returning(|_| Ok(false));

        let use_case = DeleteBusUseCase::new(Arc::new(repo));
        let result = use_case.execute(BusId::new(1)).await;

        assert!(matches!(result.unwrap_err(), UseCaseError::NotFound { .. }));
    }
}
