//! Get Driver By ID Use Case

use std::sync::Arc;

use super::RESOURCE;
use crate::domain::gateways::DriverRepository;
use crate::domain::models::driver::{Driver, DriverId};
use crate::shared::errors::UseCaseError;

/// Use case for getting a driver by ID
pub struct GetDriverByIdUseCase {
    driver_repository: Arc<dyn DriverRepository>,
}

impl GetDriverByIdUseCase {
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
    pub async fn execute(&self, id: DriverId) -> Result<Driver, UseCaseError> {
        tracing::debug!(driver_id = %id, "Getting driver by ID");

        self.driver_repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(driver_id = %id, "Driver not found");
            UseCaseError::not_found(RESOURCE, id)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::drivers::test_support::john_doe;
    use crate::domain::gateways::MockDriverRepository;

    #[tokio::test]
    async fn should_return_driver_when_found() {
        let mut repo = MockDriverRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(Some(john_doe())));

        let use_case = GetDriverByIdUseCase::new(Arc::new(repo));
        let driver = use_case.execute(DriverId::new(1)).await.unwrap();

        assert_eq!(driver.name(), "John Doe");
    }

    #[tokio::test]
    async fn should_return_not_found_when_driver_does_not_exist() {
        let mut repo = MockDriverRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let use_case = GetDriverByIdUseCase::new(Arc::new(repo));
        let result = use_case.execute(DriverId::new(99)).await;

        assert!(matches!(result.unwrap_err(), UseCaseError::NotFound { .. }));
    }
}
