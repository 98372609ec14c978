//! Create Driver Use Case

use std::sync::Arc;

use crate::domain::gateways::DriverRepository;
use crate::domain::models::driver::{Driver, DriverData};
use crate::shared::errors::UseCaseError;

/// Use case for creating a new driver
pub struct CreateDriverUseCase {
    driver_repository: Arc<dyn DriverRepository>,
}

impl CreateDriverUseCase {
    #[must_use]
    pub fn new(driver_repository: Arc<dyn DriverRepository>) -> Self {
        Self { driver_repository }
    }

    /// Execute the use case. `data` must already be validated.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, data: DriverData) -> Result<Driver, UseCaseError> {
        tracing::info!(name = %data.name, "Creating new driver");

        let created = self.driver_repository.create(&data).await?;

        tracing::info!(driver_id = %created.id(), "Driver created successfully");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::drivers::test_support::stored;
    use crate::domain::gateways::MockDriverRepository;
    use crate::domain::models::driver::DriverId;

    #[tokio::test]
    async fn should_return_driver_with_generated_id() {
        let mut repo = MockDriverRepository::new();
        repo.expect_create().times(1).returning(|data| Ok(stored(7, data)));

        let use_case = CreateDriverUseCase::new(Arc::new(repo));
        let driver = use_case
            .execute(DriverData {
                name: "Jane Smith".to_string(),
                phone_number: "9876543210".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(driver.id(), DriverId::new(7));
        assert_eq!(driver.name(), "Jane Smith");
        assert_eq!(driver.phone_number(), "9876543210");
    }
}
