//! List Drivers Use Case
//!
//! Retrieves all drivers, sorted by name.

use std::sync::Arc;

use crate::domain::gateways::DriverRepository;
use crate::domain::models::driver::Driver;
use crate::shared::errors::UseCaseError;

/// Use case for listing all drivers
pub struct ListDriversUseCase {
    driver_repository: Arc<dyn DriverRepository>,
}

impl ListDriversUseCase {
    #[must_use]
    pub fn new(driver_repository: Arc<dyn DriverRepository>) -> Self {
        Self { driver_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self) -> Result<Vec<Driver>, UseCaseError> {
        tracing::debug!("Listing drivers");

        let drivers = self.driver_repository.find_all().await?;

        tracing::debug!(count = drivers.len(), "Found drivers");
        Ok(drivers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::drivers::test_support::driver;
    use crate::domain::gateways::MockDriverRepository;
    use crate::shared::errors::RepositoryError;

    #[tokio::test]
    async fn should_return_drivers_from_repository() {
        let mut repo = MockDriverRepository::new();
        repo.expect_find_all()
            .times(1)
            .returning(|| Ok(vec![driver(2, "Alice", "5550001"), driver(1, "Bob", "5550002")]));

        let use_case = ListDriversUseCase::new(Arc::new(repo));
        let drivers = use_case.execute().await.unwrap();

        assert_eq!(drivers.len(), 2);
        assert_eq!(drivers[0].name(), "Alice");
    }

    #[tokio::test]
    async fn should_propagate_repository_failure() {
        let mut repo = MockDriverRepository::new();
        repo.expect_find_all()
            .returning(|| Err(RepositoryError::Database(sqlx::Error::PoolTimedOut)));

        let use_case = ListDriversUseCase::new(Arc::new(repo));
        let result = use_case.execute().await;

        assert!(matches!(result.unwrap_err(), UseCaseError::Repository(_)));
    }
}
