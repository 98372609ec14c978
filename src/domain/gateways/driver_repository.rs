//! Driver Repository Gateway
//!
//! Abstract trait defining the contract for driver persistence operations.

use async_trait::async_trait;

use crate::domain::models::driver::{Driver, DriverData, DriverId};
use crate::shared::errors::RepositoryError;

/// Repository trait for Driver persistence operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DriverRepository: Send + Sync {
    /// Find all drivers, sorted by name ascending
    async fn find_all(&self) -> Result<Vec<Driver>, RepositoryError>;

    /// Find a driver by its ID
    async fn find_by_id(&self, id: DriverId) -> Result<Option<Driver>, RepositoryError>;

    /// Check whether a driver with the given ID exists
    async fn exists(&self, id: DriverId) -> Result<bool, RepositoryError>;

    /// Insert a new driver, returning it with its assigned ID
    async fn create(&self, data: &DriverData) -> Result<Driver, RepositoryError>;

    /// Replace a driver's fields; `None` if no such driver
    async fn update(&self, id: DriverId, data: &DriverData) -> Result<Option<Driver>, RepositoryError>;

    /// Delete a driver, clearing it from any bus it was assigned to.
    /// Returns false if no such driver.
    async fn delete(&self, id: DriverId) -> Result<bool, RepositoryError>;
}
