//! Bus Repository Gateway

use async_trait::async_trait;

use crate::domain::models::bus::{Bus, BusData, BusId};
use crate::shared::errors::RepositoryError;

/// Repository trait for Bus persistence operations
///
/// Returned buses carry their assigned driver already resolved.
/// Writes referencing a missing driver fail with
/// `RepositoryError::DanglingReference`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BusRepository: Send + Sync {
    /// Find all buses, sorted by bus name ascending
    async fn find_all(&self) -> Result<Vec<Bus>, RepositoryError>;

    async fn find_by_id(&self, id: BusId) -> Result<Option<Bus>, RepositoryError>;

    async fn create(&self, data: &BusData) -> Result<Bus, RepositoryError>;

    /// Replace a bus's fields; `None` if no such bus
    async fn update(&self, id: BusId, data: &BusData) -> Result<Option<Bus>, RepositoryError>;

    /// Returns false if no such bus
    async fn delete(&self, id: BusId) -> Result<bool, RepositoryError>;
}
