//! Partial Update Bus Use Case (PATCH)
//!
//! Updates only the provided fields; an explicit null driver unassigns.

use std::sync::Arc;

use super::{ensure_driver_exists, map_write_error, RESOURCE};
use crate::domain::gateways::{BusRepository, DriverRepository};
use crate::domain::models::bus::{Bus, BusId, BusPatch};
use crate::shared::errors::{RepositoryError, UseCaseError};

/// Use case for partial bus update (PATCH)
pub struct PartialUpdateBusUseCase {
    bus_repository: Arc<dyn BusRepository>,
    driver_repository: Arc<dyn DriverRepository>,
}

impl PartialUpdateBusUseCase {
    #[must_use]
    pub fn new(bus_repository: Arc<dyn BusRepository>, driver_repository: Arc<dyn DriverRepository>) -> Self {
        Self {
            bus_repository,
            driver_repository,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the bus doesn't exist.
    /// Returns `UseCaseError::Validation` if a newly assigned driver does not exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: BusId, patch: BusPatch) -> Result<Bus, UseCaseError> {
        tracing::info!(bus_id = %id, "Partially updating bus");

        // only a driver named in this request needs checking
        let requested = patch.assigned_driver_id;
        let mut retried = false;

        loop {
            let existing = self.bus_repository.find_by_id(id).await?.ok_or_else(|| {
                tracing::warn!(bus_id = %id, "Bus not found for partial update");
                UseCaseError::not_found(RESOURCE, id)
            })?;

            if let Some(driver_id) = requested {
                ensure_driver_exists(self.driver_repository.as_ref(), driver_id).await?;
            }

            let data = existing.with_patch(patch.clone());
            match self.bus_repository.update(id, &data).await {
                Ok(Some(updated)) => {
                    tracing::info!(bus_id = %id, "Bus partially updated successfully");
                    return Ok(updated);
                }
                Ok(None) => return Err(UseCaseError::not_found(RESOURCE, id)),
                // the kept driver was deleted since the read; its buses are unassigned now
                Err(RepositoryError::DanglingReference(_)) if requested.is_none() && !retried => {
                    tracing::warn!(bus_id = %id, "Stored driver vanished during partial update, retrying");
                    retried = true;
                }
                Err(e) => return Err(map_write_error(e, requested.flatten())),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::buses::test_support::{bus, stored};
    use crate::domain::gateways::{MockBusRepository, MockDriverRepository};
    use crate::domain::models::driver::DriverId;

    #[tokio::test]
    async fn should_keep_driver_when_patch_omits_it() {
        let mut drivers = MockDriverRepository::new();
        drivers.expect_exists().times(0);
        let mut buses = MockBusRepository::new();
        buses.expect_find_by_id().returning(|id| Ok(Some(bus(id.value(), Some(1)))));
        buses
            .expect_update()
            .withf(|_, data| data.assigned_driver_id == Some(DriverId::new(1)) && data.route == "Route 7")
            .returning(|id, data| Ok(Some(stored(id.value(), data))));

        let use_case = PartialUpdateBusUseCase::new(Arc::new(buses), Arc::new(drivers));
        let patch = BusPatch {
            route: Some("Route 7".to_string()),
            ..Default::default()
        };
        let updated = use_case.execute(BusId::new(1), patch).await.unwrap();

        assert_eq!(updated.bus_name(), "Bus 1");
        assert_eq!(updated.route(), "Route 7");
    }

    #[tokio::test]
    async fn should_unassign_driver_on_explicit_null() {
        let drivers = MockDriverRepository::new();
        let mut buses = MockBusRepository::new();
        buses.expect_find_by_id().returning(|id| Ok(Some(bus(id.value(), Some(1)))));
        buses
            .expect_update()
            .returning(|id, data| Ok(Some(stored(id.value(), data))));

        let use_case = PartialUpdateBusUseCase::new(Arc::new(buses), Arc::new(drivers));
        let patch = BusPatch {
            assigned_driver_id: Some(None),
            ..Default::default()
        };
        let updated = use_case.execute(BusId::new(1), patch).await.unwrap();

        assert!(updated.assigned_driver().is_none());
    }

    #[tokio::test]
    async fn should_reject_unknown_driver_without_writing() {
        let mut drivers = MockDriverRepository::new();
        drivers.expect_exists().returning(|_| Ok(false));
        let mut buses = MockBusRepository::new();
        buses.expect_find_by_id().returning(|id| Ok(Some(bus(id.value(), None))));
        buses.expect_update().times(0);

        let use_case = PartialUpdateBusUseCase::new(Arc::new(buses), Arc::new(drivers));
        let patch = BusPatch {
            assigned_driver_id: Some(Some(DriverId::new(9999))),
            ..Default::default()
        };
        let result = use_case.execute(BusId::new(1), patch).await;

        assert!(matches!(result.unwrap_err(), UseCaseError::Validation(_)));
    }

    #[tokio::test]
    async fn should_return_not_found_when_bus_does_not_exist() {
        let drivers = MockDriverRepository::new();
        let mut buses = MockBusRepository::new();
        buses.expect_find_by_id().returning(|_| Ok(None));

        let use_case = PartialUpdateBusUseCase::new(Arc::new(buses), Arc::new(drivers));
        let result = use_case.execute(BusId::new(1), BusPatch::default()).await;

        assert!(matches!(result.unwrap_err(), UseCaseError::NotFound { .. }));
    }

    #[tokio::test]
    async fn should_retry_when_kept_driver_is_deleted_mid_update() {
        let drivers = MockDriverRepository::new();
        let mut buses = MockBusRepository::new();
        let mut reads = 0;
        buses.expect_find_by_id().times(2).returning(move |id| {
            reads += 1;
            // first read still sees the driver, second sees it cleared
            let assigned = if reads == 1 { Some(1) } else { None };
            Ok(Some(bus(id.value(), assigned)))
        });
        buses
            .expect_update()
            .times(1)
            .withf(|_, data| data.assigned_driver_id.is_some())
            .returning(|_, _| Err(RepositoryError::DanglingReference("fk".into())));
        buses
            .expect_update()
            .times(1)
            .withf(|_, data| data.assigned_driver_id.is_none())
            .returning(|id, data| Ok(Some(stored(id.value(), data))));

        let use_case = PartialUpdateBusUseCase::new(Arc::new(buses), Arc::new(drivers));
        let patch = BusPatch {
            route: Some("Route 9".to_string()),
            ..Default::default()
        };
        let updated = use_case.execute(BusId::new(1), patch).await.unwrap();

        assert_eq!(updated.route(), "Route 9");
        assert!(updated.assigned_driver().is_none());
    }
}
