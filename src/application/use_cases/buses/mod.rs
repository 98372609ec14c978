//! Bus Use Cases
//!
//! Business logic for managing buses and their driver assignment.

mod create_bus;
mod delete_bus;
mod get_bus_by_id;
mod list_buses;
mod partial_update_bus;
mod update_bus;

pub use create_bus::CreateBusUseCase;
pub use delete_bus::DeleteBusUseCase;
pub use get_bus_by_id::GetBusByIdUseCase;
pub use list_buses::ListBusesUseCase;
pub use partial_update_bus::PartialUpdateBusUseCase;
pub use update_bus::UpdateBusUseCase;

use crate::domain::gateways::DriverRepository;
use crate::domain::models::driver::DriverId;
use crate::domain::models::validation::dangling_reference_message;
use crate::shared::errors::{RepositoryError, UseCaseError};

const RESOURCE: &str = "Bus";
const ASSIGNED_DRIVER_FIELD: &str = "assigned_driver_id";

fn unknown_driver(id: DriverId) -> UseCaseError {
    UseCaseError::invalid_field(ASSIGNED_DRIVER_FIELD, dangling_reference_message(id.value()))
}

/// Reject the write before touching the bus table if the driver is missing
async fn ensure_driver_exists(
    driver_repository: &dyn DriverRepository,
    driver_id: Option<DriverId>,
) -> Result<(), UseCaseError> {
    let Some(id) = driver_id else {
        return Ok(());
    };
    if driver_repository.exists(id).await? {
        Ok(())
    } else {
        tracing::warn!(driver_id = %id, "Assigned driver does not exist");
        Err(unknown_driver(id))
    }
}

/// A driver deleted after the existence check surfaces as a dangling
/// reference from storage; report it the same way.
fn map_write_error(err: RepositoryError, driver_id: Option<DriverId>) -> UseCaseError {
    match (err, driver_id) {
        (RepositoryError::DanglingReference(_), Some(id)) => unknown_driver(id),
        (err, _) => UseCaseError::Repository(err),
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::MockDriverRepository;
    use crate::shared::errors::FieldError;

    #[tokio::test]
    async fn unassigned_bus_skips_driver_lookup() {
        let mut repo = MockDriverRepository::new();
        repo.expect_exists().times(0);

        assert!(ensure_driver_exists(&repo, None).await.is_ok());
    }

    #[tokio::test]
    async fn missing_driver_is_a_field_error() {
        let mut repo = MockDriverRepository::new();
        repo.expect_exists().returning(|_| Ok(false));

        let err = ensure_driver_exists(&repo, Some(DriverId::new(9999)))
            .await
            .unwrap_err();

        match err {
            UseCaseError::Validation(errors) => assert_eq!(
                errors,
                vec![FieldError::new(
                    "assigned_driver_id",
                    "Invalid pk \"9999\" - object does not exist."
                )]
            ),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn dangling_reference_from_storage_becomes_field_error() {
        let err = map_write_error(
            RepositoryError::DanglingReference("buses_assigned_driver_id_fkey".into()),
            Some(DriverId::new(3)),
        );
        assert!(matches!(err, UseCaseError::Validation(_)));
    }

    #[test]
    fn other_storage_failures_stay_internal() {
        let err = map_write_error(
            RepositoryError::Database(sqlx::Error::PoolTimedOut),
            Some(DriverId::new(3)),
        );
        assert!(matches!(err, UseCaseError::Repository(_)));
    }
}
