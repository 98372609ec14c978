//! Driver Use Cases
//!
//! Business logic for managing drivers.

mod create_driver;
mod delete_driver;
mod get_driver_by_id;
mod list_drivers;
mod partial_update_driver;
mod update_driver;

pub use create_driver::CreateDriverUseCase;
pub use delete_driver::DeleteDriverUseCase;
pub use get_driver_by_id::GetDriverByIdUseCase;
pub use list_drivers::ListDriversUseCase;
pub use partial_update_driver::PartialUpdateDriverUseCase;
pub use update_driver::UpdateDriverUseCase;

const RESOURCE: &str = "Driver";
