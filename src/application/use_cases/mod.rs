//! Use Cases
//!
//! Application-specific business rules.
//! Each use case is a single-purpose struct with an execute() method.

pub mod buses;
pub mod drivers;

pub use buses::{
    CreateBusUseCase, DeleteBusUseCase, GetBusByIdUseCase, ListBusesUseCase, PartialUpdateBusUseCase,
    UpdateBusUseCase,
};
pub use drivers::{
    CreateDriverUseCase, DeleteDriverUseCase, GetDriverByIdUseCase, ListDriversUseCase,
    PartialUpdateDriverUseCase, UpdateDriverUseCase,
};
