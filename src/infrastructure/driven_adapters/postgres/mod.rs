//! PostgreSQL Repositories

mod bus_repository;
mod driver_repository;

pub use bus_repository::PostgresBusRepository;
pub use driver_repository::PostgresDriverRepository;
