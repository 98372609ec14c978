//! In-Memory Repository Implementation
//!
//! A single store backing both repositories, so that deleting a driver
//! can clear it from buses the way the `ON DELETE SET NULL` constraint
//! does in PostgreSQL. Used by the HTTP tests and for running without
//! a database.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::gateways::{BusRepository, DriverRepository};
use crate::domain::models::bus::{Bus, BusData, BusId};
use crate::domain::models::driver::{Driver, DriverData, DriverId};
use crate::shared::errors::RepositoryError;

#[derive(Debug, Clone)]
struct BusRecord {
    bus_name: String,
    route: String,
    assigned_driver_id: Option<DriverId>,
}

#[derive(Debug, Default)]
struct Tables {
    drivers: BTreeMap<DriverId, DriverData>,
    buses: BTreeMap<BusId, BusRecord>,
    next_driver_id: i32,
    next_bus_id: i32,
}

impl Tables {
    fn driver(&self, id: DriverId) -> Option<Driver> {
        self.drivers
            .get(&id)
            .map(|d| Driver::restore(id, d.name.clone(), d.phone_number.clone()))
    }

    fn bus(&self, id: BusId) -> Option<Bus> {
        self.buses.get(&id).map(|b| {
            Bus::restore(
                id,
                b.bus_name.clone(),
                b.route.clone(),
                b.assigned_driver_id.and_then(|d| self.driver(d)),
            )
        })
    }

    fn check_reference(&self, driver_id: Option<DriverId>) -> Result<(), RepositoryError> {
        match driver_id {
            Some(id) if !self.drivers.contains_key(&id) => {
                Err(RepositoryError::DanglingReference(format!("driver {id}")))
            }
            _ => Ok(()),
        }
    }
}

fn record(data: &BusData) -> BusRecord {
    BusRecord {
        bus_name: data.bus_name.clone(),
        route: data.route.clone(),
        assigned_driver_id: data.assigned_driver_id,
    }
}

/// In-memory store implementing both `DriverRepository` and `BusRepository`
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DriverRepository for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Driver>, RepositoryError> {
        let tables = self.tables.read().await;
        let mut drivers: Vec<Driver> = tables.drivers.keys().filter_map(|id| tables.driver(*id)).collect();
        drivers.sort_by(|a, b| a.name().cmp(b.name()).then(a.id().cmp(&b.id())));
        Ok(drivers)
    }

    async fn find_by_id(&self, id: DriverId) -> Result<Option<Driver>, RepositoryError> {
        Ok(self.tables.read().await.driver(id))
    }

    async fn exists(&self, id: DriverId) -> Result<bool, RepositoryError> {
        Ok(self.tables.read().await.drivers.contains_key(&id))
    }

    async fn create(&self, data: &DriverData) -> Result<Driver, RepositoryError> {
        let mut tables = self.tables.write().await;
        tables.next_driver_id += 1;
        let id = DriverId::new(tables.next_driver_id);
        tables.drivers.insert(id, data.clone());
        Ok(Driver::restore(id, data.name.clone(), data.phone_number.clone()))
    }

    async fn update(&self, id: DriverId, data: &DriverData) -> Result<Option<Driver>, RepositoryError> {
        let mut tables = self.tables.write().await;
        match tables.drivers.get_mut(&id) {
            Some(stored) => {
                *stored = data.clone();
                Ok(tables.driver(id))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: DriverId) -> Result<bool, RepositoryError> {
        let mut tables = self.tables.write().await;
        if tables.drivers.remove(&id).is_none() {
            return Ok(false);
        }
        for bus in tables.buses.values_mut() {
            if bus.assigned_driver_id == Some(id) {
                bus.assigned_driver_id = None;
            }
        }
        Ok(true)
    }
}

#[async_trait]
impl BusRepository for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Bus>, RepositoryError> {
        let tables = self.tables.read().await;
        let mut buses: Vec<Bus> = tables.buses.keys().filter_map(|id| tables.bus(*id)).collect();
        buses.sort_by(|a, b| a.bus_name().cmp(b.bus_name()).then(a.id().cmp(&b.id())));
        Ok(buses)
    }

    async fn find_by_id(&self, id: BusId) -> Result<Option<Bus>, RepositoryError> {
        Ok(self.tables.read().await.bus(id))
    }

    async fn create(&self, data: &BusData) -> Result<Bus, RepositoryError> {
        let mut tables = self.tables.write().await;
        tables.check_reference(data.assigned_driver_id)?;
        tables.next_bus_id += 1;
        let id = BusId::new(tables.next_bus_id);
        tables.buses.insert(id, record(data));
        tables
            .bus(id)
            .ok_or_else(|| RepositoryError::DanglingReference(format!("bus {id}")))
    }

    async fn update(&self, id: BusId, data: &BusData) -> Result<Option<Bus>, RepositoryError> {
        let mut tables = self.tables.write().await;
        if !tables.buses.contains_key(&id) {
            return Ok(None);
        }
        tables.check_reference(data.assigned_driver_id)?;
        tables.buses.insert(id, record(data));
        Ok(tables.bus(id))
    }

    async fn delete(&self, id: BusId) -> Result<bool, RepositoryError> {
        Ok(self.tables.write().await.buses.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver_data(name: &str) -> DriverData {
        DriverData {
            name: name.to_string(),
            phone_number: "1234567890".to_string(),
        }
    }

    fn bus_data(name: &str, driver: Option<DriverId>) -> BusData {
        BusData {
            bus_name: name.to_string(),
            route: "Route 1".to_string(),
            assigned_driver_id: driver,
        }
    }

    #[tokio::test]
    async fn test_ids_are_assigned_sequentially() {
        let store = InMemoryStore::new();
        let first = DriverRepository::create(&store, &driver_data("A")).await.unwrap();
        let second = DriverRepository::create(&store, &driver_data("B")).await.unwrap();
        assert_eq!(first.id(), DriverId::new(1));
        assert_eq!(second.id(), DriverId::new(2));
    }

    #[tokio::test]
    async fn test_drivers_are_listed_by_name() {
        let store = InMemoryStore::new();
        DriverRepository::create(&store, &driver_data("Zed")).await.unwrap();
        DriverRepository::create(&store, &driver_data("Amy")).await.unwrap();

        let names: Vec<String> = DriverRepository::find_all(&store)
            .await
            .unwrap()
            .iter()
            .map(|d| d.name().to_string())
            .collect();
        assert_eq!(names, vec!["Amy", "Zed"]);
    }

    #[tokio::test]
    async fn test_bus_with_unknown_driver_is_rejected() {
        let store = InMemoryStore::new();
        let result = BusRepository::create(&store, &bus_data("Bus 1", Some(DriverId::new(9)))).await;

        assert!(matches!(result, Err(RepositoryError::DanglingReference(_))));
        assert!(BusRepository::find_all(&store).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_deleting_driver_clears_bus_assignment() {
        let store = InMemoryStore::new();
        let driver = DriverRepository::create(&store, &driver_data("John Doe")).await.unwrap();
        let bus = BusRepository::create(&store, &bus_data("Bus 1", Some(driver.id())))
            .await
            .unwrap();
        assert_eq!(bus.assigned_driver().map(Driver::name), Some("John Doe"));

        assert!(DriverRepository::delete(&store, driver.id()).await.unwrap());

        let bus = BusRepository::find_by_id(&store, bus.id()).await.unwrap().unwrap();
        assert!(bus.assigned_driver().is_none());
    }

    #[tokio::test]
    async fn test_bus_reflects_driver_updates() {
        let store = InMemoryStore::new();
        let driver = DriverRepository::create(&store, &driver_data("John Doe")).await.unwrap();
        let bus = BusRepository::create(&store, &bus_data("Bus 1", Some(driver.id())))
            .await
            .unwrap();

        DriverRepository::update(&store, driver.id(), &driver_data("John Updated"))
            .await
            .unwrap();

        let bus = BusRepository::find_by_id(&store, bus.id()).await.unwrap().unwrap();
        assert_eq!(bus.assigned_driver().map(Driver::name), Some("John Updated"));
    }

    #[tokio::test]
    async fn test_update_and_delete_of_missing_rows() {
        let store = InMemoryStore::new();
        assert!(DriverRepository::update(&store, DriverId::new(1), &driver_data("x"))
            .await
            .unwrap()
            .is_none());
        assert!(!DriverRepository::delete(&store, DriverId::new(1)).await.unwrap());
        assert!(BusRepository::update(&store, BusId::new(1), &bus_data("x", None))
            .await
            .unwrap()
            .is_none());
        assert!(!BusRepository::delete(&store, BusId::new(1)).await.unwrap());
    }
}
