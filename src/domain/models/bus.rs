//! Bus Domain Model
//!
//! A vehicle running a route, optionally driven by an assigned driver.
//! The bus does not own its driver: deleting the driver only clears
//! the assignment.

use super::driver::{Driver, DriverId};

/// Newtype wrapper for the auto-assigned bus identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BusId(i32);

impl BusId {
    #[must_use]
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for BusId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for BusId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl std::str::FromStr for BusId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// Validated data for writing a bus (create or full replace)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusData {
    pub bus_name: String,
    pub route: String,
    pub assigned_driver_id: Option<DriverId>,
}

/// Validated data for a partial bus update
///
/// `assigned_driver_id` is doubly optional: `None` leaves the assignment
/// alone, `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BusPatch {
    pub bus_name: Option<String>,
    pub route: Option<String>,
    pub assigned_driver_id: Option<Option<DriverId>>,
}

/// Bus domain entity, carrying its resolved driver if one is assigned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bus {
    id: BusId,
    bus_name: String,
    route: String,
    assigned_driver: Option<Driver>,
}

impl Bus {
    /// Restore a Bus from persisted data
    #[must_use]
    pub fn restore(id: BusId, bus_name: String, route: String, assigned_driver: Option<Driver>) -> Self {
        Self {
            id,
            bus_name,
            route,
            assigned_driver,
        }
    }

    /// Merge a partial update over the current state, producing full write data
    #[must_use]
    pub fn with_patch(&self, patch: BusPatch) -> BusData {
        BusData {
            bus_name: patch.bus_name.unwrap_or_else(|| self.bus_name.clone()),
            route: patch.route.unwrap_or_else(|| self.route.clone()),
            assigned_driver_id: patch
                .assigned_driver_id
                .unwrap_or_else(|| self.assigned_driver_id()),
        }
    }

    #[must_use]
    pub fn id(&self) -> BusId {
        self.id
    }

    #[must_use]
    pub fn bus_name(&self) -> &str {
        &self.bus_name
    }

    #[must_use]
    pub fn route(&self) -> &str {
        &self.route
    }

    #[must_use]
    pub fn assigned_driver(&self) -> Option<&Driver> {
        self.assigned_driver.as_ref()
    }

    #[must_use]
    pub fn assigned_driver_id(&self) -> Option<DriverId> {
        self.assigned_driver.as_ref().map(Driver::id)
    }
}
