//! Bus DTOs
//!
//! Data transfer objects for bus API endpoints. The assigned driver is
//! written by id (`assigned_driver_id`) and read back nested
//! (`assigned_driver`).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::ValidationErrors;

use super::driver::DriverResponseDto;
use super::{driver_reference, text};
use crate::domain::models::bus::{Bus, BusData, BusPatch};
use crate::domain::models::validation::{
    validate_max_length, validate_not_blank, FieldChecks, BUS_NAME_MAX_LENGTH, ROUTE_MAX_LENGTH,
};

fn bus_name_rules(value: &str) -> Result<(), validator::ValidationError> {
    validate_not_blank(value, "Bus name cannot be empty.")?;
    validate_max_length(value, BUS_NAME_MAX_LENGTH)
}

fn route_rules(value: &str) -> Result<(), validator::ValidationError> {
    validate_not_blank(value, "Route cannot be empty.")?;
    validate_max_length(value, ROUTE_MAX_LENGTH)
}

const ASSIGNED_DRIVER_FIELD: &str = "assigned_driver_id";

/// Request body for bus writes
///
/// Fields stay raw JSON; an absent `assigned_driver_id` (`None`) is kept
/// apart from an explicit null (`Some(Value::Null)`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BusRequestDto {
    #[serde(default, deserialize_with = "super::present")]
    pub bus_name: Option<Value>,
    #[serde(default, deserialize_with = "super::present")]
    pub route: Option<Value>,
    #[serde(default, deserialize_with = "super::present")]
    pub assigned_driver_id: Option<Value>,
}

impl BusRequestDto {
    /// Validate for create / full update (POST, PUT)
    ///
    /// An absent or null `assigned_driver_id` leaves the bus unassigned.
    /// Driver existence is checked later by the use case.
    ///
    /// # Errors
    ///
    /// Returns the per-field errors if a required field is missing or blank,
    /// or if `assigned_driver_id` is not a usable primary key.
    pub fn into_data(self) -> Result<BusData, ValidationErrors> {
        let mut checks = FieldChecks::new();
        let bus_name = checks.required_text("bus_name", text(self.bus_name), &[&bus_name_rules]);
        let route = checks.required_text("route", text(self.route), &[&route_rules]);
        let assigned_driver_id = checks
            .supplied(ASSIGNED_DRIVER_FIELD, driver_reference(self.assigned_driver_id))
            .flatten()
            .flatten();
        checks.finish()?;

        match (bus_name, route) {
            (Some(bus_name), Some(route)) => Ok(BusData {
                bus_name,
                route,
                assigned_driver_id,
            }),
            _ => Err(ValidationErrors::new()),
        }
    }

    /// Validate for partial update (PATCH)
    ///
    /// # Errors
    ///
    /// Returns the per-field errors if a supplied field is blank or mistyped.
    pub fn into_patch(self) -> Result<BusPatch, ValidationErrors> {
        let mut checks = FieldChecks::new();
        let bus_name = checks.optional_text("bus_name", text(self.bus_name), &[&bus_name_rules]);
        let route = checks.optional_text("route", text(self.route), &[&route_rules]);
        let assigned_driver_id = checks
            .supplied(ASSIGNED_DRIVER_FIELD, driver_reference(self.assigned_driver_id))
            .map(Option::flatten);
        checks.finish()?;

        Ok(BusPatch {
            bus_name,
            route,
            assigned_driver_id,
        })
    }
}

/// Bus response DTO
#[derive(Debug, Clone, Serialize)]
pub struct BusResponseDto {
    pub id: i32,
    pub bus_name: String,
    pub route: String,
    pub assigned_driver: Option<DriverResponseDto>,
}

impl From<Bus> for BusResponseDto {
    fn from(bus: Bus) -> Self {
        Self {
            id: bus.id().value(),
            bus_name: bus.bus_name().to_string(),
            route: bus.route().to_string(),
            assigned_driver: bus.assigned_driver().map(DriverResponseDto::from),
        }
    }
}
