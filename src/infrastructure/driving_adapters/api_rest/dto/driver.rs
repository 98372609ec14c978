//! Driver DTOs
//!
//! Data transfer objects for driver API endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::ValidationErrors;

use super::text;
use crate::domain::models::driver::{Driver, DriverData, DriverPatch};
use crate::domain::models::validation::{
    validate_max_length, validate_not_blank, validate_phone_number, FieldChecks, NAME_MAX_LENGTH,
};

const BLANK: &str = "This field may not be blank.";

fn name_rules(value: &str) -> Result<(), validator::ValidationError> {
    validate_not_blank(value, BLANK)?;
    validate_max_length(value, NAME_MAX_LENGTH)
}

fn phone_rules(value: &str) -> Result<(), validator::ValidationError> {
    validate_not_blank(value, BLANK)?;
    validate_phone_number(value)
}

/// Request body for driver writes
///
/// Fields stay raw JSON so that a missing, null or mistyped field is
/// reported as a field error rather than a body decoding failure.
/// `driver_id` in the body is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DriverRequestDto {
    #[serde(default, deserialize_with = "super::present")]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "super::present")]
    pub phone_number: Option<Value>,
}

impl DriverRequestDto {
    /// Validate for create / full update (POST, PUT): every field required
    ///
    /// # Errors
    ///
    /// Returns the per-field errors if any field is missing or invalid.
    pub fn into_data(self) -> Result<DriverData, ValidationErrors> {
        let mut checks = FieldChecks::new();
        let name = checks.required_text("name", text(self.name), &[&name_rules]);
        let phone_number = checks.required_text("phone_number", text(self.phone_number), &[&phone_rules]);
        checks.finish()?;

        match (name, phone_number) {
            (Some(name), Some(phone_number)) => Ok(DriverData { name, phone_number }),
            _ => Err(ValidationErrors::new()),
        }
    }

    /// Validate for partial update (PATCH): only supplied fields are checked
    ///
    /// # Errors
    ///
    /// Returns the per-field errors if a supplied field is invalid.
    pub fn into_patch(self) -> Result<DriverPatch, ValidationErrors> {
        let mut checks = FieldChecks::new();
        let name = checks.optional_text("name", text(self.name), &[&name_rules]);
        let phone_number = checks.optional_text("phone_number", text(self.phone_number), &[&phone_rules]);
        checks.finish()?;

        Ok(DriverPatch { name, phone_number })
    }
}

/// Driver response DTO
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DriverResponseDto {
    pub driver_id: i32,
    pub name: String,
    pub phone_number: String,
}

impl From<&Driver> for DriverResponseDto {
    fn from(driver: &Driver) -> Self {
        Self {
            driver_id: driver.id().value(),
            name: driver.name().to_string(),
            phone_number: driver.phone_number().to_string(),
        }
    }
}

impl From<Driver> for DriverResponseDto {
    fn from(driver: Driver) -> Self {
        Self::from(&driver)
    }
}
