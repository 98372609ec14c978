//! Data Transfer Objects
//!
//! Request and response DTOs for the REST API.
//!
//! Writable request fields are kept as raw JSON values so that a value of
//! the wrong type is reported against its own field instead of failing
//! the whole body.

pub mod bus;
pub mod driver;

pub use bus::{BusRequestDto, BusResponseDto};
pub use driver::{DriverRequestDto, DriverResponseDto};

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use validator::ValidationError;

use crate::domain::models::driver::DriverId;
use crate::domain::models::validation::{
    dangling_reference_message, incorrect_pk_type, not_a_string, not_null, Supplied,
};

/// Keeps an explicit `null` as `Some(Value::Null)`; an absent key stays `None`
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Strings pass through and numbers are printed; anything else is rejected
fn text(value: Option<Value>) -> Supplied<String> {
    value.map(|value| match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Err(not_null()),
        _ => Err(not_a_string()),
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "NoneType",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}

fn out_of_range(pk: impl std::fmt::Display) -> ValidationError {
    let mut error = ValidationError::new("does_not_exist");
    error.message = Some(dangling_reference_message(pk).into());
    error
}

/// Decode a driver reference: null clears it, integers and numeric
/// strings name a driver
///
/// An integer outside the key range cannot match any row and is reported
/// as a missing object.
fn driver_reference(value: Option<Value>) -> Supplied<Option<DriverId>> {
    value.map(|value| {
        let pk = match &value {
            Value::Null => return Ok(None),
            Value::Number(n) if n.is_u64() && n.as_i64().is_none() => return Err(out_of_range(n)),
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        };
        let Some(pk) = pk else {
            return Err(incorrect_pk_type(json_type_name(&value)));
        };
        i32::try_from(pk)
            .map(|pk| Some(DriverId::new(pk)))
            .map_err(|_| out_of_range(pk))
    })
}
