//! Field Validation Rules
//!
//! Explicit rule functions shared by the driver and bus write paths.
//! Each rule works on an already-trimmed value and reports a
//! `validator::ValidationError` carrying the user-facing message.

use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;
use validator::{ValidationError, ValidationErrors};

pub const NAME_MAX_LENGTH: usize = 100;
pub const BUS_NAME_MAX_LENGTH: usize = 100;
pub const ROUTE_MAX_LENGTH: usize = 200;
pub const PHONE_MIN_LENGTH: usize = 7;
pub const PHONE_MAX_LENGTH: usize = 15;

lazy_static! {
    static ref DIGITS_REGEX: Regex = Regex::new(r"^\d+$").expect("valid regex");
}

fn error(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

/// Error for a required field that was not supplied
#[must_use]
pub fn required() -> ValidationError {
    error("required", "This field is required.")
}

/// Error for a field sent as an explicit null where null is not allowed
#[must_use]
pub fn not_null() -> ValidationError {
    error("null", "This field may not be null.")
}

/// Error for a text field sent as a JSON value that is not text-like
#[must_use]
pub fn not_a_string() -> ValidationError {
    error("invalid", "Not a valid string.")
}

/// Error for a reference sent as something other than a primary key
#[must_use]
pub fn incorrect_pk_type(received: &str) -> ValidationError {
    error(
        "incorrect_type",
        format!("Incorrect type. Expected pk value, received {received}."),
    )
}

/// Rejects empty values; `message` lets callers phrase it per field
pub fn validate_not_blank(value: &str, message: &'static str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(error("blank", message));
    }
    Ok(())
}

/// Rejects values longer than `max` characters
pub fn validate_max_length(value: &str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(error(
            "max_length",
            format!("Ensure this field has no more than {max} characters."),
        ));
    }
    Ok(())
}

/// Phone numbers are digits only, 7 to 15 characters long
pub fn validate_phone_number(value: &str) -> Result<(), ValidationError> {
    if !DIGITS_REGEX.is_match(value) {
        return Err(error("phone_digits", "Phone number must contain only digits."));
    }
    let len = value.chars().count();
    if !(PHONE_MIN_LENGTH..=PHONE_MAX_LENGTH).contains(&len) {
        return Err(error(
            "phone_length",
            format!("Phone number must be between {PHONE_MIN_LENGTH} and {PHONE_MAX_LENGTH} digits."),
        ));
    }
    Ok(())
}

/// Message for a foreign key that points at no existing row
#[must_use]
pub fn dangling_reference_message(id: impl std::fmt::Display) -> String {
    format!("Invalid pk \"{id}\" - object does not exist.")
}

/// A field as it arrived in a request: `None` when the key was absent,
/// otherwise the decoded value or the decoding error
pub type Supplied<T> = Option<Result<T, ValidationError>>;

/// Accumulates rule failures per field
#[derive(Debug)]
pub struct FieldChecks {
    errors: ValidationErrors,
}

impl Default for FieldChecks {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldChecks {
    #[must_use]
    pub fn new() -> Self {
        Self {
            errors: ValidationErrors::new(),
        }
    }

    /// Record the outcome of a rule for `field`
    pub fn check(&mut self, field: &'static str, outcome: Result<(), ValidationError>) {
        if let Err(e) = outcome {
            self.errors.add(field, e);
        }
    }

    /// Record a decoding error for `field`; `Some` carries a decoded value
    pub fn supplied<T>(&mut self, field: &'static str, value: Supplied<T>) -> Option<Option<T>> {
        match value? {
            Ok(value) => Some(Some(value)),
            Err(e) => {
                self.errors.add(field, e);
                Some(None)
            }
        }
    }

    /// Trim and validate a required text field, returning the trimmed value
    pub fn required_text(
        &mut self,
        field: &'static str,
        value: Supplied<String>,
        rules: &[&dyn Fn(&str) -> Result<(), ValidationError>],
    ) -> Option<String> {
        if value.is_none() {
            self.errors.add(field, required());
            return None;
        }
        self.optional_text(field, value, rules)
    }

    /// Trim and validate a text field that may be absent
    pub fn optional_text(
        &mut self,
        field: &'static str,
        value: Supplied<String>,
        rules: &[&dyn Fn(&str) -> Result<(), ValidationError>],
    ) -> Option<String> {
        let trimmed = self.supplied(field, value)??.trim().to_string();
        // first failing rule wins, like a serializer field
        for rule in rules {
            if let Err(e) = rule(&trimmed) {
                self.errors.add(field, e);
                return None;
            }
        }
        Some(trimmed)
    }

    /// Finish, returning the collected errors if any rule failed
    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}
