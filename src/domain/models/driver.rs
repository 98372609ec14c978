//! Driver Domain Model
//!
//! A person who can be assigned to drive buses.

/// Newtype wrapper for the auto-assigned driver identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DriverId(i32);

impl DriverId {
    #[must_use]
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for DriverId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for DriverId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl std::str::FromStr for DriverId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// Validated data for writing a driver (create or full replace)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverData {
    pub name: String,
    pub phone_number: String,
}

/// Validated data for a partial driver update (omitted fields keep their value)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriverPatch {
    pub name: Option<String>,
    pub phone_number: Option<String>,
}

/// Driver domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Driver {
    id: DriverId,
    name: String,
    phone_number: String,
}

impl Driver {
    /// Restore a Driver from persisted data
    #[must_use]
    pub fn restore(id: DriverId, name: String, phone_number: String) -> Self {
        Self {
            id,
            name,
            phone_number,
        }
    }

    /// Merge a partial update over the current state, producing full write data
    #[must_use]
    pub fn with_patch(&self, patch: DriverPatch) -> DriverData {
        DriverData {
            name: patch.name.unwrap_or_else(|| self.name.clone()),
            phone_number: patch.phone_number.unwrap_or_else(|| self.phone_number.clone()),
        }
    }

    #[must_use]
    pub fn id(&self) -> DriverId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }
}
