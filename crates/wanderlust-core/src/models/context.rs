//! Selection context and natural keys.

use serde::{Deserialize, Serialize};

use super::{PlanData, PlanKind};

/// Country code selected when the dashboard first opens.
pub const DEFAULT_COUNTRY: &str = "EG";

/// City selected when the dashboard first opens.
pub const DEFAULT_CITY: &str = "Cairo";

/// Snapshot of the user's country/city selection at save time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectionContext {
    pub country: String,
    pub city: String,
}

impl SelectionContext {
    pub fn new(country: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            city: city.into(),
        }
    }
}

impl Default for SelectionContext {
    fn default() -> Self {
        Self::new(DEFAULT_COUNTRY, DEFAULT_CITY)
    }
}

/// Identity of a plan independent of its id: its kind plus the kind's key
/// field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NaturalKey {
    pub kind: PlanKind,
    pub key: String,
}

impl NaturalKey {
    pub fn new(kind: PlanKind, key: impl Into<String>) -> Self {
        Self {
            kind,
            key: key.into(),
        }
    }

    /// Natural key of a payload.
    pub fn of(data: &PlanData) -> Self {
        Self::new(data.kind(), data.natural_key())
    }
}
