//! Plan type enumeration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of the kinds of plan a user can save.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum PlanKind {
    /// A public holiday
    Holiday,

    /// An event happening in the selected city
    Event,

    /// A long weekend built around a holiday
    LongWeekend,
}

impl PlanKind {
    /// Every kind, in display order.
    pub const ALL: [PlanKind; 3] = [PlanKind::Holiday, PlanKind::Event, PlanKind::LongWeekend];

    /// Convert to the persisted string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanKind::Holiday => "holiday",
            PlanKind::Event => "event",
            PlanKind::LongWeekend => "longweekend",
        }
    }

    /// Human-readable name used in headings and messages.
    pub fn label(&self) -> &'static str {
        match self {
            PlanKind::Holiday => "Holiday",
            PlanKind::Event => "Event",
            PlanKind::LongWeekend => "Long Weekend",
        }
    }

    /// Name of the payload field that identifies a plan of this kind.
    pub fn natural_key_field(&self) -> &'static str {
        match self {
            PlanKind::Holiday => "date",
            PlanKind::Event | PlanKind::LongWeekend => "title",
        }
    }
}

impl FromStr for PlanKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "holiday" => Ok(PlanKind::Holiday),
            "event" => Ok(PlanKind::Event),
            "longweekend" | "long_weekend" | "long-weekend" => Ok(PlanKind::LongWeekend),
            _ => Err(format!("Invalid plan type: {s}")),
        }
    }
}
