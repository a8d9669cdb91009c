//! Data models for saved plans.
//!
//! A [`Plan`] is a bookmark of a holiday, event or long weekend. Its payload
//! is a [`PlanData`] tagged union, so each kind carries its own typed fields
//! while still sharing one persisted record shape:
//!
//! ```text
//! {"id": 1735689600000, "type": "holiday",
//!  "data": {"name": "...", "localName": "...", "date": "2025-01-01", "country": "Egypt"},
//!  "savedAt": "2025-01-01T00:00:00Z", "country": "EG", "city": "Cairo"}
//! ```
//!
//! Display implementations for these models live in [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use wanderlust_core::models::{HolidayData, NaturalKey, PlanData, PlanKind};
//!
//! let data = PlanData::from(HolidayData {
//!     name: "New Year's Day".to_string(),
//!     local_name: "New Year's Day".to_string(),
//!     date: "2025-01-01".to_string(),
//!     country: "Egypt".to_string(),
//! });
//!
//! assert_eq!(data.kind(), PlanKind::Holiday);
//! assert_eq!(NaturalKey::of(&data), NaturalKey::new(PlanKind::Holiday, "2025-01-01"));
//! ```

pub mod context;
pub mod counts;
pub mod data;
pub mod filters;
pub mod kind;
pub mod plan;


pub use context::{NaturalKey, SelectionContext, DEFAULT_CITY, DEFAULT_COUNTRY};
pub use counts::PlanCounts;
pub use data::{EventData, HolidayData, LongWeekendData, PlanData, DEFAULT_EVENT_CATEGORY};
pub use filters::PlanFilter;
pub use kind::PlanKind;
pub use plan::Plan;
