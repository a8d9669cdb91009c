//! Typed payloads carried by each kind of plan.

use serde::{Deserialize, Serialize};

use super::PlanKind;

/// Category assigned to events when the source card has none.
pub const DEFAULT_EVENT_CATEGORY: &str = "General";

/// A saved public holiday.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HolidayData {
    /// English name of the holiday
    pub name: String,
    /// Name in the country's own language
    pub local_name: String,
    /// Calendar date (`YYYY-MM-DD`); identifies the holiday
    pub date: String,
    /// Display name of the country the holiday belongs to
    pub country: String,
}

/// A saved event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventData {
    /// Event title; identifies the event
    pub title: String,
    pub date: String,
    pub location: String,
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    DEFAULT_EVENT_CATEGORY.to_string()
}

/// A saved long weekend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LongWeekendData {
    /// Title of the long weekend; identifies it
    pub title: String,
    /// Human-readable date range
    pub dates: String,
    /// Human-readable length, e.g. `4 days`
    pub duration: String,
}

/// Payload of a plan, tagged by its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanData {
    Holiday(HolidayData),
    Event(EventData),
    LongWeekend(LongWeekendData),
}

impl PlanData {
    /// The kind of plan this payload belongs to.
    pub fn kind(&self) -> PlanKind {
        match self {
            PlanData::Holiday(_) => PlanKind::Holiday,
            PlanData::Event(_) => PlanKind::Event,
            PlanData::LongWeekend(_) => PlanKind::LongWeekend,
        }
    }

    /// Value of the identity field: the date for holidays, the title otherwise.
    pub fn natural_key(&self) -> &str {
        match self {
            PlanData::Holiday(holiday) => &holiday.date,
            PlanData::Event(event) => &event.title,
            PlanData::LongWeekend(weekend) => &weekend.title,
        }
    }

    /// Headline shown for the plan in lists.
    pub fn title(&self) -> &str {
        match self {
            PlanData::Holiday(holiday) => &holiday.name,
            PlanData::Event(event) => &event.title,
            PlanData::LongWeekend(weekend) => &weekend.title,
        }
    }
}

impl From<HolidayData> for PlanData {
    fn from(data: HolidayData) -> Self {
        PlanData::Holiday(data)
    }
}

impl From<EventData> for PlanData {
    fn from(data: EventData) -> Self {
        PlanData::Event(data)
    }
}

impl From<LongWeekendData> for PlanData {
    fn from(data: LongWeekendData) -> Self {
        PlanData::LongWeekend(data)
    }
}
