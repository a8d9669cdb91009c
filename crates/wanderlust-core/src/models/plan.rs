//! Plan model definition and its persisted representation.

use jiff::Timestamp;
use serde::{
    de::DeserializeOwned,
    ser::{Error as _, SerializeStruct},
    Deserialize, Serialize, Serializer,
};
use serde_json::{Map, Value};

use super::{NaturalKey, PlanData, PlanKind, SelectionContext};

/// A saved holiday, event or long weekend.
///
/// Keys in a stored record's `data` that the typed payload does not know
/// about are kept and written back unchanged.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(try_from = "PlanRecord")]
pub struct Plan {
    /// Unique identifier, strictly increasing in creation order
    pub id: u64,

    /// Typed payload; its variant is the plan's type
    pub data: PlanData,

    /// Timestamp when the plan was saved (UTC)
    pub saved_at: Timestamp,

    /// Country code selected when the plan was saved
    pub country: String,

    /// City selected when the plan was saved
    pub city: String,

    /// `data` keys outside the typed payload
    extra_data: Map<String, Value>,
}

impl Plan {
    pub(crate) fn new(id: u64, data: PlanData, context: &SelectionContext, saved_at: Timestamp) -> Self {
        Self {
            id,
            data,
            saved_at,
            country: context.country.clone(),
            city: context.city.clone(),
            extra_data: Map::new(),
        }
    }

    /// The kind of this plan.
    pub fn kind(&self) -> PlanKind {
        self.data.kind()
    }

    /// Identity of the plan among plans of the same kind.
    pub fn natural_key(&self) -> NaturalKey {
        NaturalKey::of(&self.data)
    }

    /// Headline used in lists.
    pub fn title(&self) -> &str {
        self.data.title()
    }

    /// The selection context captured when the plan was saved.
    pub fn context(&self) -> SelectionContext {
        SelectionContext::new(self.country.clone(), self.city.clone())
    }
}

impl Serialize for Plan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Plan", 6)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("type", &self.kind())?;
        let mut data = match &self.data {
            PlanData::Holiday(data) => serde_json::to_value(data),
            PlanData::Event(data) => serde_json::to_value(data),
            PlanData::LongWeekend(data) => serde_json::to_value(data),
        }
        .map_err(S::Error::custom)?;
        if let Value::Object(fields) = &mut data {
            for (key, value) in &self.extra_data {
                fields.entry(key.clone()).or_insert_with(|| value.clone());
            }
        }
        state.serialize_field("data", &data)?;
        state.serialize_field("savedAt", &self.saved_at)?;
        state.serialize_field("country", &self.country)?;
        state.serialize_field("city", &self.city)?;
        state.end()
    }
}

/// Record shape as written to storage: `data` is decoded once `type` is known.
#[derive(Deserialize)]
struct PlanRecord {
    id: u64,
    #[serde(rename = "type")]
    kind: PlanKind,
    data: Value,
    #[serde(rename = "savedAt")]
    saved_at: Timestamp,
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    city: Option<String>,
}

impl TryFrom<PlanRecord> for Plan {
    type Error = serde_json::Error;

    fn try_from(record: PlanRecord) -> Result<Self, Self::Error> {
        let (data, extra_data) = match record.kind {
            PlanKind::Holiday => decode_payload(record.data, PlanData::Holiday)?,
            PlanKind::Event => decode_payload(record.data, PlanData::Event)?,
            PlanKind::LongWeekend => decode_payload(record.data, PlanData::LongWeekend)?,
        };

        Ok(Plan {
            id: record.id,
            data,
            saved_at: record.saved_at,
            country: record.country.unwrap_or_default(),
            city: record.city.unwrap_or_default(),
            extra_data,
        })
    }
}

/// Decodes the typed payload and returns the keys it does not cover.
fn decode_payload<T, F>(raw: Value, wrap: F) -> Result<(PlanData, Map<String, Value>), serde_json::Error>
where
    T: DeserializeOwned + Serialize,
    F: FnOnce(T) -> PlanData,
{
    let typed: T = serde_json::from_value(raw.clone())?;
    let mut extra = match raw {
        Value::Object(fields) => fields,
        _ => Map::new(),
    };
    if let Value::Object(known) = serde_json::to_value(&typed)? {
        extra.retain(|key, _| !known.contains_key(key));
    }
    Ok((wrap(typed), extra))
}
