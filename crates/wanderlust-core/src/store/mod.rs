//! The plan store: saved plans mirrored into persisted storage.
//!
//! [`PlanStore`] owns the ordered sequence of saved plans and a
//! [`KeyValueStore`] slot holding its serialized form. Every mutation writes
//! the whole collection back before returning, so a reload never loses or
//! duplicates a plan that was just saved.
//!
//! ```text
//! ┌──────────────┐  add/toggle/remove  ┌──────────────┐  set(slot, json)  ┌──────────────┐
//! │  Collaborator│────────────────────▶│  PlanStore   │──────────────────▶│ KeyValueStore│
//! │  (renderer)  │◀────────────────────│  (in memory) │                   │ (SQLite/mem) │
//! └──────────────┘  notify + re-query  └──────────────┘                   └──────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: configuration and construction
//! - [`ops`]: mutating operations
//! - [`outcome`]: mutation results and duplicate signals
//! - [`shared`]: thread-safe async handle
//! - [`clock`]: time source and id allocation
//!
//! # Examples
//!
//! ```rust
//! use wanderlust_core::{
//!     models::{HolidayData, PlanFilter, PlanKind, SelectionContext},
//!     storage::MemoryStore,
//!     AddResult, PlanStore,
//! };
//!
//! let mut store = PlanStore::load(Box::new(MemoryStore::new()), "wanderlust_plans");
//! let holiday = HolidayData {
//!     name: "New Year's Day".to_string(),
//!     local_name: "New Year's Day".to_string(),
//!     date: "2025-01-01".to_string(),
//!     country: "Egypt".to_string(),
//! };
//!
//! let first = store.add(holiday.clone().into(), &SelectionContext::default());
//! assert!(matches!(first.value, AddResult::Added(_)));
//!
//! let second = store.add(holiday.into(), &SelectionContext::default());
//! assert!(second.value.is_duplicate());
//!
//! assert_eq!(store.counts().holiday, 1);
//! assert_eq!(store.list(PlanFilter::Kind(PlanKind::Event)).count(), 0);
//! ```

use std::{collections::HashSet, fmt, sync::Arc};

use log::{debug, warn};

use crate::{
    error::{PersistenceError, StoreError},
    models::{NaturalKey, Plan, PlanCounts, PlanFilter, PlanKind},
    storage::KeyValueStore,
};

pub mod builder;
pub mod clock;
pub mod ops;
pub mod outcome;
pub mod shared;

mod observers;


pub use builder::PlanStoreBuilder;
pub use clock::{Clock, FixedClock, SystemClock};
pub use observers::SubscriptionId;
pub use outcome::{AddResult, DuplicateSignal, Outcome, ToggleResult};
pub use shared::SharedPlanStore;

use clock::IdGenerator;
use observers::Observers;

/// Why the last load started from less than what storage held.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadIssue {
    /// The backend could not be read; the store started empty
    Unreadable { reason: String },

    /// The slot did not hold a valid plan collection; the store started empty
    MalformedData { reason: String },

    /// Records repeating an id or natural key were dropped
    DroppedDuplicates { count: usize },
}

/// Saved plans, in insertion order, backed by one storage slot.
pub struct PlanStore {
    plans: Vec<Plan>,
    backend: Box<dyn KeyValueStore>,
    slot: String,
    clock: Arc<dyn Clock>,
    ids: IdGenerator,
    observers: Observers,
    load_issue: Option<LoadIssue>,
}

impl PlanStore {
    /// Loads the plans persisted under `slot`, using the system clock.
    ///
    /// Never fails: missing data yields an empty store, and unreadable or
    /// malformed data is logged, recorded in [`load_issue`](Self::load_issue)
    /// and discarded.
    pub fn load(backend: Box<dyn KeyValueStore>, slot: impl Into<String>) -> Self {
        Self::load_with_clock(backend, slot, Arc::new(SystemClock))
    }

    pub(crate) fn load_with_clock(
        backend: Box<dyn KeyValueStore>,
        slot: impl Into<String>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let slot = slot.into();
        let (plans, load_issue) = Self::read_slot(backend.as_ref(), &slot);
        let last_id = plans.iter().map(|plan| plan.id).max().unwrap_or(0);

        debug!("Loaded {} plan(s) from slot '{slot}'", plans.len());

        Self {
            plans,
            backend,
            slot,
            clock,
            ids: IdGenerator::resume_after(last_id),
            observers: Observers::default(),
            load_issue,
        }
    }

    fn read_slot(backend: &dyn KeyValueStore, slot: &str) -> (Vec<Plan>, Option<LoadIssue>) {
        let raw = match backend.get(slot) {
            Ok(Some(raw)) => raw,
            Ok(None) => return (Vec::new(), None),
            Err(e) => {
                warn!("Could not read plans from slot '{slot}', starting empty: {e}");
                let issue = LoadIssue::Unreadable {
                    reason: e.to_string(),
                };
                return (Vec::new(), Some(issue));
            }
        };

        // A stored `null` is what the dashboard wrote before anything was saved.
        let plans = match serde_json::from_str::<Option<Vec<Plan>>>(&raw) {
            Ok(plans) => plans.unwrap_or_default(),
            Err(e) => {
                warn!("Discarding malformed plans in slot '{slot}': {e}");
                let issue = LoadIssue::MalformedData {
                    reason: e.to_string(),
                };
                return (Vec::new(), Some(issue));
            }
        };

        let (plans, dropped) = Self::drop_duplicates(plans);
        if dropped > 0 {
            warn!("Dropped {dropped} duplicate plan record(s) from slot '{slot}'");
            return (plans, Some(LoadIssue::DroppedDuplicates { count: dropped }));
        }
        (plans, None)
    }

    /// Keeps the first record for each id and each natural key.
    fn drop_duplicates(plans: Vec<Plan>) -> (Vec<Plan>, usize) {
        let total = plans.len();
        let mut ids = HashSet::new();
        let mut keys = HashSet::new();
        let kept: Vec<Plan> = plans
            .into_iter()
            .filter(|plan| {
                let key = plan.natural_key();
                if ids.contains(&plan.id) || keys.contains(&key) {
                    return false;
                }
                ids.insert(plan.id);
                keys.insert(key);
                true
            })
            .collect();
        let dropped = total - kept.len();
        (kept, dropped)
    }

    /// Issue found by the load that created this store, if any.
    pub fn load_issue(&self) -> Option<&LoadIssue> {
        self.load_issue.as_ref()
    }

    /// Name of the storage slot this store writes to.
    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// Plans passing `filter`, in store order.
    ///
    /// The iterator borrows the store and can be cloned to walk the same view
    /// again.
    pub fn list(&self, filter: PlanFilter) -> impl Iterator<Item = &Plan> + Clone + '_ {
        self.plans.iter().filter(move |plan| filter.matches(plan))
    }

    /// Every plan, in store order.
    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    /// Per-kind counts, computed from the current plans.
    pub fn counts(&self) -> PlanCounts {
        PlanCounts::tally(&self.plans)
    }

    /// Whether a plan of `kind` with natural key `key` is saved.
    pub fn contains(&self, kind: PlanKind, key: &str) -> bool {
        self.find_by_key(&NaturalKey::new(kind, key)).is_some()
    }

    /// The plan with this id.
    pub fn get(&self, id: u64) -> Option<&Plan> {
        self.plans.iter().find(|plan| plan.id == id)
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    /// Register a callback fired after every change to the saved plans.
    ///
    /// Callbacks carry no payload; re-query with [`list`](Self::list) or
    /// [`counts`](Self::counts).
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.observers.subscribe(Box::new(callback))
    }

    /// Remove a callback. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    fn find_by_key(&self, key: &NaturalKey) -> Option<usize> {
        self.plans
            .iter()
            .position(|plan| plan.kind() == key.kind && plan.data.natural_key() == key.key)
    }

    /// Write the whole collection to the slot.
    fn persist(&mut self) -> Option<PersistenceError> {
        let written = serde_json::to_string(&self.plans)
            .map_err(StoreError::from)
            .and_then(|json| self.backend.set(&self.slot, &json));

        match written {
            Ok(()) => None,
            Err(e) => {
                warn!("Plans changed in memory but were not persisted: {e}");
                Some(PersistenceError::new(self.slot.clone(), e))
            }
        }
    }
}

impl fmt::Debug for PlanStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlanStore")
            .field("slot", &self.slot)
            .field("plans", &self.plans.len())
            .field("observers", &self.observers.len())
            .field("clock", &self.clock)
            .finish()
    }
}
