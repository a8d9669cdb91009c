//! Results returned by plan store mutations.

use std::fmt;

use crate::{
    error::{PersistenceError, Result, StoreError},
    models::{NaturalKey, Plan},
};

/// Value of a mutation, plus a warning if the change could not be persisted.
///
/// The in-memory change has happened either way; a warning only means it may
/// not survive a reload.
#[must_use]
#[derive(Debug)]
pub struct Outcome<T> {
    pub value: T,
    pub warning: Option<PersistenceError>,
}

impl<T> Outcome<T> {
    pub(crate) fn durable(value: T) -> Self {
        Self {
            value,
            warning: None,
        }
    }

    pub(crate) fn new(value: T, warning: Option<PersistenceError>) -> Self {
        Self { value, warning }
    }

    /// Whether persisted storage matches memory after this mutation.
    pub fn is_durable(&self) -> bool {
        self.warning.is_none()
    }

    /// Treat a persistence warning as a hard error.
    pub fn into_result(self) -> Result<T> {
        match self.warning {
            None => Ok(self.value),
            Some(warning) => Err(StoreError::Persistence(warning)),
        }
    }

    /// Split into the value and the optional warning.
    pub fn into_parts(self) -> (T, Option<PersistenceError>) {
        (self.value, self.warning)
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        Outcome {
            value: f(self.value),
            warning: self.warning,
        }
    }
}

/// An equivalent plan is already saved, so nothing was added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateSignal {
    /// Natural key that collided
    pub key: NaturalKey,
    /// Id of the plan already holding that key
    pub existing_id: u64,
}

impl fmt::Display for DuplicateSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} '{}' is already saved (plan {})",
            self.key.kind.label(),
            self.key.key,
            self.existing_id
        )
    }
}

/// Result of [`PlanStore::add`](super::PlanStore::add).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddResult {
    /// The plan was appended to the store
    Added(Plan),

    /// A plan with the same natural key already exists
    Duplicate(DuplicateSignal),
}

impl AddResult {
    /// The newly added plan, if any.
    pub fn added(&self) -> Option<&Plan> {
        match self {
            AddResult::Added(plan) => Some(plan),
            AddResult::Duplicate(_) => None,
        }
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, AddResult::Duplicate(_))
    }
}

/// Result of [`PlanStore::toggle`](super::PlanStore::toggle).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleResult {
    /// The plan was not saved before and now is
    Saved(Plan),

    /// The plan was saved before and has been removed
    Removed(Plan),
}

impl ToggleResult {
    /// Whether the item is saved after the toggle.
    pub fn is_saved(&self) -> bool {
        matches!(self, ToggleResult::Saved(_))
    }

    pub fn plan(&self) -> &Plan {
        match self {
            ToggleResult::Saved(plan) | ToggleResult::Removed(plan) => plan,
        }
    }
}
