//! Mutating operations on the plan store.

use log::debug;

use super::{AddResult, DuplicateSignal, Outcome, PlanStore, ToggleResult};
use crate::models::{NaturalKey, Plan, PlanData, PlanKind, SelectionContext};

impl PlanStore {
    /// Saves a plan unless one with the same natural key already exists.
    ///
    /// A duplicate leaves the store untouched and is reported as
    /// [`AddResult::Duplicate`]. Otherwise the plan gets a fresh id, is
    /// appended, persisted and announced to subscribers.
    pub fn add(&mut self, data: PlanData, context: &SelectionContext) -> Outcome<AddResult> {
        let key = NaturalKey::of(&data);
        debug_assert!(
            !key.key.is_empty(),
            "{} plans need a non-empty '{}'",
            key.kind.as_str(),
            key.kind.natural_key_field()
        );

        if let Some(index) = self.find_by_key(&key) {
            let existing_id = self.plans[index].id;
            debug!("Skipping duplicate {} '{}'", key.kind.as_str(), key.key);
            return Outcome::durable(AddResult::Duplicate(DuplicateSignal { key, existing_id }));
        }

        let plan = self.append(data, context);
        let warning = self.persist();
        self.observers.notify();
        Outcome::new(AddResult::Added(plan), warning)
    }

    /// Saves the plan if it is not saved yet, removes it if it is.
    ///
    /// This is the heart-button gesture on holiday, event and long-weekend
    /// cards.
    pub fn toggle(&mut self, data: PlanData, context: &SelectionContext) -> Outcome<ToggleResult> {
        let key = NaturalKey::of(&data);

        let value = match self.find_by_key(&key) {
            Some(index) => ToggleResult::Removed(self.plans.remove(index)),
            None => ToggleResult::Saved(self.append(data, context)),
        };
        debug!(
            "Toggled {} '{}': saved = {}",
            key.kind.as_str(),
            key.key,
            value.is_saved()
        );

        let warning = self.persist();
        self.observers.notify();
        Outcome::new(value, warning)
    }

    /// Removes the plan with `id`. Returns `false` without touching storage
    /// when there is no such plan.
    pub fn remove(&mut self, id: u64) -> Outcome<bool> {
        let Some(index) = self.plans.iter().position(|plan| plan.id == id) else {
            return Outcome::durable(false);
        };

        let removed = self.plans.remove(index);
        debug!("Removed plan {} ({})", removed.id, removed.kind().as_str());

        let warning = self.persist();
        self.observers.notify();
        Outcome::new(true, warning)
    }

    /// Removes the plan of `kind` identified by `key`, returning it.
    pub fn remove_by_key(&mut self, kind: PlanKind, key: &str) -> Outcome<Option<Plan>> {
        let Some(index) = self.find_by_key(&NaturalKey::new(kind, key)) else {
            return Outcome::durable(None);
        };

        let removed = self.plans.remove(index);
        debug!("Removed plan {} by key '{key}'", removed.id);

        let warning = self.persist();
        self.observers.notify();
        Outcome::new(Some(removed), warning)
    }

    /// Removes every plan. Storage is rewritten even when the store is
    /// already empty; subscribers hear about it only if something was removed.
    pub fn clear_all(&mut self) -> Outcome<()> {
        let removed = self.plans.len();
        self.plans.clear();
        debug!("Cleared {removed} plan(s)");

        let warning = self.persist();
        if removed > 0 {
            self.observers.notify();
        }
        Outcome::new((), warning)
    }

    fn append(&mut self, data: PlanData, context: &SelectionContext) -> Plan {
        let now = self.clock.now();
        let id = self.ids.next(now);
        let plan = Plan::new(id, data, context, now);
        debug!("Saving {} plan {id}", plan.kind().as_str());
        self.plans.push(plan.clone());
        plan
    }
}
