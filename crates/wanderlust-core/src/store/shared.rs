//! Thread-safe async handle over a single plan store.

use std::sync::{Arc, Mutex, PoisonError};

use tokio::task;

use super::{AddResult, LoadIssue, Outcome, PlanStore, SubscriptionId, ToggleResult};
use crate::{
    error::{Result, StoreError},
    models::{Plan, PlanCounts, PlanData, PlanFilter, PlanKind, SelectionContext},
};

/// Cloneable handle sharing one [`PlanStore`] between tasks and threads.
///
/// One mutex guards both the in-memory plans and the persisted write, so the
/// duplicate check and the append in [`add`](Self::add) cannot interleave
/// with another caller. Operations run on tokio's blocking pool.
///
/// Subscriber panics are caught inside the store, and a poisoned lock is
/// recovered: every mutation has finished its write before subscribers run.
#[derive(Clone)]
pub struct SharedPlanStore {
    inner: Arc<Mutex<PlanStore>>,
}

impl SharedPlanStore {
    pub fn new(store: PlanStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    async fn with_store<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut PlanStore) -> T + Send + 'static,
        T: Send + 'static,
    {
        let inner = Arc::clone(&self.inner);

        task::spawn_blocking(move || {
            let mut store = inner.lock().unwrap_or_else(PoisonError::into_inner);
            f(&mut store)
        })
        .await
        .map_err(|e| StoreError::Configuration {
            message: format!("Task join error: {e}"),
        })
    }

    /// See [`PlanStore::add`].
    pub async fn add(&self, data: PlanData, context: SelectionContext) -> Result<Outcome<AddResult>> {
        self.with_store(move |store| store.add(data, &context)).await
    }

    /// See [`PlanStore::toggle`].
    pub async fn toggle(
        &self,
        data: PlanData,
        context: SelectionContext,
    ) -> Result<Outcome<ToggleResult>> {
        self.with_store(move |store| store.toggle(data, &context)).await
    }

    /// See [`PlanStore::remove`].
    pub async fn remove(&self, id: u64) -> Result<Outcome<bool>> {
        self.with_store(move |store| store.remove(id)).await
    }

    /// See [`PlanStore::remove_by_key`].
    pub async fn remove_by_key(&self, kind: PlanKind, key: String) -> Result<Outcome<Option<Plan>>> {
        self.with_store(move |store| store.remove_by_key(kind, &key)).await
    }

    /// See [`PlanStore::clear_all`].
    pub async fn clear_all(&self) -> Result<Outcome<()>> {
        self.with_store(PlanStore::clear_all).await
    }

    /// Owned copy of the plans passing `filter`, in store order.
    pub async fn list(&self, filter: PlanFilter) -> Result<Vec<Plan>> {
        self.with_store(move |store| store.list(filter).cloned().collect())
            .await
    }

    /// See [`PlanStore::counts`].
    pub async fn counts(&self) -> Result<PlanCounts> {
        self.with_store(|store| store.counts()).await
    }

    /// See [`PlanStore::contains`].
    pub async fn contains(&self, kind: PlanKind, key: String) -> Result<bool> {
        self.with_store(move |store| store.contains(kind, &key)).await
    }

    /// See [`PlanStore::get`].
    pub async fn get(&self, id: u64) -> Result<Option<Plan>> {
        self.with_store(move |store| store.get(id).cloned()).await
    }

    /// See [`PlanStore::load_issue`].
    pub async fn load_issue(&self) -> Result<Option<LoadIssue>> {
        self.with_store(|store| store.load_issue().cloned()).await
    }

    /// See [`PlanStore::subscribe`]. Callbacks run while the store is locked
    /// and must not call back into this handle synchronously.
    pub async fn subscribe<F>(&self, callback: F) -> Result<SubscriptionId>
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.with_store(move |store| store.subscribe(callback)).await
    }

    /// See [`PlanStore::unsubscribe`].
    pub async fn unsubscribe(&self, id: SubscriptionId) -> Result<bool> {
        self.with_store(move |store| store.unsubscribe(id)).await
    }
}
