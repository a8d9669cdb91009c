//! Change notification for views rendering the store.

use std::{
    any::Any,
    fmt,
    panic::{self, AssertUnwindSafe},
};

use log::warn;

type Callback = Box<dyn Fn() + Send + Sync>;

/// Handle returned by [`PlanStore::subscribe`](super::PlanStore::subscribe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Registered callbacks, fired in subscription order.
#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    callbacks: Vec<(SubscriptionId, Callback)>,
}

impl Observers {
    pub(crate) fn subscribe(&mut self, callback: Callback) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, callback));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(existing, _)| *existing != id);
        self.callbacks.len() != before
    }

    /// Fire every callback. A panicking callback is logged and skipped; the
    /// change it was told about has already been applied and persisted.
    pub(crate) fn notify(&self) {
        for (id, callback) in &self.callbacks {
            if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(callback)) {
                warn!(
                    "Plan subscriber {} panicked: {}",
                    id.0,
                    panic_message(payload.as_ref())
                );
            }
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.callbacks.len()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "non-string panic payload"
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("subscribers", &self.callbacks.len())
            .finish()
    }
}
