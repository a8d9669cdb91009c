//! Time source and plan id allocation.

use std::fmt::Debug;

use jiff::Timestamp;

/// Source of "now" for save timestamps and ids.
pub trait Clock: Debug + Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// A clock stuck at one instant; every save happens "in the same tick".
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}

/// Issues ids from epoch milliseconds, never repeating or going backwards.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    /// Resume after ids already present in the store.
    pub(crate) fn resume_after(last: u64) -> Self {
        Self { last }
    }

    /// Next id for a plan saved at `now`. Same-millisecond saves (or a clock
    /// that moved backwards) fall through to `last + 1`.
    pub(crate) fn next(&mut self, now: Timestamp) -> u64 {
        let millis = u64::try_from(now.as_millisecond()).unwrap_or(0);
        self.last = millis.max(self.last.saturating_add(1));
        self.last
    }
}
