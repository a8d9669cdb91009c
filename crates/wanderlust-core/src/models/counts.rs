//! Per-kind plan counts.

use serde::{Deserialize, Serialize};

use super::{Plan, PlanFilter, PlanKind};

/// Number of saved plans of each kind, plus the total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanCounts {
    pub holiday: usize,
    pub event: usize,
    pub long_weekend: usize,
    pub total: usize,
}

impl PlanCounts {
    /// Tally a sequence of plans.
    pub fn tally<'a, I>(plans: I) -> Self
    where
        I: IntoIterator<Item = &'a Plan>,
    {
        plans.into_iter().fold(Self::default(), |mut counts, plan| {
            match plan.kind() {
                PlanKind::Holiday => counts.holiday += 1,
                PlanKind::Event => counts.event += 1,
                PlanKind::LongWeekend => counts.long_weekend += 1,
            }
            counts.total += 1;
            counts
        })
    }

    /// Count for a single kind.
    pub fn get(&self, kind: PlanKind) -> usize {
        match kind {
            PlanKind::Holiday => self.holiday,
            PlanKind::Event => self.event,
            PlanKind::LongWeekend => self.long_weekend,
        }
    }

    /// Count shown on a filter tab.
    pub fn for_filter(&self, filter: PlanFilter) -> usize {
        match filter {
            PlanFilter::All => self.total,
            PlanFilter::Kind(kind) => self.get(kind),
        }
    }
}
