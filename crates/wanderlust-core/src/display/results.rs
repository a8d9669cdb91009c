//! Feedback shown after save, toggle and remove operations.

use std::fmt;

use crate::store::{AddResult, ToggleResult};

impl fmt::Display for AddResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddResult::Added(plan) => {
                writeln!(f, "{} saved to your plans!", plan.kind().label())?;
                writeln!(f)?;
                write!(f, "{plan}")
            }
            AddResult::Duplicate(signal) => writeln!(f, "{signal}"),
        }
    }
}

impl fmt::Display for ToggleResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToggleResult::Saved(plan) => {
                writeln!(f, "{} saved to your plans!", plan.kind().label())?;
                writeln!(f)?;
                write!(f, "{plan}")
            }
            ToggleResult::Removed(plan) => {
                writeln!(f, "{} removed from plans", plan.kind().label())
            }
        }
    }
}

/// Wrapper type for displaying the result of removing a plan by id.
pub struct RemoveResult {
    pub id: u64,
    pub removed: bool,
}

impl RemoveResult {
    pub fn new(id: u64, removed: bool) -> Self {
        Self { id, removed }
    }
}

impl fmt::Display for RemoveResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.removed {
            writeln!(f, "Plan {} deleted successfully", self.id)
        } else {
            writeln!(f, "No saved plan with ID {}", self.id)
        }
    }
}
