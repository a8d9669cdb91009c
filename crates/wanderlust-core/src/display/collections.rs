//! Collection wrapper for displaying a filtered list of plans.

use std::fmt;

use crate::models::{Plan, PlanFilter};

/// Newtype wrapper for displaying the plans behind one filter tab.
///
/// Empty lists render the same "nothing saved yet" state the dashboard
/// shows, worded for the active filter.
///
/// # Examples
///
/// ```rust
/// use wanderlust_core::{display::Plans, models::PlanFilter};
///
/// let plans = Plans::new(Vec::new(), PlanFilter::All);
/// let output = plans.to_string();
/// assert!(output.contains("No Saved Plans Yet"));
/// assert!(output.contains("holidays, events, or long weekends"));
/// ```
pub struct Plans {
    pub plans: Vec<Plan>,
    pub filter: PlanFilter,
}

impl Plans {
    pub fn new(plans: Vec<Plan>, filter: PlanFilter) -> Self {
        Self { plans, filter }
    }

    fn write_empty_state(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (heading, suggestion) = match self.filter {
            PlanFilter::All => (
                "Saved".to_string(),
                "holidays, events, or long weekends".to_string(),
            ),
            PlanFilter::Kind(kind) => (
                kind.label().to_string(),
                format!("{}s", kind.label().to_lowercase()),
            ),
        };
        writeln!(f, "No {heading} Plans Yet")?;
        writeln!(f)?;
        writeln!(f, "Start exploring and save {suggestion} you like!")
    }
}

impl fmt::Display for Plans {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.plans.is_empty() {
            return self.write_empty_state(f);
        }

        for (index, plan) in self.plans.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{plan}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::{HolidayData, PlanData, PlanKind, SelectionContext};

    fn holiday_plan(id: u64, date: &str, name: &str) -> Plan {
        Plan::new(
            id,
            PlanData::from(HolidayData {
                name: name.to_string(),
                local_name: name.to_string(),
                date: date.to_string(),
                country: "Egypt".to_string(),
            }),
            &SelectionContext::default(),
            Timestamp::from_second(1735732800).unwrap(),
        )
    }

    #[test]
    fn test_empty_state_per_filter() {
        let weekends = Plans::new(Vec::new(), PlanFilter::Kind(PlanKind::LongWeekend));
        let output = weekends.to_string();
        assert!(output.contains("No Long Weekend Plans Yet"));
        assert!(output.contains("save long weekends you like!"));
    }

    #[test]
    fn test_plans_render_in_order() {
        let plans = Plans::new(
            vec![
                holiday_plan(1, "2025-01-01", "New Year's Day"),
                holiday_plan(2, "2025-01-07", "Coptic Christmas"),
            ],
            PlanFilter::All,
        );

        let output = plans.to_string();
        let first = output.find("# 1. New Year's Day").expect("first plan");
        let second = output.find("# 2. Coptic Christmas").expect("second plan");
        assert!(first < second);
    }
}
