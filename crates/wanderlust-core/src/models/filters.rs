//! Filter type for listing and counting plans.

use std::str::FromStr;

use super::{Plan, PlanKind};

/// Which plans a view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlanFilter {
    /// Every saved plan
    #[default]
    All,

    /// Only plans of one kind
    Kind(PlanKind),
}

impl PlanFilter {
    /// Whether the plan passes this filter.
    pub fn matches(&self, plan: &Plan) -> bool {
        match self {
            PlanFilter::All => true,
            PlanFilter::Kind(kind) => plan.kind() == *kind,
        }
    }

    /// Convert to the string used by the dashboard's filter tabs.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanFilter::All => "all",
            PlanFilter::Kind(kind) => kind.as_str(),
        }
    }
}

impl From<PlanKind> for PlanFilter {
    fn from(kind: PlanKind) -> Self {
        PlanFilter::Kind(kind)
    }
}

impl FromStr for PlanFilter {
    type Err = String;

    /// Parses `all` or any plan kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wanderlust_core::models::{PlanFilter, PlanKind};
    ///
    /// assert_eq!("all".parse::<PlanFilter>(), Ok(PlanFilter::All));
    /// assert_eq!(
    ///     "longweekend".parse::<PlanFilter>(),
    ///     Ok(PlanFilter::Kind(PlanKind::LongWeekend))
    /// );
    /// assert!("weather".parse::<PlanFilter>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(PlanFilter::All);
        }
        s.parse::<PlanKind>()
            .map(PlanFilter::Kind)
            .map_err(|_| format!("Invalid plan filter: {s}"))
    }
}
