//! Display implementations for domain models.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{
    models::{Plan, PlanCounts, PlanData, PlanFilter, PlanKind},
    store::LoadIssue,
};

impl fmt::Display for PlanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for PlanFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.title())?;
        writeln!(f)?;

        writeln!(f, "- Type: {}", self.kind().label())?;
        match &self.data {
            PlanData::Holiday(holiday) => {
                writeln!(f, "- Local name: {}", holiday.local_name)?;
                writeln!(f, "- Date: {}", holiday.date)?;
                writeln!(f, "- Country: {}", holiday.country)?;
            }
            PlanData::Event(event) => {
                writeln!(f, "- Location: {}", event.location)?;
                writeln!(f, "- Date: {}", event.date)?;
                writeln!(f, "- Category: {}", event.category)?;
            }
            PlanData::LongWeekend(weekend) => {
                writeln!(f, "- Dates: {}", weekend.dates)?;
                writeln!(f, "- Duration: {}", weekend.duration)?;
                if !self.city.is_empty() {
                    writeln!(f, "- City: {}", self.city)?;
                }
            }
        }
        writeln!(f, "- Saved: {}", LocalDateTime(&self.saved_at))?;

        Ok(())
    }
}

impl fmt::Display for PlanCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Saved Plans")?;
        writeln!(f)?;
        writeln!(f, "- All: {}", self.total)?;
        writeln!(f, "- Holidays: {}", self.holiday)?;
        writeln!(f, "- Events: {}", self.event)?;
        writeln!(f, "- Long Weekends: {}", self.long_weekend)
    }
}

impl fmt::Display for LoadIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadIssue::Unreadable { reason } => write!(f, "storage unreadable: {reason}"),
            LoadIssue::MalformedData { reason } => write!(f, "malformed plan data: {reason}"),
            LoadIssue::DroppedDuplicates { count } => {
                write!(f, "dropped {count} duplicate plan record(s)")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use crate::models::{EventData, LongWeekendData, SelectionContext};

    use super::*;

    fn saved_at() -> Timestamp {
        Timestamp::from_second(1735732800).unwrap()
    }

    #[test]
    fn test_event_plan_display() {
        let plan = Plan::new(
            7,
            PlanData::from(EventData {
                title: "Music Night in Cairo".to_string(),
                date: "Sat, Mar 1".to_string(),
                location: "Cairo Opera House".to_string(),
                category: "Music".to_string(),
            }),
            &SelectionContext::default(),
            saved_at(),
        );

        let output = plan.to_string();
        assert!(output.starts_with("# 7. Music Night in Cairo\n"));
        assert!(output.contains("- Type: Event"));
        assert!(output.contains("- Location: Cairo Opera House"));
        assert!(output.contains("- Category: Music"));
        assert!(output.contains("- Saved: "));
    }

    #[test]
    fn test_long_weekend_display_shows_city() {
        let plan = Plan::new(
            8,
            PlanData::from(LongWeekendData {
                title: "New Year Break".to_string(),
                dates: "Jan 1 - Jan 4".to_string(),
                duration: "4 days".to_string(),
            }),
            &SelectionContext::new("EG", "Alexandria"),
            saved_at(),
        );

        let output = plan.to_string();
        assert!(output.contains("- Duration: 4 days"));
        assert!(output.contains("- City: Alexandria"));
    }

    #[test]
    fn test_counts_display() {
        let counts = PlanCounts {
            holiday: 2,
            event: 1,
            long_weekend: 0,
            total: 3,
        };
        let output = counts.to_string();
        assert!(output.contains("- All: 3"));
        assert!(output.contains("- Holidays: 2"));
        assert!(output.contains("- Long Weekends: 0"));
    }
}
