#![allow(dead_code)]

use std::path::{Path, PathBuf};

use tempfile::TempDir;
use wanderlust_core::{
    EventData, HolidayData, LongWeekendData, PlanData, PlanStore, PlanStoreBuilder,
};

/// Helper function to create a scratch directory and a database path in it
pub fn create_test_db_path() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("plans.db");
    (temp_dir, db_path)
}

/// Opens (or reopens, simulating a page reload) the store at `db_path`
pub fn open_store(db_path: &Path) -> PlanStore {
    PlanStoreBuilder::new()
        .with_database_path(Some(db_path))
        .build()
        .expect("Failed to build plan store")
}

pub fn holiday(date: &str, name: &str) -> PlanData {
    HolidayData {
        name: name.to_string(),
        local_name: name.to_string(),
        date: date.to_string(),
        country: "Egypt".to_string(),
    }
    .into()
}

pub fn event(title: &str) -> PlanData {
    EventData {
        title: title.to_string(),
        date: "Sat, Mar 1".to_string(),
        location: "Cairo Opera House".to_string(),
        category: "Music".to_string(),
    }
    .into()
}

pub fn long_weekend(title: &str) -> PlanData {
    LongWeekendData {
        title: title.to_string(),
        dates: "Jan 1 - Jan 4".to_string(),
        duration: "4 days".to_string(),
    }
    .into()
}
