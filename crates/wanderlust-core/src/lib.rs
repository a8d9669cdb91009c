//! Core library for the Wanderlust travel planner.
//!
//! This crate keeps the plans a user saves while browsing holidays, events
//! and long weekends: an ordered, deduplicated collection mirrored into a
//! persisted key-value slot, with filtered views, per-type counts and change
//! notification for whatever renders it.
//!
//! # Architecture
//!
//! - **Models** ([`models`]): plans and their typed payloads
//! - **Storage** ([`storage`]): key-value backends (SQLite, in-memory)
//! - **Store** ([`store`]): the [`PlanStore`] and its async
//!   [`SharedPlanStore`] handle
//! - **Display** ([`display`]): markdown formatting for terminal output
//!
//! # Quick Start
//!
//! ```rust
//! use wanderlust_core::{
//!     models::{EventData, PlanFilter, SelectionContext},
//!     AddResult, PlanStoreBuilder,
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut store = PlanStoreBuilder::new()
//!     .with_database_path(Some("plans.db"))
//!     .build()?;
//!
//! let event = EventData {
//!     title: "Music Night in Cairo".to_string(),
//!     date: "Sat, Mar 1".to_string(),
//!     location: "Cairo Opera House".to_string(),
//!     category: "Music".to_string(),
//! };
//!
//! match store.add(event.into(), &SelectionContext::default()).into_result()? {
//!     AddResult::Added(plan) => println!("{plan}"),
//!     AddResult::Duplicate(signal) => println!("{signal}"),
//! }
//!
//! for plan in store.list(PlanFilter::All) {
//!     println!("{}", plan.title());
//! }
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod error;
pub mod models;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use display::{OperationStatus, Plans, RemoveResult};
pub use error::{PersistenceError, Result, StoreError};
pub use models::{
    EventData, HolidayData, LongWeekendData, NaturalKey, Plan, PlanCounts, PlanData, PlanFilter,
    PlanKind, SelectionContext,
};
pub use storage::{KeyValueStore, MemoryStore, SqliteStore};
pub use store::{
    AddResult, DuplicateSignal, LoadIssue, Outcome, PlanStore, PlanStoreBuilder, SharedPlanStore,
    ToggleResult,
};
