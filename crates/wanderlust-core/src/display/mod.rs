//! Display formatting for plans, plan lists and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]),
//! while newtype wrappers cover collections and operation feedback. Every
//! formatter produces markdown, which the CLI renders with termimad or prints
//! as plain text.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers &      │    │   Formatted     │
//! │  (Plan, Counts) │───▶│ Result Types    │───▶│    Output       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: the [`Plans`] list wrapper with per-filter empty states
//! - [`results`]: feedback for save, toggle and remove operations
//! - [`status`]: status and confirmation messages ([`OperationStatus`])
//! - [`datetime`]: local-timezone timestamp formatting
//! - [`models`]: Display implementations for domain models
//!
//! # Examples
//!
//! ```rust
//! use wanderlust_core::{
//!     display::{OperationStatus, Plans},
//!     models::{PlanFilter, PlanKind},
//! };
//!
//! let empty = Plans::new(Vec::new(), PlanFilter::Kind(PlanKind::Event));
//! assert!(empty.to_string().contains("No Event Plans Yet"));
//!
//! let cleared = OperationStatus::success("All plans cleared!".to_string());
//! assert!(cleared.to_string().starts_with("Success:"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::Plans;
pub use datetime::LocalDateTime;
pub use results::RemoveResult;
pub use status::OperationStatus;
