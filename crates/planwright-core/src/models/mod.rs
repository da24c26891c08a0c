//! Data models for plans and tasks.
//!
//! This module contains the core domain models produced by the generation
//! pipeline. Display implementations for these models live in
//! [`crate::display::models`] so that data structures and presentation stay
//! separate.
//!
//! ## Identity
//!
//! - A [`Plan`] gets its id and creation time from the
//!   [`crate::store::PlanStore`]; before that it is a [`PlanDraft`].
//! - A [`Task`] is identified by its 1-based position in the plan. Dependency
//!   lists hold those positions as strings, which is also how they appear in
//!   the JSON export.
//!
//! ## Durations
//!
//! Duration estimates follow the narrow grammar in [`duration`]; anything the
//! grammar does not accept is stored as `"unspecified"`.
//!
//! # Examples
//!
//! ```rust
//! use planwright_core::models::{Plan, Priority, Task};
//! use jiff::Timestamp;
//!
//! let mut review = Task::new("Review designs");
//! review.priority = Priority::High;
//! review.add_dependency(1);
//!
//! let plan = Plan {
//!     id: "1a2b3c4d".to_string(),
//!     goal: "Ship the landing page".to_string(),
//!     timeframe: "1 week".to_string(),
//!     context: None,
//!     created_at: Timestamp::now(),
//!     tasks: vec![Task::new("Draft designs"), review],
//!     overall_risk_notes: None,
//! };
//! assert_eq!(plan.task(2).unwrap().dependencies, vec!["1".to_string()]);
//! ```

pub mod duration;
pub mod plan;
pub mod priority;
pub mod summary;
pub mod task;

#[cfg(test)]
mod tests;

pub use duration::{DurationEstimate, DurationUnit, UNSPECIFIED};
pub use plan::{Plan, PlanDraft};
pub use priority::Priority;
pub use summary::{PlanSummary, Stats};
pub use task::Task;
