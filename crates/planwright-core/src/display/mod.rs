//! Display formatting for plans and generation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! this module adds newtype wrappers for collections and status lines, and
//! the [`format_plan_output`] entry point used by both front ends.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Display impls & │    │   Formatted     │
//! │  (Plan, Task)   │───▶│    Wrappers     │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! All formatters produce markdown; the CLI renders it with termimad and the
//! MCP server returns it as text content.
//!
//! - [`collections`]: collection wrappers ([`PlanSummaries`])
//! - [`status`]: one-line notices ([`OperationStatus`])
//! - [`datetime`]: timestamp formatting in the system timezone
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod datetime;
pub mod models;
pub mod status;

pub use collections::PlanSummaries;
pub use datetime::LocalDateTime;
pub use status::OperationStatus;

use crate::models::Plan;

/// Render a plan as markdown.
///
/// The output depends only on the plan (and the system timezone used for
/// the creation time), so formatting the same plan twice yields identical
/// text.
pub fn format_plan_output(plan: &Plan) -> String {
    plan.to_string()
}
