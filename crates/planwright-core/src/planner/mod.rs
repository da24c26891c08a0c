//! High-level planner API.
//!
//! The [`Planner`] wires the pipeline together:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │ Prompt builder  │───▶│ Completion      │───▶│ Response parser │
//! │                 │    │ client          │    │                 │
//! └─────────────────┘    └─────────────────┘    └────────┬────────┘
//!                                                        ▼
//!                        ┌─────────────────┐    ┌─────────────────┐
//!                        │ Display/export  │◀───│   Plan store    │
//!                        └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: configures and creates a [`Planner`]
//! - [`generation`]: the generate pipeline and its fallback plan
//! - [`plan_ops`]: lookups, listing, statistics and export of stored plans
//!
//! Generation never fails because of the model: upstream errors and
//! unparseable replies are logged and turned into a degraded fallback plan.
//! Only invalid input is returned as an error.
//!
//! # Usage
//!
//! ```rust,no_run
//! use planwright_core::{LlmConfig, PlanOutcome, PlannerBuilder, params::GeneratePlan};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_config(LlmConfig::from_env()?)
//!     .build()?;
//!
//! let request = GeneratePlan::new("Launch a podcast").with_timeframe("1 month");
//! match planner.generate_plan(&request).await? {
//!     PlanOutcome::Generated(plan) => println!("{plan}"),
//!     PlanOutcome::Degraded { plan, reason } => {
//!         eprintln!("fallback plan: {reason}");
//!         println!("{plan}");
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use crate::{llm::CompletionClient, parser::ResponseGrammar, store::PlanStore};

pub mod builder;
pub mod generation;
pub mod plan_ops;

#[cfg(test)]
mod tests;

pub use builder::PlannerBuilder;
pub use generation::PlanOutcome;

/// Main planner interface for generating and inspecting plans.
///
/// A planner is `Send + Sync`; share it behind an `Arc` to serve concurrent
/// requests. The only shared mutable state is the plan store.
pub struct Planner {
    /// `None` when no credential is configured; generation then degrades
    /// without a network call
    pub(crate) client: Option<Arc<dyn CompletionClient>>,
    pub(crate) grammars: Vec<Box<dyn ResponseGrammar>>,
    pub(crate) store: PlanStore,
}

impl Planner {
    pub(crate) fn new(
        client: Option<Arc<dyn CompletionClient>>,
        grammars: Vec<Box<dyn ResponseGrammar>>,
    ) -> Self {
        Self {
            client,
            grammars,
            store: PlanStore::new(),
        }
    }

    /// Whether generation will contact the model.
    pub fn has_client(&self) -> bool {
        self.client.is_some()
    }
}
