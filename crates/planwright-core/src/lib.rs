//! Core library for the Planwright goal planner.
//!
//! Planwright sends a goal to a hosted language model, asks for a structured
//! task breakdown, parses the reply into a [`Plan`], keeps it in an in-memory
//! store, and renders it as markdown or exports it as JSON.
//!
//! # Pipeline
//!
//! - **Prompt** ([`prompt`]): goal, timeframe and context become a
//!   system/user message pair requesting a delimiter-based layout
//! - **Completion** ([`llm`]): the [`CompletionClient`] trait and its
//!   OpenAI-compatible HTTP implementation
//! - **Parsing** ([`parser`]): tolerant grammars turn the reply into a
//!   [`PlanDraft`]
//! - **Storage** ([`store`]): ids are assigned and plans kept for the process
//!   lifetime
//! - **Display** ([`display`]): markdown formatting; JSON export lives on
//!   [`Plan::to_json`]
//!
//! The [`Planner`] drives all of it. Model failures never surface as errors:
//! the planner substitutes a single-task fallback plan and reports the
//! outcome as [`PlanOutcome::Degraded`].
//!
//! # Quick Start
//!
//! ```rust
//! use planwright_core::{PlanOutcome, PlannerBuilder, params::GeneratePlan};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Without a credential the planner still answers, with a fallback plan.
//! let planner = PlannerBuilder::new().build()?;
//!
//! let request = GeneratePlan::new("Organize a team offsite").with_timeframe("3 weeks");
//! let outcome = planner.generate_plan(&request).await?;
//! assert!(matches!(outcome, PlanOutcome::Degraded { .. }));
//!
//! let plan = outcome.into_plan();
//! println!("{plan}");
//! println!("{}", plan.to_json()?);
//! println!("{}", planner.stats());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod llm;
pub mod models;
pub mod params;
pub mod parser;
pub mod planner;
pub mod prompt;
pub mod store;

// Re-export commonly used types
pub use config::LlmConfig;
pub use display::{LocalDateTime, OperationStatus, PlanSummaries, format_plan_output};
pub use error::{PlannerError, Result};
pub use llm::{CompletionClient, LlmError, OpenAiClient};
pub use models::{Plan, PlanDraft, PlanSummary, Priority, Stats, Task};
pub use params::{GeneratePlan, Id};
pub use planner::{PlanOutcome, Planner, PlannerBuilder};
pub use prompt::Prompt;
pub use store::PlanStore;
