//! Parameter structures for Planwright operations
//!
//! These structures are shared by every interface (CLI, MCP) and carry no
//! framework-specific attributes beyond optional JSON schema generation.
//! Interface layers wrap them:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! The CLI converts its clap structs with `From` impls; the MCP server wraps
//! the core types in a transparent serde newtype.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

/// Timeframe used when the caller leaves it blank.
pub const DEFAULT_TIMEFRAME: &str = "2 weeks";

/// Parameters for operations requiring just a plan ID.
///
/// Used by show_plan and export_plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the plan to operate on
    pub id: String,
}

impl Id {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Parameters for generating a new plan from a goal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct GeneratePlan {
    /// The goal to break down into tasks (required, non-empty)
    pub goal: String,
    /// Free-form timeframe such as "2 weeks" (defaults to "2 weeks")
    #[serde(default)]
    pub timeframe: String,
    /// Optional additional context for the model
    #[serde(default, alias = "additional_context")]
    pub context: Option<String>,
}

impl GeneratePlan {
    /// Create generation parameters with the default timeframe and no context.
    pub fn new(goal: impl Into<String>) -> Self {
        Self {
            goal: goal.into(),
            timeframe: DEFAULT_TIMEFRAME.to_string(),
            context: None,
        }
    }

    /// Set the timeframe.
    pub fn with_timeframe(mut self, timeframe: impl Into<String>) -> Self {
        self.timeframe = timeframe.into();
        self
    }

    /// Set the additional context.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Validate and normalize the parameters.
    ///
    /// The goal must contain non-whitespace text. A blank timeframe becomes
    /// [`DEFAULT_TIMEFRAME`] and blank context becomes `None`; the goal
    /// itself is kept verbatim.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` for an empty goal.
    pub fn validated(&self) -> Result<Self> {
        if self.goal.trim().is_empty() {
            return Err(PlannerError::invalid_input("goal").with_reason("must not be empty"));
        }

        let timeframe = if self.timeframe.trim().is_empty() {
            DEFAULT_TIMEFRAME.to_string()
        } else {
            self.timeframe.clone()
        };

        let context = self
            .context
            .as_ref()
            .filter(|context| !context.trim().is_empty())
            .cloned();

        Ok(Self {
            goal: self.goal.clone(),
            timeframe,
            context,
        })
    }
}
