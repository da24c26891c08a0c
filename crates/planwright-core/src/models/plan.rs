//! Plan model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Task, duration::total_duration};
use crate::error::Result;

/// A stored task plan.
///
/// Plans are immutable once they reach the store. The serialized form is the
/// JSON export document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Unique identifier assigned by the store
    pub id: String,

    /// The goal exactly as the user entered it
    pub goal: String,

    /// The timeframe exactly as the user entered it
    pub timeframe: String,

    /// Optional additional context supplied with the goal
    pub context: Option<String>,

    /// Timestamp when the plan was stored (UTC)
    pub created_at: Timestamp,

    /// Tasks in parser order
    #[serde(default)]
    pub tasks: Vec<Task>,

    /// Plan-wide risk commentary
    pub overall_risk_notes: Option<String>,
}

/// A plan that has not been stored yet.
///
/// Produced by the response parser and the fallback builder; the store turns
/// it into a [`Plan`] by assigning an id and creation time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanDraft {
    pub goal: String,
    pub timeframe: String,
    pub context: Option<String>,
    pub tasks: Vec<Task>,
    pub overall_risk_notes: Option<String>,
}

impl Plan {
    /// Assemble a plan from a draft and the identity assigned at store time.
    pub fn from_draft(id: String, created_at: Timestamp, draft: PlanDraft) -> Self {
        Self {
            id,
            goal: draft.goal,
            timeframe: draft.timeframe,
            context: draft.context,
            created_at,
            tasks: draft.tasks,
            overall_risk_notes: draft.overall_risk_notes,
        }
    }

    /// Reconstruct a plan from its JSON export.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the plan as a pretty-printed JSON export document.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Drop the store-assigned identity, leaving the content.
    pub fn into_draft(self) -> PlanDraft {
        PlanDraft {
            goal: self.goal,
            timeframe: self.timeframe,
            context: self.context,
            tasks: self.tasks,
            overall_risk_notes: self.overall_risk_notes,
        }
    }

    /// Look up a task by its 1-based id.
    pub fn task(&self, id: usize) -> Option<&Task> {
        id.checked_sub(1).and_then(|index| self.tasks.get(index))
    }

    /// Iterate over tasks paired with their 1-based ids.
    pub fn tasks_with_ids(&self) -> impl Iterator<Item = (usize, &Task)> {
        self.tasks.iter().enumerate().map(|(index, task)| (index + 1, task))
    }

    /// Number of tasks in the plan.
    pub fn total_tasks(&self) -> usize {
        self.tasks.len()
    }

    /// Summed working time of all task estimates.
    pub fn estimated_total(&self) -> String {
        total_duration(self.tasks.iter().map(|task| task.duration_estimate.as_str()))
    }
}
