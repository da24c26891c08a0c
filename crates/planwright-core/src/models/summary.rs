//! Plan summary and statistics types.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Plan;

/// Summary information about a stored plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanSummary {
    /// Plan ID
    pub id: String,
    /// The goal the plan was generated for
    pub goal: String,
    /// The requested timeframe
    pub timeframe: String,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Number of tasks in the plan
    pub total_tasks: usize,
    /// Summed working time of all task estimates
    pub estimated_total: String,
}

impl From<&Plan> for PlanSummary {
    fn from(plan: &Plan) -> Self {
        Self {
            id: plan.id.clone(),
            goal: plan.goal.clone(),
            timeframe: plan.timeframe.clone(),
            created_at: plan.created_at,
            total_tasks: plan.total_tasks(),
            estimated_total: plan.estimated_total(),
        }
    }
}

/// Aggregate counts across the plan store.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stats {
    /// Number of plans stored in this process
    pub total_plans: usize,
    /// Number of tasks across all stored plans
    pub total_tasks: usize,
}
