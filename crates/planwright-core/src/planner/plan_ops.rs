//! Plan operations for the Planner.

use log::debug;

use super::Planner;
use crate::{
    display::{self, PlanSummaries},
    error::Result,
    models::{Plan, Stats},
    params::Id,
};

impl Planner {
    /// Retrieves a stored plan by its ID.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::PlanNotFound` for an unknown id.
    pub fn get_plan(&self, params: &Id) -> Result<Plan> {
        debug!("get_plan: {}", params.id);
        self.store.get(&params.id)
    }

    /// Summaries of all plans generated in this process, oldest first.
    pub fn list_plans(&self) -> PlanSummaries {
        PlanSummaries(self.store.list())
    }

    /// Plan and task counts across the store.
    pub fn stats(&self) -> Stats {
        self.store.stats()
    }

    /// Markdown rendering of a stored plan.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::PlanNotFound` for an unknown id.
    pub fn format_plan_output(&self, params: &Id) -> Result<String> {
        let plan = self.get_plan(params)?;
        Ok(display::format_plan_output(&plan))
    }

    /// JSON export of a stored plan.
    ///
    /// The document round-trips through [`Plan::from_json`].
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::PlanNotFound` for an unknown id and
    /// `PlannerError::Serialization` if encoding fails.
    pub fn export_plan_json(&self, params: &Id) -> Result<String> {
        let plan = self.get_plan(params)?;
        plan.to_json()
    }
}
