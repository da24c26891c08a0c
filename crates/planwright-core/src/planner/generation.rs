//! Plan generation: prompt, complete, parse, store.

use log::{debug, warn};

use super::Planner;
use crate::{
    error::{PlannerError, Result},
    llm::LlmError,
    models::{Plan, PlanDraft, Task, duration::normalize_duration},
    params::GeneratePlan,
    parser::parse_with,
    prompt::{Prompt, build_prompt},
};

/// Risk attached to the single task of a fallback plan.
pub const FALLBACK_RISK: &str =
    "Automatic task breakdown failed; split this goal into tasks manually";

/// Result of a generation request.
///
/// Both variants carry a stored plan that can be shown and exported by id.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanOutcome {
    /// The model's reply was parsed into tasks.
    Generated(Plan),
    /// The model could not be used; `plan` is the single-task fallback.
    Degraded { plan: Plan, reason: String },
}

impl PlanOutcome {
    pub fn plan(&self) -> &Plan {
        match self {
            PlanOutcome::Generated(plan) | PlanOutcome::Degraded { plan, .. } => plan,
        }
    }

    pub fn into_plan(self) -> Plan {
        match self {
            PlanOutcome::Generated(plan) | PlanOutcome::Degraded { plan, .. } => plan,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, PlanOutcome::Degraded { .. })
    }

    /// Why the fallback plan was used, if it was.
    pub fn reason(&self) -> Option<&str> {
        match self {
            PlanOutcome::Generated(_) => None,
            PlanOutcome::Degraded { reason, .. } => Some(reason),
        }
    }
}

impl Planner {
    /// Generate and store a plan for a goal.
    ///
    /// Upstream failures and unparseable replies do not fail the call; they
    /// are logged and produce a stored [`PlanOutcome::Degraded`] plan.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` when the goal is empty. No model
    /// call is made in that case.
    pub async fn generate_plan(&self, params: &GeneratePlan) -> Result<PlanOutcome> {
        let params = params.validated()?;
        let prompt = build_prompt(&params)?;
        debug!("generate_plan: goal '{}' ({})", params.goal, params.timeframe);

        match self.breakdown(&params, &prompt).await {
            Ok(draft) => {
                let plan = self.store.put(draft);
                debug!("generate_plan: stored plan {} with {} tasks", plan.id, plan.total_tasks());
                Ok(PlanOutcome::Generated(plan))
            }
            Err(e) if e.is_degradable() => {
                warn!("generate_plan: using fallback plan: {e}");
                let reason = e.to_string();
                let plan = self.store.put(fallback_draft(&params, &reason));
                Ok(PlanOutcome::Degraded { plan, reason })
            }
            Err(e) => Err(e),
        }
    }

    /// Ask the model for a breakdown and parse it.
    async fn breakdown(&self, params: &GeneratePlan, prompt: &Prompt) -> Result<PlanDraft> {
        let Some(client) = &self.client else {
            return Err(LlmError::Authentication("no API key configured".to_string()).into());
        };

        let reply = client.complete(prompt).await?;
        debug!("breakdown: received {} bytes", reply.len());

        let draft = parse_with(&self.grammars, &reply, params)?;
        if draft.tasks.is_empty() {
            return Err(PlannerError::parse("no task block in the response had a title"));
        }
        Ok(draft)
    }
}

/// Build the minimal plan used when automatic breakdown fails.
///
/// The goal becomes the only task, with Medium priority and no
/// dependencies; its duration is the requested timeframe when that fits the
/// duration grammar.
pub fn fallback_draft(params: &GeneratePlan, reason: &str) -> PlanDraft {
    let mut task = Task::new(params.goal.trim());
    task.description = format!("Complete the goal: {}", params.goal.trim());
    task.duration_estimate = normalize_duration(&params.timeframe);
    task.risks = vec![FALLBACK_RISK.to_string()];

    PlanDraft {
        goal: params.goal.clone(),
        timeframe: params.timeframe.clone(),
        context: params.context.clone(),
        tasks: vec![task],
        overall_risk_notes: Some(format!("Automatic task breakdown failed: {reason}")),
    }
}
