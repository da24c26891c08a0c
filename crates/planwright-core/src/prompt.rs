//! Prompt construction for task-breakdown requests.
//!
//! The prompt asks the model for a delimiter-based layout that
//! [`crate::parser`] knows how to read back. Keep the two in step when
//! changing either.

use crate::{error::Result, params::GeneratePlan};

/// Smallest number of tasks the model is asked for.
pub const MIN_TASKS: usize = 6;

/// Largest number of tasks the model is asked for, and the most the parser
/// will keep.
pub const MAX_TASKS: usize = 12;

const SYSTEM_PROMPT: &str = "You are an expert project manager. Create comprehensive task \
breakdowns with dependencies, timelines, and risk assessment. Follow the requested output \
layout exactly and do not add commentary outside it.";

const LAYOUT: &str = "\
TASK <number>: <short task title>
Description: <what needs to be done>
Duration: <amount> <hours|days|weeks>   (a range such as 2-3 days is allowed)
Dependencies: <comma-separated numbers of earlier tasks, or None>
Priority: <High|Medium|Low>
Risks:
- <potential issue>
Deliverables:
- <expected output>
END TASK";

/// A system/user message pair for the completion endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

/// Build the instruction for a generation request.
///
/// Deterministic for identical inputs and free of side effects.
///
/// # Errors
///
/// Returns `PlannerError::InvalidInput` when the goal is empty.
pub fn build_prompt(params: &GeneratePlan) -> Result<Prompt> {
    let params = params.validated()?;

    let context = params
        .context
        .as_deref()
        .map(|context| format!("CONTEXT: {}\n", context.trim()))
        .unwrap_or_default();

    let user = format!(
        "Break down this goal into {MIN_TASKS}-{MAX_TASKS} actionable tasks.\n\n\
         GOAL: {goal}\n\
         TIMEFRAME: {timeframe}\n\
         {context}\n\
         Describe every task using exactly this layout:\n\n\
         {LAYOUT}\n\n\
         Number tasks from 1 in the order they should start. \
         Refer to dependencies by task number only.\n\
         After the last task, add one line starting with \"OVERALL RISKS:\" \
         summarizing plan-wide risks.",
        goal = params.goal.trim(),
        timeframe = params.timeframe.trim(),
    );

    Ok(Prompt {
        system: SYSTEM_PROMPT.to_string(),
        user,
    })
}
