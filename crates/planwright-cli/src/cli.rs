//! Command handlers for the terminal front end.
//!
//! Clap argument structs stay in this crate and convert into core parameter
//! types with `From`, so the core crate never depends on clap:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```

use anyhow::{Context, Result};
use clap::Args;
use planwright_core::{
    PlanOutcome, Planner,
    display::{OperationStatus, format_plan_output},
    params::{DEFAULT_TIMEFRAME, GeneratePlan},
};

use crate::renderer::TerminalRenderer;

/// Generate a task plan for a goal
#[derive(Args)]
pub struct GenerateArgs {
    /// The goal to break down into tasks
    pub goal: String,
    /// Timeframe for the goal, e.g. "2 weeks" or "3 days"
    #[arg(short, long, default_value = DEFAULT_TIMEFRAME)]
    pub timeframe: String,
    /// Additional context for the model: team size, constraints, budget
    #[arg(short, long)]
    pub context: Option<String>,
    /// Print the plan as a JSON export instead of markdown
    #[arg(long)]
    pub json: bool,
}

impl From<GenerateArgs> for GeneratePlan {
    fn from(val: GenerateArgs) -> Self {
        GeneratePlan {
            goal: val.goal,
            timeframe: val.timeframe,
            context: val.context,
        }
    }
}

/// Runs CLI commands against a planner.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    /// Generate a plan and print it.
    ///
    /// Markdown goes to stdout followed by the statistics line. With `--json`
    /// stdout carries only the JSON document. Degradation warnings always go
    /// to stderr.
    pub async fn generate(&self, args: GenerateArgs) -> Result<()> {
        let json = args.json;
        let params = GeneratePlan::from(args);

        let outcome = self
            .planner
            .generate_plan(&params)
            .await
            .context("Failed to generate plan")?;

        if let PlanOutcome::Degraded { reason, .. } = &outcome {
            eprint!(
                "{}",
                OperationStatus::warning(format!(
                    "automatic task breakdown failed, showing a fallback plan ({reason})"
                ))
            );
        }

        let plan = outcome.into_plan();
        let stats = self.planner.stats();

        if json {
            let export = plan.to_json().context("Failed to export plan")?;
            println!("{export}");
            eprintln!("{stats}");
        } else {
            self.renderer.render(&format_plan_output(&plan))?;
            println!();
            println!("{stats}");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_args_into_params() {
        let args = GenerateArgs {
            goal: "Plan a wedding".to_string(),
            timeframe: "6 weeks".to_string(),
            context: Some("Budget of 10k".to_string()),
            json: false,
        };

        let params = GeneratePlan::from(args);
        assert_eq!(params.goal, "Plan a wedding");
        assert_eq!(params.timeframe, "6 weeks");
        assert_eq!(params.context.as_deref(), Some("Budget of 10k"));
    }
}
