//! MCP tool handlers implementation

use std::sync::Arc;

use log::debug;
use planwright_core::{
    PlanOutcome, Planner,
    display::{OperationStatus, format_plan_output},
    params as core,
};
use rmcp::{
    ErrorData,
    handler::server::tool::Parameters,
    model::{CallToolResult, Content},
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::errors::to_mcp_error;

// ============================================================================
// Generic Parameter Wrapper Implementation
// ============================================================================
//
// Core parameter types carry their JSON schema behind the `schema` feature.
// This transparent wrapper adds the MCP-side deserialization so handlers can
// take `Parameters<McpParams<T>>` without the core crate depending on rmcp.

/// Generic MCP wrapper for core parameter types
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type Id = McpParams<core::Id>;
pub type GeneratePlan = McpParams<core::GeneratePlan>;

pub type McpResult = Result<CallToolResult, ErrorData>;

/// Handler implementations for the MCP server
pub struct McpHandlers {
    planner: Arc<Planner>,
}

impl McpHandlers {
    pub fn new(planner: Arc<Planner>) -> Self {
        Self { planner }
    }

    pub async fn generate_plan(&self, Parameters(params): Parameters<GeneratePlan>) -> McpResult {
        debug!("generate_plan: {:?}", params);

        let outcome = self
            .planner
            .generate_plan(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to generate plan", &e))?;

        let status = match &outcome {
            PlanOutcome::Generated(plan) => OperationStatus::success(format!(
                "Generated plan with ID {} ({} tasks)",
                plan.id,
                plan.total_tasks()
            )),
            PlanOutcome::Degraded { plan, reason } => OperationStatus::warning(format!(
                "Automatic task breakdown failed, stored fallback plan with ID {} ({reason})",
                plan.id
            )),
        };

        let result = format!("{status}\n{}", format_plan_output(outcome.plan()));
        Ok(CallToolResult::success(vec![Content::text(result)]))
    }

    pub async fn show_plan(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_plan: {:?}", params);

        let output = self
            .planner
            .format_plan_output(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to get plan", &e))?;

        Ok(CallToolResult::success(vec![Content::text(output)]))
    }

    pub async fn export_plan(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("export_plan: {:?}", params);

        let json = self
            .planner
            .export_plan_json(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to export plan", &e))?;

        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    pub async fn list_plans(&self) -> McpResult {
        debug!("list_plans");

        let summaries = self.planner.list_plans();
        let title = if summaries.is_empty() {
            "No plans generated yet"
        } else {
            "Generated Plans"
        };

        let result = format!("# {title}\n\n{summaries}");
        Ok(CallToolResult::success(vec![Content::text(result)]))
    }

    pub async fn plan_stats(&self) -> McpResult {
        debug!("plan_stats");

        let stats = self.planner.stats();
        Ok(CallToolResult::success(vec![Content::text(stats.to_string())]))
    }
}

#[cfg(test)]
mod tests {
    use planwright_core::PlannerBuilder;

    use super::*;

    fn handlers() -> McpHandlers {
        let planner = PlannerBuilder::new()
            .build()
            .expect("Failed to create planner");
        McpHandlers::new(Arc::new(planner))
    }

    fn text(result: &CallToolResult) -> String {
        result
            .content
            .iter()
            .filter_map(|content| content.as_text().map(|text| text.text.clone()))
            .collect()
    }

    fn generate_params(goal: &str) -> Parameters<GeneratePlan> {
        Parameters(McpParams(core::GeneratePlan::new(goal)))
    }

    #[tokio::test]
    async fn test_generate_then_show_and_export() {
        let handlers = handlers();

        let result = handlers
            .generate_plan(generate_params("Write a cookbook"))
            .await
            .expect("generate_plan failed");
        let output = text(&result);
        assert!(output.starts_with("Warning:"));
        assert!(output.contains("# Plan "));

        let summaries = handlers.planner.list_plans();
        let id = summaries[0].id.clone();

        let shown = handlers
            .show_plan(Parameters(McpParams(core::Id::new(&id))))
            .await
            .unwrap();
        assert!(text(&shown).contains("Write a cookbook"));

        let exported = handlers
            .export_plan(Parameters(McpParams(core::Id::new(&id))))
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&text(&exported)).unwrap();
        assert_eq!(value["id"], id.as_str());

        let stats = handlers.plan_stats().await.unwrap();
        assert_eq!(text(&stats), "Plans generated: 1, total tasks: 1");

        let listed = handlers.list_plans().await.unwrap();
        assert!(text(&listed).starts_with("# Generated Plans"));
    }

    #[tokio::test]
    async fn test_empty_goal_and_unknown_id_are_errors() {
        let handlers = handlers();

        assert!(handlers.generate_plan(generate_params(" ")).await.is_err());
        assert!(
            handlers
                .show_plan(Parameters(McpParams(core::Id::new("00000000"))))
                .await
                .is_err()
        );

        let listed = handlers.list_plans().await.unwrap();
        assert!(text(&listed).contains("No plans found."));
    }
}
