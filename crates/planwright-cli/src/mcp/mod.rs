//! MCP server implementation for Planwright
//!
//! Exposes plan generation and the in-memory plan store to MCP clients over
//! stdio. One [`Planner`] is shared by all tool calls.

use std::{future::Future, sync::Arc};

use anyhow::Result;
use log::{debug, error, info};
use planwright_core::Planner;
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use tokio::signal::unix::{SignalKind, signal};

pub mod errors;
pub mod handlers;

pub use handlers::{GeneratePlan, Id, McpResult};

/// MCP server for Planwright
#[derive(Clone)]
pub struct PlanwrightMcpServer {
    planner: Arc<Planner>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl PlanwrightMcpServer {
    /// Create a new Planwright MCP server
    pub fn new(planner: Planner) -> Self {
        Self {
            planner: Arc::new(planner),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.planner.clone())
    }

    #[tool(
        name = "generate_plan",
        description = "Break a goal down into a prioritized task plan with dependencies, duration estimates, risks and deliverables. Provide the goal (required), an optional timeframe such as '2 weeks' (default), and optional context. Returns the plan as markdown along with its ID. If the language model is unavailable a single-task fallback plan is stored and a warning explains why."
    )]
    async fn generate_plan(&self, params: Parameters<GeneratePlan>) -> McpResult {
        self.handlers().generate_plan(params).await
    }

    #[tool(
        name = "show_plan",
        description = "Display a previously generated plan by ID: tasks grouped by priority with durations, dependencies, risks and deliverables."
    )]
    async fn show_plan(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_plan(params).await
    }

    #[tool(
        name = "export_plan",
        description = "Export a previously generated plan by ID as a JSON document with id, goal, timeframe, context, created_at, tasks and overall_risk_notes."
    )]
    async fn export_plan(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().export_plan(params).await
    }

    #[tool(
        name = "list_plans",
        description = "List all plans generated since the server started, oldest first, with their IDs, timeframes and task counts."
    )]
    async fn list_plans(&self) -> McpResult {
        self.handlers().list_plans().await
    }

    #[tool(
        name = "plan_stats",
        description = "Report how many plans and tasks have been generated since the server started."
    )]
    async fn plan_stats(&self) -> McpResult {
        self.handlers().plan_stats().await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for PlanwrightMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "planwright".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(r#"Planwright turns a goal into a structured task plan using a language model.

## Core Concepts
- **Plans**: one breakdown of a goal, identified by an 8-character ID, kept in memory while the server runs
- **Tasks**: numbered units of work with priority (High/Medium/Low), duration, dependencies on earlier tasks, risks and deliverables

## Workflow
1. Call `generate_plan` with a goal and optional timeframe and context
2. Use `show_plan` or `export_plan` with the returned ID to read it again as markdown or JSON
3. Use `list_plans` and `plan_stats` to review what has been generated

## Fallback Plans
When the model cannot be reached or its reply has no recognizable tasks, `generate_plan` still stores a plan: a single Medium-priority task echoing the goal, with a warning naming the reason."#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: PlanwrightMcpServer) -> Result<()> {
    use rmcp::{ServiceExt, transport::stdio};

    info!("Starting Planwright MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    // Set up signal handlers for graceful shutdown
    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
