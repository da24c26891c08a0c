//! Planwright CLI Application
//!
//! Command-line and MCP front end for the planwright goal planner.

mod args;
mod cli;
mod mcp;
mod renderer;

use std::{path::Path, time::Duration};

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::{debug, info, warn};
use mcp::{PlanwrightMcpServer, run_stdio_server};
use planwright_core::{LlmConfig, PlannerBuilder};
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        no_color,
        model,
        timeout,
        command,
    } = Args::parse();

    load_env_files();

    let mut config = LlmConfig::from_env().context("Invalid model configuration")?;
    if let Some(model) = model {
        config = config.with_model(model);
    }
    if let Some(secs) = timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }

    let planner = PlannerBuilder::new()
        .with_config(config)
        .build()
        .context("Failed to initialize planner")?;

    info!("Planwright started");

    match command {
        Commands::Generate(args) => {
            Cli::new(planner, TerminalRenderer::new(!no_color))
                .generate(args)
                .await
        }
        Commands::Serve => {
            info!("Starting Planwright MCP server");
            run_stdio_server(PlanwrightMcpServer::new(planner))
                .await
                .context("MCP server failed")
        }
    }
}

/// Load `.env` from the working directory, then the user config file.
///
/// Variables already set in the environment are never overridden, so the
/// earlier source wins.
fn load_env_files() {
    load_env_file(Path::new(".env"));

    let dirs = xdg::BaseDirectories::with_prefix("planwright");
    if let Some(path) = dirs.find_config_file("planwright.env") {
        load_env_file(&path);
    }
}

fn load_env_file(path: &Path) {
    if !path.is_file() {
        return;
    }
    match dotenvy::from_path(path) {
        Ok(()) => debug!("Loaded environment from {}", path.display()),
        Err(e) => warn!("Ignoring {}: {e}", path.display()),
    }
}
