use clap::{Parser, Subcommand};

use crate::cli::GenerateArgs;

/// Turn a goal into a prioritized task plan
///
/// Planwright asks a hosted language model to break a goal down into tasks
/// with dependencies, duration estimates, risks and deliverables. Plans are
/// printed as markdown or exported as JSON. The `serve` command exposes the
/// same operations as an MCP (Model Context Protocol) stdio server.
///
/// The API key is read from OPENAI_API_KEY, which may also be set in a
/// `.env` file in the current directory or in
/// $XDG_CONFIG_HOME/planwright/planwright.env. Without a key every plan is
/// a single-task fallback.
#[derive(Parser)]
#[command(version, about, name = "pw")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Model identifier, overriding PLANWRIGHT_MODEL
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Request timeout in seconds, overriding PLANWRIGHT_TIMEOUT_SECS
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Planwright CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a task plan for a goal
    #[command(alias = "g")]
    Generate(GenerateArgs),
    /// Start the MCP server
    Serve,
}
