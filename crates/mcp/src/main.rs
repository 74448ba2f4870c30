//! TaskMan MCP server - line-delimited JSON-RPC over stdio.
//!
//! This allows AI assistants (like Claude) to manage the task list.

mod dispatcher;
mod protocol;
mod server;

use anyhow::Result;
use clap::Parser;
use dispatcher::Dispatcher;
use std::sync::Arc;
use taskman_storage::{JsonTaskStore, TaskStore};
use taskman_tools::{AddTaskTool, GithubUserTool, ListTasksTool, MarkCompletedTool, ToolRegistry};
use tokio::io::BufReader;
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "taskman-mcp")]
#[command(about = "Task planner MCP server", long_about = None)]
struct Cli {
    /// Path of the JSON file holding the task collection
    #[arg(long, default_value = "tasks.json")]
    file: std::path::PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries protocol frames; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let store: Arc<dyn TaskStore> = Arc::new(JsonTaskStore::new(&cli.file));

    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(AddTaskTool::new(store.clone())))?;
    registry.register(Arc::new(ListTasksTool::new(store.clone())))?;
    registry.register(Arc::new(MarkCompletedTool::new(store.clone())))?;
    registry.register(Arc::new(GithubUserTool::new()))?;

    let dispatcher = Dispatcher::new(Arc::new(registry));

    info!("Starting TaskMan MCP server (stdio transport)");

    server::run(
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        &dispatcher,
    )
    .await?;

    info!("MCP server stopped");
    Ok(())
}
