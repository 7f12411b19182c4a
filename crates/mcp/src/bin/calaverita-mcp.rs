// Standalone MCP server binary

use anyhow::Result;
use calaverita_mcp::server::McpServer;
use calaverita_mcp::tools::{GenerateCalaberitaTool, ToolRegistry};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing. Logs go to stderr: stdout carries protocol frames.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::info!("Calaverita MCP server starting...");

    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(GenerateCalaberitaTool));

    tracing::info!("Registered {} tools", registry.list_schemas().len());

    let server = McpServer::new(registry);
    tokio::select! {
        result = server.run() => result?,
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Interrupt received, shutting down");
        }
    }

    Ok(())
}
