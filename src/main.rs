//! Motion MCP Server - Motion task management over MCP
//!
//! Requires `MOTION_API_KEY`; serves tools over stdio.

use rmcp::{transport::stdio, ServiceExt};

use motion_mcp::config::MotionConfig;
use motion_mcp::{logging, MotionMcpServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Missing API key is fatal before any tool is registered.
    let config = match MotionConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    logging::init_tracing()?;

    tracing::info!("Starting Motion MCP server");

    let server = MotionMcpServer::new(config)?;
    let service = server.serve(stdio()).await?;

    tracing::info!("Motion MCP server running on stdio");

    service.waiting().await?;

    tracing::info!("Server shutting down");

    Ok(())
}
