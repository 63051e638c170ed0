//! Motion MCP Library
//!
//! Exposes the Motion task management REST API as MCP tools: task CRUD,
//! project management, and read access to users, workspaces, schedules,
//! and statuses.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use motion_mcp::{MotionConfig, MotionMcpServer};
//!
//! let server = MotionMcpServer::new(MotionConfig::new("api-key"))?;
//! // Serve via stdio or an in-memory transport
//! ```
//!
//! # Configuration
//! `MOTION_API_KEY` is required; `MOTION_BASE_URL` optionally overrides
//! the production endpoint.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod params;
pub mod result;
pub mod server;
#[cfg(test)]
mod tests;
pub mod types;

// Re-export the main entry points
pub use config::MotionConfig;
pub use error::MotionError;
pub use server::MotionMcpServer;

// Re-export parameter types for direct API usage
pub use params::*;
