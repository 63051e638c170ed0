//! Error handling for the Motion MCP server
//!
//! `MotionError` covers everything the client can fail with. Upstream HTTP
//! failures keep the numeric status, the status text, and the raw response
//! body so the caller sees the upstream diagnostic verbatim. Network-level
//! failures pass through the reqwest error untransformed.

use rmcp::ErrorData as McpError;
use thiserror::Error;

/// Errors produced by the Motion API client
#[derive(Debug, Error)]
pub enum MotionError {
    /// Non-2xx response from the Motion API
    #[error("Motion API error: {status} {status_text}\n{body}")]
    Api {
        status: u16,
        status_text: String,
        body: String,
    },

    /// Connection, DNS, or protocol failure below the HTTP layer
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Response body that did not match the expected shape
    #[error("failed to decode Motion API response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Create an MCP internal error with a message
pub fn internal_error(message: impl Into<String>) -> McpError {
    McpError::internal_error(message.into(), None)
}

/// Create an MCP invalid-params error with a message
///
/// Used for argument validation failures; these are raised before the
/// client is invoked and surface as protocol-level faults.
pub fn invalid_params(message: impl Into<String>) -> McpError {
    McpError::invalid_params(message.into(), None)
}
