//! MCP server implementation for Motion
//!
//! This module defines the main MCP server that exposes Motion API
//! operations as tools. Handler implementations are in the handlers
//! module; each tool invocation is stateless and independent.

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError,
};
use std::sync::Arc;

use crate::api::MotionApi;
use crate::client::MotionClient;
use crate::config::MotionConfig;
use crate::handlers;
use crate::params::*;

/// The main Motion MCP Server
#[derive(Clone)]
pub struct MotionMcpServer {
    api: Arc<dyn MotionApi>,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Tool Router - Each tool delegates to its handler
// ============================================================================

#[tool_router]
impl MotionMcpServer {
    pub fn new(config: MotionConfig) -> anyhow::Result<Self> {
        let client = MotionClient::new(config)?;
        Ok(Self {
            api: Arc::new(client),
            tool_router: Self::tool_router(),
        })
    }

    /// Server backed by an arbitrary API implementation (for testing).
    #[cfg(test)]
    pub(crate) fn with_api(api: Arc<dyn MotionApi>) -> Self {
        Self {
            api,
            tool_router: Self::tool_router(),
        }
    }

    // ========================================================================
    // Task tools
    // ========================================================================

    #[tool(description = "List tasks with optional filters (assignee, project, status, workspace, label, name) and pagination")]
    async fn list_tasks(
        &self,
        Parameters(params): Parameters<ListTasksParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::list_tasks(self.api.as_ref(), params).await
    }

    #[tool(description = "Get a task by its ID")]
    async fn get_task(
        &self,
        Parameters(params): Parameters<GetTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::get_task(self.api.as_ref(), params).await
    }

    #[tool(description = "Create a new task in a workspace")]
    async fn create_task(
        &self,
        Parameters(params): Parameters<CreateTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::create_task(self.api.as_ref(), params).await
    }

    #[tool(description = "Update a task's properties including name, status, assignee, or scheduling")]
    async fn update_task(
        &self,
        Parameters(params): Parameters<UpdateTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::update_task(self.api.as_ref(), params).await
    }

    #[tool(description = "Move a task to a different workspace with optional reassignment")]
    async fn move_task(
        &self,
        Parameters(params): Parameters<MoveTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::move_task(self.api.as_ref(), params).await
    }

    #[tool(description = "Remove the assignee from a task")]
    async fn unassign_task(
        &self,
        Parameters(params): Parameters<UnassignTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::unassign_task(self.api.as_ref(), params).await
    }

    #[tool(description = "Delete a task by its ID")]
    async fn delete_task(
        &self,
        Parameters(params): Parameters<DeleteTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::delete_task(self.api.as_ref(), params).await
    }

    // ========================================================================
    // User and workspace tools
    // ========================================================================

    #[tool(description = "Get the currently authenticated user")]
    async fn get_user(&self) -> Result<CallToolResult, McpError> {
        handlers::get_user(self.api.as_ref()).await
    }

    #[tool(description = "List users, optionally filtered by team or workspace")]
    async fn list_users(
        &self,
        Parameters(params): Parameters<ListUsersParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::list_users(self.api.as_ref(), params).await
    }

    #[tool(description = "List all available workspaces with pagination support")]
    async fn list_workspaces(
        &self,
        Parameters(params): Parameters<ListWorkspacesParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::list_workspaces(self.api.as_ref(), params).await
    }

    // ========================================================================
    // Project tools
    // ========================================================================

    #[tool(description = "List projects, optionally filtered by workspace")]
    async fn list_projects(
        &self,
        Parameters(params): Parameters<ListProjectsParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::list_projects(self.api.as_ref(), params).await
    }

    #[tool(description = "Get a project by its ID")]
    async fn get_project(
        &self,
        Parameters(params): Parameters<GetProjectParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::get_project(self.api.as_ref(), params).await
    }

    #[tool(description = "Create a new project with name, workspace, and optional template stages")]
    async fn create_project(
        &self,
        Parameters(params): Parameters<CreateProjectParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::create_project(self.api.as_ref(), params).await
    }

    // ========================================================================
    // Schedule and status tools
    // ========================================================================

    #[tool(description = "Get the authenticated user's work schedules")]
    async fn get_schedules(&self) -> Result<CallToolResult, McpError> {
        handlers::get_schedules(self.api.as_ref()).await
    }

    #[tool(description = "Get available task statuses for a specific workspace")]
    async fn get_statuses(
        &self,
        Parameters(params): Parameters<GetStatusesParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::get_statuses(self.api.as_ref(), params).await
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for MotionMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Motion MCP Server - exposes the Motion task management API as tools. \
                 Supports listing, creating, updating, moving, and deleting tasks, \
                 managing projects, and reading users, workspaces, schedules, and \
                 workspace statuses."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
