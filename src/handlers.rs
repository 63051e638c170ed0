//! Handler implementations for the Motion tools
//!
//! Each handler validates its arguments, calls the API through the
//! [`MotionApi`] seam, and wraps the outcome in the response envelope.
//! Validation failures are raised as protocol-level invalid-params faults
//! before the client is invoked; client and network errors become
//! `Error: <message>` envelopes with the error flag set.

use chrono::DateTime;
use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;

use crate::api::MotionApi;
use crate::error::invalid_params;
use crate::params::*;
use crate::result::{error_message, json_success, text_success};
use crate::types::AutoScheduledPatch;

// ============================================================================
// Validation helpers
// ============================================================================

fn require_non_empty(field: &str, value: &str) -> Result<(), McpError> {
    if value.trim().is_empty() {
        return Err(invalid_params(format!("{} must not be empty", field)));
    }
    Ok(())
}

/// RFC 3339 with an explicit offset, e.g. `2024-01-15T09:00:00Z`.
fn validate_datetime(field: &str, value: &str) -> Result<(), McpError> {
    DateTime::parse_from_rfc3339(value).map_err(|_| {
        invalid_params(format!(
            "{} must be an ISO 8601 date-time with offset, got {:?}",
            field, value
        ))
    })?;
    Ok(())
}

fn validate_datetime_opt(field: &str, value: &Option<String>) -> Result<(), McpError> {
    match value {
        Some(v) => validate_datetime(field, v),
        None => Ok(()),
    }
}

fn validate_labels(labels: &Option<Vec<String>>) -> Result<(), McpError> {
    if let Some(labels) = labels {
        if labels.iter().any(|l| l.trim().is_empty()) {
            return Err(invalid_params("labels must not contain empty names"));
        }
    }
    Ok(())
}

fn validate_auto_scheduled(patch: &AutoScheduledPatch) -> Result<(), McpError> {
    if let AutoScheduledPatch::Enabled(spec) = patch {
        validate_datetime("autoScheduled.startDate", &spec.start_date)?;
    }
    Ok(())
}

// ============================================================================
// Task tools
// ============================================================================

pub async fn list_tasks(
    api: &dyn MotionApi,
    params: ListTasksParams,
) -> Result<CallToolResult, McpError> {
    // Asking for every status while also naming a status filter is
    // contradictory; rejected rather than silently preferring one.
    if params.include_all_statuses == Some(true) && params.status.is_some() {
        return Err(invalid_params(
            "status and includeAllStatuses are mutually exclusive; pass one or the other",
        ));
    }

    match api.list_tasks(&params).await {
        Ok(response) => Ok(json_success(&response)),
        Err(e) => Ok(error_message(e)),
    }
}

pub async fn get_task(
    api: &dyn MotionApi,
    params: GetTaskParams,
) -> Result<CallToolResult, McpError> {
    require_non_empty("taskId", &params.task_id)?;

    match api.get_task(&params.task_id).await {
        Ok(task) => Ok(json_success(&task)),
        Err(e) => Ok(error_message(e)),
    }
}

pub async fn create_task(
    api: &dyn MotionApi,
    params: CreateTaskParams,
) -> Result<CallToolResult, McpError> {
    require_non_empty("name", &params.name)?;
    require_non_empty("workspaceId", &params.workspace_id)?;
    validate_datetime_opt("dueDate", &params.due_date)?;
    validate_auto_scheduled(&params.auto_scheduled)?;
    validate_labels(&params.labels)?;

    match api.create_task(&params).await {
        Ok(task) => Ok(json_success(&task)),
        Err(e) => Ok(error_message(e)),
    }
}

pub async fn update_task(
    api: &dyn MotionApi,
    params: UpdateTaskParams,
) -> Result<CallToolResult, McpError> {
    require_non_empty("taskId", &params.task_id)?;
    if let Some(name) = &params.fields.name {
        require_non_empty("name", name)?;
    }
    validate_datetime_opt("dueDate", &params.fields.due_date)?;
    validate_auto_scheduled(&params.fields.auto_scheduled)?;
    validate_labels(&params.fields.labels)?;

    match api.update_task(&params.task_id, &params.fields).await {
        Ok(task) => Ok(json_success(&task)),
        Err(e) => Ok(error_message(e)),
    }
}

pub async fn move_task(
    api: &dyn MotionApi,
    params: MoveTaskParams,
) -> Result<CallToolResult, McpError> {
    require_non_empty("taskId", &params.task_id)?;
    require_non_empty("workspaceId", &params.fields.workspace_id)?;

    match api.move_task(&params.task_id, &params.fields).await {
        Ok(task) => Ok(json_success(&task)),
        Err(e) => Ok(error_message(e)),
    }
}

pub async fn delete_task(
    api: &dyn MotionApi,
    params: DeleteTaskParams,
) -> Result<CallToolResult, McpError> {
    require_non_empty("taskId", &params.task_id)?;

    match api.delete_task(&params.task_id).await {
        Ok(()) => Ok(text_success(format!(
            "Task {} deleted successfully",
            params.task_id
        ))),
        Err(e) => Ok(error_message(e)),
    }
}

pub async fn unassign_task(
    api: &dyn MotionApi,
    params: UnassignTaskParams,
) -> Result<CallToolResult, McpError> {
    require_non_empty("taskId", &params.task_id)?;

    match api.unassign_task(&params.task_id).await {
        Ok(()) => Ok(text_success(format!(
            "Task {} unassigned successfully",
            params.task_id
        ))),
        Err(e) => Ok(error_message(e)),
    }
}

// ============================================================================
// User and workspace tools
// ============================================================================

pub async fn get_user(api: &dyn MotionApi) -> Result<CallToolResult, McpError> {
    match api.get_user().await {
        Ok(user) => Ok(json_success(&user)),
        Err(e) => Ok(error_message(e)),
    }
}

pub async fn list_users(
    api: &dyn MotionApi,
    params: ListUsersParams,
) -> Result<CallToolResult, McpError> {
    match api.list_users(&params).await {
        Ok(response) => Ok(json_success(&response)),
        Err(e) => Ok(error_message(e)),
    }
}

pub async fn list_workspaces(
    api: &dyn MotionApi,
    params: ListWorkspacesParams,
) -> Result<CallToolResult, McpError> {
    if let Some(ids) = &params.ids {
        if ids.iter().any(|id| id.trim().is_empty()) {
            return Err(invalid_params("ids must not contain empty workspace IDs"));
        }
    }

    match api.list_workspaces(&params).await {
        Ok(response) => Ok(json_success(&response)),
        Err(e) => Ok(error_message(e)),
    }
}

// ============================================================================
// Project tools
// ============================================================================

pub async fn list_projects(
    api: &dyn MotionApi,
    params: ListProjectsParams,
) -> Result<CallToolResult, McpError> {
    match api.list_projects(&params).await {
        Ok(response) => Ok(json_success(&response)),
        Err(e) => Ok(error_message(e)),
    }
}

pub async fn get_project(
    api: &dyn MotionApi,
    params: GetProjectParams,
) -> Result<CallToolResult, McpError> {
    require_non_empty("projectId", &params.project_id)?;

    match api.get_project(&params.project_id).await {
        Ok(project) => Ok(json_success(&project)),
        Err(e) => Ok(error_message(e)),
    }
}

pub async fn create_project(
    api: &dyn MotionApi,
    params: CreateProjectParams,
) -> Result<CallToolResult, McpError> {
    require_non_empty("name", &params.name)?;
    require_non_empty("workspaceId", &params.workspace_id)?;
    validate_datetime_opt("dueDate", &params.due_date)?;
    validate_labels(&params.labels)?;

    if params.project_definition_id.is_some()
        && params.stages.as_ref().map_or(true, |s| s.is_empty())
    {
        return Err(invalid_params(
            "stages are required when projectDefinitionId is provided",
        ));
    }

    if let Some(stages) = &params.stages {
        for stage in stages {
            require_non_empty("stages.stageDefinitionId", &stage.stage_definition_id)?;
            validate_datetime("stages.dueDate", &stage.due_date)?;
            if let Some(instances) = &stage.variable_instances {
                for instance in instances {
                    require_non_empty("stages.variableInstances.variableName", &instance.variable_name)?;
                }
            }
        }
    }

    match api.create_project(&params).await {
        Ok(project) => Ok(json_success(&project)),
        Err(e) => Ok(error_message(e)),
    }
}

// ============================================================================
// Schedule and status tools
// ============================================================================

pub async fn get_schedules(api: &dyn MotionApi) -> Result<CallToolResult, McpError> {
    match api.get_schedules().await {
        Ok(schedules) => Ok(json_success(&schedules)),
        Err(e) => Ok(error_message(e)),
    }
}

pub async fn get_statuses(
    api: &dyn MotionApi,
    params: GetStatusesParams,
) -> Result<CallToolResult, McpError> {
    require_non_empty("workspaceId", &params.workspace_id)?;

    match api.get_statuses(&params.workspace_id).await {
        Ok(statuses) => Ok(json_success(&statuses)),
        Err(e) => Ok(error_message(e)),
    }
}
