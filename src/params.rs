//! Parameter definitions for the Motion tools
//!
//! These structs are both the tool input schemas (via schemars) and the
//! serialized request bodies/query sources — defined once, used for
//! validation and serialization alike. Path identifiers (`taskId`) sit
//! next to a flattened body struct so they are structurally absent from
//! the payload forwarded to the API.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::{AutoScheduledPatch, Priority, TaskDuration};

// ============================================================================
// Task tools
// ============================================================================

/// Status filter for list_tasks: a single status name or several.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum StatusFilter {
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListTasksParams {
    #[schemars(description = "Limit tasks to a specific assignee")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,

    #[schemars(description = "Pagination cursor for next page")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,

    #[schemars(description = "Include all task statuses")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_all_statuses: Option<bool>,

    #[schemars(description = "Filter tasks by label")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[schemars(description = "Case-insensitive task name search")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[schemars(description = "Limit tasks to a specific project")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    #[schemars(description = "Filter tasks by status name, or by several status names")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusFilter>,

    #[schemars(description = "Specify workspace for tasks")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetTaskParams {
    #[schemars(description = "The ID of the task to retrieve")]
    pub task_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskParams {
    #[schemars(description = "Title of the task")]
    pub name: String,

    #[schemars(description = "The workspace ID the task should be associated with")]
    pub workspace_id: String,

    #[schemars(description = "ISO 8601 due date on the task. REQUIRED for scheduled tasks")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<TaskDuration>,

    #[schemars(description = "Task status; defaults to the workspace default status")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(
        default,
        deserialize_with = "AutoScheduledPatch::deserialize_field",
        skip_serializing_if = "AutoScheduledPatch::is_unspecified"
    )]
    pub auto_scheduled: AutoScheduledPatch,

    #[schemars(description = "The project ID the task should be associated with")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    #[schemars(description = "GitHub Flavored Markdown for the description")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[schemars(description = "ASAP, HIGH, MEDIUM, or LOW")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,

    #[schemars(description = "The names of the labels to be added to the task")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,

    #[schemars(description = "The user ID the task should be assigned to")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
}

/// Updatable task fields; serialized as the PATCH body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskFields {
    #[schemars(description = "Updated title of the task")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[schemars(description = "Updated workspace ID for the task")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,

    #[schemars(description = "Updated ISO 8601 due date. REQUIRED for scheduled tasks")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<TaskDuration>,

    #[schemars(description = "Updated task status")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(
        default,
        deserialize_with = "AutoScheduledPatch::deserialize_field",
        skip_serializing_if = "AutoScheduledPatch::is_unspecified"
    )]
    pub auto_scheduled: AutoScheduledPatch,

    #[schemars(description = "Updated project ID for the task")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    #[schemars(description = "Updated description in GitHub Flavored Markdown")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[schemars(description = "Updated priority: ASAP, HIGH, MEDIUM, or LOW")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,

    #[schemars(description = "Updated list of label names for the task")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,

    #[schemars(description = "Updated assignee user ID")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskParams {
    #[schemars(description = "The ID of the task to update")]
    pub task_id: String,

    #[serde(flatten)]
    pub fields: UpdateTaskFields,
}

/// Move destination; serialized as the PATCH body.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MoveTaskFields {
    #[schemars(description = "The ID of the workspace to move the task to")]
    pub workspace_id: String,

    #[schemars(description = "Optional user ID to assign the task to in the new workspace")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MoveTaskParams {
    #[schemars(description = "The ID of the task to move")]
    pub task_id: String,

    #[serde(flatten)]
    pub fields: MoveTaskFields,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTaskParams {
    #[schemars(description = "The ID of the task to delete")]
    pub task_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnassignTaskParams {
    #[schemars(description = "The ID of the task to unassign")]
    pub task_id: String,
}

// ============================================================================
// User and workspace tools
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListUsersParams {
    #[schemars(description = "Pagination cursor for next page")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,

    #[schemars(description = "Filter users by team ID")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,

    #[schemars(description = "Filter users by workspace ID")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListWorkspacesParams {
    #[schemars(description = "Pagination cursor for next page")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,

    #[schemars(description = "Expand details of specific workspace IDs")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<String>>,
}

// ============================================================================
// Project tools
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListProjectsParams {
    #[schemars(description = "Pagination cursor for next page")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,

    #[schemars(description = "Filter projects by workspace ID")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetProjectParams {
    #[schemars(description = "The ID of the project to retrieve")]
    pub project_id: String,
}

/// Named variable binding within a project stage
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VariableInstance {
    #[schemars(description = "Name of the variable definition")]
    pub variable_name: String,

    #[schemars(description = "The value for the variable")]
    pub value: String,
}

/// A stage instantiated from a project definition
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStage {
    #[schemars(description = "ID of the stage definition")]
    pub stage_definition_id: String,

    #[schemars(description = "Due date for this stage (ISO 8601)")]
    pub due_date: String,

    #[schemars(description = "Optional values for variables specific to this stage")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable_instances: Option<Vec<VariableInstance>>,
}

fn default_project_priority() -> Priority {
    Priority::Medium
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectParams {
    #[schemars(description = "The name of the project")]
    pub name: String,

    #[schemars(description = "The workspace ID where the project should be created")]
    pub workspace_id: String,

    #[schemars(description = "ISO 8601 due date for the project")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,

    #[schemars(description = "The description of the project (HTML input accepted)")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[schemars(description = "Array of label names for the project")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,

    #[schemars(description = "Project priority (defaults to MEDIUM)")]
    #[serde(default = "default_project_priority")]
    pub priority: Priority,

    #[schemars(description = "Optional ID of the project definition (template) to use")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_definition_id: Option<String>,

    #[schemars(
        description = "Stage objects for the template; required if projectDefinitionId is provided"
    )]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stages: Option<Vec<ProjectStage>>,
}

// ============================================================================
// Schedule and status tools
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetStatusesParams {
    #[schemars(description = "The workspace ID to get statuses for")]
    pub workspace_id: String,
}
