//! Dispatcher-level tests
//!
//! Handlers are exercised against a recording mock behind the
//! [`MotionApi`] seam: validation failures must never reach the API,
//! path identifiers must never leak into request bodies, and every
//! outcome must land in the expected envelope.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::api::MotionApi;
use crate::error::MotionError;
use crate::handlers;
use crate::params::*;
use crate::server::MotionMcpServer;
use crate::types::*;

// ============================================================================
// Recording mock
// ============================================================================

#[derive(Debug, Clone)]
struct RecordedCall {
    op: &'static str,
    path_id: Option<String>,
    body: Option<Value>,
}

#[derive(Default)]
struct MockApi {
    calls: Mutex<Vec<RecordedCall>>,
    // When set, every operation fails with this upstream error
    error: Option<(u16, &'static str, &'static str)>,
}

impl MockApi {
    fn new() -> Self {
        Self::default()
    }

    fn failing(status: u16, status_text: &'static str, body: &'static str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            error: Some((status, status_text, body)),
        }
    }

    fn record(&self, op: &'static str, path_id: Option<&str>, body: Option<Value>) {
        self.calls.lock().unwrap().push(RecordedCall {
            op,
            path_id: path_id.map(str::to_string),
            body,
        });
    }

    fn check(&self) -> Result<(), MotionError> {
        match self.error {
            Some((status, status_text, body)) => Err(MotionError::Api {
                status,
                status_text: status_text.to_string(),
                body: body.to_string(),
            }),
            None => Ok(()),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn last_call(&self) -> RecordedCall {
        self.calls.lock().unwrap().last().cloned().expect("no call recorded")
    }
}

fn sample_user() -> MotionUser {
    MotionUser {
        id: "user-1".to_string(),
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
    }
}

fn sample_status() -> MotionStatus {
    MotionStatus {
        id: None,
        name: "Todo".to_string(),
        is_default_status: true,
        is_resolved_status: false,
    }
}

fn sample_task(id: &str) -> MotionTask {
    MotionTask {
        id: id.to_string(),
        name: "New Task".to_string(),
        description: None,
        due_date: None,
        completed: false,
        creator: sample_user(),
        project: None,
        workspace: WorkspaceRef {
            id: "workspace-1".to_string(),
            name: "Main".to_string(),
        },
        status: sample_status(),
        priority: Priority::Medium,
        assignees: vec![],
        labels: vec![],
        duration: None,
        auto_scheduled: None,
        created_at: "2024-01-01T00:00:00Z".to_string(),
        updated_at: "2024-01-01T00:00:00Z".to_string(),
        scheduled_start: None,
        scheduled_end: None,
        scheduling_issue: false,
        custom_field_values: None,
    }
}

fn sample_project(id: &str) -> MotionProject {
    MotionProject {
        id: id.to_string(),
        name: "Launch".to_string(),
        description: String::new(),
        workspace_id: "workspace-1".to_string(),
        status: sample_status(),
        created_time: "2024-01-01T00:00:00Z".to_string(),
        updated_time: "2024-01-01T00:00:00Z".to_string(),
        custom_field_values: None,
    }
}

fn page_meta() -> PageMeta {
    PageMeta {
        next_cursor: None,
        page_size: 20,
    }
}

#[async_trait]
impl MotionApi for MockApi {
    async fn list_tasks(
        &self,
        params: &ListTasksParams,
    ) -> Result<ListTasksResponse, MotionError> {
        self.record("list_tasks", None, Some(serde_json::to_value(params).unwrap()));
        self.check()?;
        Ok(ListTasksResponse {
            tasks: vec![sample_task("task-1")],
            meta: page_meta(),
        })
    }

    async fn get_task(&self, task_id: &str) -> Result<MotionTask, MotionError> {
        self.record("get_task", Some(task_id), None);
        self.check()?;
        Ok(sample_task(task_id))
    }

    async fn create_task(&self, params: &CreateTaskParams) -> Result<MotionTask, MotionError> {
        self.record("create_task", None, Some(serde_json::to_value(params).unwrap()));
        self.check()?;
        Ok(sample_task("task-new"))
    }

    async fn update_task(
        &self,
        task_id: &str,
        fields: &UpdateTaskFields,
    ) -> Result<MotionTask, MotionError> {
        self.record(
            "update_task",
            Some(task_id),
            Some(serde_json::to_value(fields).unwrap()),
        );
        self.check()?;
        Ok(sample_task(task_id))
    }

    async fn move_task(
        &self,
        task_id: &str,
        fields: &MoveTaskFields,
    ) -> Result<MotionTask, MotionError> {
        self.record(
            "move_task",
            Some(task_id),
            Some(serde_json::to_value(fields).unwrap()),
        );
        self.check()?;
        Ok(sample_task(task_id))
    }

    async fn delete_task(&self, task_id: &str) -> Result<(), MotionError> {
        self.record("delete_task", Some(task_id), None);
        self.check()
    }

    async fn unassign_task(&self, task_id: &str) -> Result<(), MotionError> {
        self.record("unassign_task", Some(task_id), None);
        self.check()
    }

    async fn get_user(&self) -> Result<MotionUser, MotionError> {
        self.record("get_user", None, None);
        self.check()?;
        Ok(sample_user())
    }

    async fn list_users(
        &self,
        params: &ListUsersParams,
    ) -> Result<ListUsersResponse, MotionError> {
        self.record("list_users", None, Some(serde_json::to_value(params).unwrap()));
        self.check()?;
        Ok(ListUsersResponse {
            users: vec![sample_user()],
            meta: page_meta(),
        })
    }

    async fn list_workspaces(
        &self,
        params: &ListWorkspacesParams,
    ) -> Result<ListWorkspacesResponse, MotionError> {
        self.record(
            "list_workspaces",
            None,
            Some(serde_json::to_value(params).unwrap()),
        );
        self.check()?;
        Ok(ListWorkspacesResponse {
            workspaces: vec![],
            meta: page_meta(),
        })
    }

    async fn list_projects(
        &self,
        params: &ListProjectsParams,
    ) -> Result<ListProjectsResponse, MotionError> {
        self.record(
            "list_projects",
            None,
            Some(serde_json::to_value(params).unwrap()),
        );
        self.check()?;
        Ok(ListProjectsResponse {
            projects: vec![sample_project("project-1")],
            meta: page_meta(),
        })
    }

    async fn get_project(&self, project_id: &str) -> Result<MotionProject, MotionError> {
        self.record("get_project", Some(project_id), None);
        self.check()?;
        Ok(sample_project(project_id))
    }

    async fn create_project(
        &self,
        params: &CreateProjectParams,
    ) -> Result<MotionProject, MotionError> {
        self.record(
            "create_project",
            None,
            Some(serde_json::to_value(params).unwrap()),
        );
        self.check()?;
        Ok(sample_project("project-new"))
    }

    async fn get_schedules(&self) -> Result<Vec<MotionSchedule>, MotionError> {
        self.record("get_schedules", None, None);
        self.check()?;
        Ok(vec![])
    }

    async fn get_statuses(&self, workspace_id: &str) -> Result<Vec<MotionStatus>, MotionError> {
        self.record("get_statuses", Some(workspace_id), None);
        self.check()?;
        Ok(vec![sample_status()])
    }
}

fn result_text(result: &rmcp::model::CallToolResult) -> String {
    result.content[0].as_text().unwrap().text.clone()
}

// ============================================================================
// Validation rejects before the client is invoked
// ============================================================================

#[tokio::test]
async fn test_status_and_include_all_statuses_rejected_before_client() {
    let mock = MockApi::new();
    let params = ListTasksParams {
        status: Some(StatusFilter::One("Todo".to_string())),
        include_all_statuses: Some(true),
        ..Default::default()
    };

    let result = handlers::list_tasks(&mock, params).await;
    assert!(result.is_err());
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_invalid_due_date_rejected_before_client() {
    let mock = MockApi::new();
    let params: CreateTaskParams = serde_json::from_value(json!({
        "name": "New Task",
        "workspaceId": "workspace-1",
        "dueDate": "tomorrow"
    }))
    .unwrap();

    let err = handlers::create_task(&mock, params).await.unwrap_err();
    assert!(err.message.contains("dueDate"));
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_empty_task_id_rejected_before_client() {
    let mock = MockApi::new();
    let params = GetTaskParams {
        task_id: "  ".to_string(),
    };

    let err = handlers::get_task(&mock, params).await.unwrap_err();
    assert!(err.message.contains("taskId"));
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_create_project_requires_stages_with_template() {
    let mock = MockApi::new();
    let params: CreateProjectParams = serde_json::from_value(json!({
        "name": "Launch",
        "workspaceId": "workspace-1",
        "projectDefinitionId": "def-1"
    }))
    .unwrap();

    let err = handlers::create_project(&mock, params).await.unwrap_err();
    assert!(err.message.contains("stages"));
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_invalid_auto_scheduled_start_date_rejected() {
    let mock = MockApi::new();
    let params: UpdateTaskParams = serde_json::from_value(json!({
        "taskId": "task-1",
        "autoScheduled": { "startDate": "someday" }
    }))
    .unwrap();

    let err = handlers::update_task(&mock, params).await.unwrap_err();
    assert!(err.message.contains("autoScheduled.startDate"));
    assert_eq!(mock.call_count(), 0);
}

// ============================================================================
// Success envelopes
// ============================================================================

#[tokio::test]
async fn test_list_tasks_returns_pretty_printed_list() {
    let mock = MockApi::new();
    let params: ListTasksParams = serde_json::from_value(json!({
        "workspaceId": "workspace-101",
        "includeAllStatuses": true
    }))
    .unwrap();

    let result = handlers::list_tasks(&mock, params).await.unwrap();
    assert!(!result.is_error.unwrap_or(false));

    let text = result_text(&result);
    // Pretty-printed (multi-line) and parses back to the mocked list
    assert!(text.contains('\n'));
    let value: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["tasks"][0]["id"], json!("task-1"));
    assert_eq!(value["meta"]["pageSize"], json!(20));

    let call = mock.last_call();
    assert_eq!(call.op, "list_tasks");
    assert_eq!(call.body.unwrap()["includeAllStatuses"], json!(true));
}

#[tokio::test]
async fn test_create_task_round_trip() {
    let mock = MockApi::new();
    let params: CreateTaskParams = serde_json::from_value(json!({
        "name": "New Task",
        "workspaceId": "workspace-1"
    }))
    .unwrap();

    let result = handlers::create_task(&mock, params).await.unwrap();
    assert!(!result.is_error.unwrap_or(false));

    // The forwarded body is exactly the two supplied fields
    let call = mock.last_call();
    assert_eq!(
        call.body.unwrap(),
        json!({ "name": "New Task", "workspaceId": "workspace-1" })
    );

    // The returned text carries the id the client produced
    let value: Value = serde_json::from_str(&result_text(&result)).unwrap();
    assert_eq!(value["id"], json!("task-new"));
}

#[tokio::test]
async fn test_update_task_identifier_not_in_body() {
    let mock = MockApi::new();
    let params: UpdateTaskParams = serde_json::from_value(json!({
        "taskId": "task-123",
        "name": "Renamed",
        "priority": "HIGH"
    }))
    .unwrap();

    handlers::update_task(&mock, params).await.unwrap();

    let call = mock.last_call();
    assert_eq!(call.path_id.as_deref(), Some("task-123"));
    let body = call.body.unwrap();
    assert!(body.get("taskId").is_none());
    assert_eq!(body, json!({ "name": "Renamed", "priority": "HIGH" }));
}

#[tokio::test]
async fn test_move_task_identifier_not_in_body() {
    let mock = MockApi::new();
    let params: MoveTaskParams = serde_json::from_value(json!({
        "taskId": "task-123",
        "workspaceId": "workspace-2"
    }))
    .unwrap();

    handlers::move_task(&mock, params).await.unwrap();

    let call = mock.last_call();
    assert_eq!(call.path_id.as_deref(), Some("task-123"));
    let body = call.body.unwrap();
    assert!(body.get("taskId").is_none());
    assert_eq!(body, json!({ "workspaceId": "workspace-2" }));
}

#[tokio::test]
async fn test_delete_task_confirmation_names_id() {
    let mock = MockApi::new();
    let params = DeleteTaskParams {
        task_id: "task-123".to_string(),
    };

    let result = handlers::delete_task(&mock, params).await.unwrap();
    assert!(!result.is_error.unwrap_or(false));
    assert_eq!(result_text(&result), "Task task-123 deleted successfully");
}

#[tokio::test]
async fn test_unassign_task_confirmation_names_id() {
    let mock = MockApi::new();
    let params = UnassignTaskParams {
        task_id: "task-123".to_string(),
    };

    let result = handlers::unassign_task(&mock, params).await.unwrap();
    assert!(!result.is_error.unwrap_or(false));
    assert_eq!(result_text(&result), "Task task-123 unassigned successfully");
}

#[tokio::test]
async fn test_get_statuses_passes_workspace_id() {
    let mock = MockApi::new();
    let params = GetStatusesParams {
        workspace_id: "workspace-123".to_string(),
    };

    let result = handlers::get_statuses(&mock, params).await.unwrap();
    assert!(!result.is_error.unwrap_or(false));

    let call = mock.last_call();
    assert_eq!(call.op, "get_statuses");
    assert_eq!(call.path_id.as_deref(), Some("workspace-123"));
}

// ============================================================================
// Error envelopes
// ============================================================================

#[tokio::test]
async fn test_upstream_error_becomes_error_envelope() {
    let mock = MockApi::failing(404, "Not Found", "Task not found");
    let params = GetTaskParams {
        task_id: "missing".to_string(),
    };

    let result = handlers::get_task(&mock, params).await.unwrap();
    assert!(result.is_error.unwrap_or(false));

    let text = result_text(&result);
    assert!(text.starts_with("Error: "));
    assert!(text.contains("404"));
    assert!(text.contains("Task not found"));
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn test_delete_error_envelope_keeps_upstream_body() {
    let mock = MockApi::failing(500, "Internal Server Error", "Internal server error");
    let params = DeleteTaskParams {
        task_id: "task-123".to_string(),
    };

    let result = handlers::delete_task(&mock, params).await.unwrap();
    assert!(result.is_error.unwrap_or(false));
    assert_eq!(
        result_text(&result),
        "Error: Motion API error: 500 Internal Server Error\nInternal server error"
    );
}

// ============================================================================
// Server surface
// ============================================================================

#[test]
fn test_server_exposes_tool_capability() {
    use rmcp::ServerHandler;

    let server = MotionMcpServer::with_api(Arc::new(MockApi::new()));
    let info = server.get_info();
    assert!(info.capabilities.tools.is_some());
    assert!(info.instructions.unwrap().contains("Motion"));
}
