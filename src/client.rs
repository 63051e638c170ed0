//! HTTP client for the Motion API
//!
//! The sole component that knows the base URL and the authentication
//! header. One logical operation maps to exactly one HTTP request; no
//! retry, no local timeout, no caching. Query-string construction lives in
//! pure functions so serialization rules stay unit-testable.

use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::MotionApi;
use crate::config::MotionConfig;
use crate::error::MotionError;
use crate::params::{
    CreateProjectParams, CreateTaskParams, ListProjectsParams, ListTasksParams, ListUsersParams,
    ListWorkspacesParams, MoveTaskFields, StatusFilter, UpdateTaskFields,
};
use crate::types::{
    ListProjectsResponse, ListTasksResponse, ListUsersResponse, ListWorkspacesResponse,
    MotionProject, MotionSchedule, MotionStatus, MotionTask, MotionUser,
};

/// Header carrying the API key on every request.
const API_KEY_HEADER: &str = "X-API-Key";

/// Motion API client
#[derive(Debug, Clone)]
pub struct MotionClient {
    http: reqwest::Client,
    config: MotionConfig,
}

impl MotionClient {
    /// Build a client with the fixed headers installed. Caller-supplied
    /// per-request settings can extend but not remove these.
    pub fn new(config: MotionConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, HeaderValue::from_str(&config.api_key)?);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .user_agent("motion-mcp/0.1")
            .default_headers(headers)
            .build()?;

        Ok(Self { http, config })
    }

    async fn check(response: Response) -> Result<Response, MotionError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        let body = response.text().await.unwrap_or_default();
        Err(MotionError::Api {
            status: status.as_u16(),
            status_text,
            body,
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, MotionError> {
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T, MotionError> {
        let url = format!("{}{}", self.config.base_url, path);
        tracing::debug!(%url, "GET");
        let mut request = self.http.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = request.send().await?;
        Self::decode(Self::check(response).await?).await
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, MotionError> {
        let url = format!("{}{}", self.config.base_url, path);
        tracing::debug!(%url, %method, "request with body");
        let response = self.http.request(method, &url).json(body).send().await?;
        Self::decode(Self::check(response).await?).await
    }

    /// DELETE with no body; an empty or no-content response is a void
    /// success, not a parse attempt.
    async fn delete_empty(&self, path: &str) -> Result<(), MotionError> {
        let url = format!("{}{}", self.config.base_url, path);
        tracing::debug!(%url, "DELETE");
        let response = self.http.delete(&url).send().await?;
        Self::check(response).await?;
        Ok(())
    }
}

// ============================================================================
// Query-string construction
// ============================================================================

fn push_opt(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: &Option<String>) {
    if let Some(v) = value {
        pairs.push((key, v.clone()));
    }
}

/// Pairs appear in declaration order; omitted filters never appear;
/// booleans serialize as "true"/"false"; the status filter expands to
/// repeated keys when it carries several names.
pub(crate) fn list_tasks_query(params: &ListTasksParams) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();
    push_opt(&mut pairs, "assigneeId", &params.assignee_id);
    push_opt(&mut pairs, "cursor", &params.cursor);
    if let Some(include_all) = params.include_all_statuses {
        pairs.push(("includeAllStatuses", include_all.to_string()));
    }
    push_opt(&mut pairs, "label", &params.label);
    push_opt(&mut pairs, "name", &params.name);
    push_opt(&mut pairs, "projectId", &params.project_id);
    match &params.status {
        Some(StatusFilter::One(status)) => pairs.push(("status", status.clone())),
        Some(StatusFilter::Many(statuses)) => {
            for status in statuses {
                pairs.push(("status", status.clone()));
            }
        }
        None => {}
    }
    push_opt(&mut pairs, "workspaceId", &params.workspace_id);
    pairs
}

pub(crate) fn list_users_query(params: &ListUsersParams) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();
    push_opt(&mut pairs, "cursor", &params.cursor);
    push_opt(&mut pairs, "teamId", &params.team_id);
    push_opt(&mut pairs, "workspaceId", &params.workspace_id);
    pairs
}

pub(crate) fn list_workspaces_query(params: &ListWorkspacesParams) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();
    push_opt(&mut pairs, "cursor", &params.cursor);
    if let Some(ids) = &params.ids {
        for id in ids {
            pairs.push(("ids", id.clone()));
        }
    }
    pairs
}

pub(crate) fn list_projects_query(params: &ListProjectsParams) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();
    push_opt(&mut pairs, "cursor", &params.cursor);
    push_opt(&mut pairs, "workspaceId", &params.workspace_id);
    pairs
}

// ============================================================================
// MotionApi implementation
// ============================================================================

#[async_trait]
impl MotionApi for MotionClient {
    async fn list_tasks(
        &self,
        params: &ListTasksParams,
    ) -> Result<ListTasksResponse, MotionError> {
        self.get_json("/tasks", &list_tasks_query(params)).await
    }

    async fn get_task(&self, task_id: &str) -> Result<MotionTask, MotionError> {
        self.get_json(&format!("/tasks/{}", task_id), &[]).await
    }

    async fn create_task(&self, params: &CreateTaskParams) -> Result<MotionTask, MotionError> {
        self.send_json(Method::POST, "/tasks", params).await
    }

    async fn update_task(
        &self,
        task_id: &str,
        fields: &UpdateTaskFields,
    ) -> Result<MotionTask, MotionError> {
        self.send_json(Method::PATCH, &format!("/tasks/{}", task_id), fields)
            .await
    }

    async fn move_task(
        &self,
        task_id: &str,
        fields: &MoveTaskFields,
    ) -> Result<MotionTask, MotionError> {
        self.send_json(Method::PATCH, &format!("/tasks/{}/move", task_id), fields)
            .await
    }

    async fn delete_task(&self, task_id: &str) -> Result<(), MotionError> {
        self.delete_empty(&format!("/tasks/{}", task_id)).await
    }

    async fn unassign_task(&self, task_id: &str) -> Result<(), MotionError> {
        self.delete_empty(&format!("/tasks/{}/assignee", task_id))
            .await
    }

    async fn get_user(&self) -> Result<MotionUser, MotionError> {
        self.get_json("/users/me", &[]).await
    }

    async fn list_users(
        &self,
        params: &ListUsersParams,
    ) -> Result<ListUsersResponse, MotionError> {
        self.get_json("/users", &list_users_query(params)).await
    }

    async fn list_workspaces(
        &self,
        params: &ListWorkspacesParams,
    ) -> Result<ListWorkspacesResponse, MotionError> {
        self.get_json("/workspaces", &list_workspaces_query(params))
            .await
    }

    async fn list_projects(
        &self,
        params: &ListProjectsParams,
    ) -> Result<ListProjectsResponse, MotionError> {
        self.get_json("/projects", &list_projects_query(params))
            .await
    }

    async fn get_project(&self, project_id: &str) -> Result<MotionProject, MotionError> {
        self.get_json(&format!("/projects/{}", project_id), &[])
            .await
    }

    async fn create_project(
        &self,
        params: &CreateProjectParams,
    ) -> Result<MotionProject, MotionError> {
        self.send_json(Method::POST, "/projects", params).await
    }

    async fn get_schedules(&self) -> Result<Vec<MotionSchedule>, MotionError> {
        self.get_json("/schedules", &[]).await
    }

    async fn get_statuses(&self, workspace_id: &str) -> Result<Vec<MotionStatus>, MotionError> {
        self.get_json("/statuses", &[("workspaceId", workspace_id.to_string())])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_tasks_query_empty_when_no_filters() {
        let pairs = list_tasks_query(&ListTasksParams::default());
        assert!(pairs.is_empty());
    }

    #[test]
    fn test_list_tasks_query_declaration_order() {
        let params = ListTasksParams {
            assignee_id: Some("user-123".to_string()),
            cursor: Some("cursor-456".to_string()),
            include_all_statuses: Some(true),
            label: Some("urgent".to_string()),
            name: Some("Test Task".to_string()),
            project_id: Some("project-789".to_string()),
            status: Some(StatusFilter::One("completed".to_string())),
            workspace_id: Some("workspace-101".to_string()),
        };
        let pairs = list_tasks_query(&params);
        assert_eq!(
            pairs,
            vec![
                ("assigneeId", "user-123".to_string()),
                ("cursor", "cursor-456".to_string()),
                ("includeAllStatuses", "true".to_string()),
                ("label", "urgent".to_string()),
                ("name", "Test Task".to_string()),
                ("projectId", "project-789".to_string()),
                ("status", "completed".to_string()),
                ("workspaceId", "workspace-101".to_string()),
            ]
        );
    }

    #[test]
    fn test_list_tasks_query_boolean_false_literal() {
        let params = ListTasksParams {
            include_all_statuses: Some(false),
            ..Default::default()
        };
        assert_eq!(
            list_tasks_query(&params),
            vec![("includeAllStatuses", "false".to_string())]
        );
    }

    #[test]
    fn test_list_tasks_query_status_array_repeats_key() {
        let params = ListTasksParams {
            status: Some(StatusFilter::Many(vec![
                "Todo".to_string(),
                "In Progress".to_string(),
            ])),
            ..Default::default()
        };
        assert_eq!(
            list_tasks_query(&params),
            vec![
                ("status", "Todo".to_string()),
                ("status", "In Progress".to_string()),
            ]
        );
    }

    #[test]
    fn test_list_workspaces_query_ids_repeat_key() {
        let params = ListWorkspacesParams {
            cursor: Some("cursor-123".to_string()),
            ids: Some(vec![
                "workspace-1".to_string(),
                "workspace-2".to_string(),
                "workspace-3".to_string(),
            ]),
        };
        assert_eq!(
            list_workspaces_query(&params),
            vec![
                ("cursor", "cursor-123".to_string()),
                ("ids", "workspace-1".to_string()),
                ("ids", "workspace-2".to_string()),
                ("ids", "workspace-3".to_string()),
            ]
        );
    }

    #[test]
    fn test_list_users_query_order() {
        let params = ListUsersParams {
            cursor: Some("cursor-123".to_string()),
            team_id: Some("team-456".to_string()),
            workspace_id: Some("workspace-789".to_string()),
        };
        assert_eq!(
            list_users_query(&params),
            vec![
                ("cursor", "cursor-123".to_string()),
                ("teamId", "team-456".to_string()),
                ("workspaceId", "workspace-789".to_string()),
            ]
        );
    }

    #[test]
    fn test_list_projects_query_omits_missing() {
        let params = ListProjectsParams {
            cursor: None,
            workspace_id: Some("w1".to_string()),
        };
        assert_eq!(
            list_projects_query(&params),
            vec![("workspaceId", "w1".to_string())]
        );
    }
}
