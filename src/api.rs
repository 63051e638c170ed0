//! The seam between tool handlers and the HTTP client
//!
//! Handlers talk to the Motion API through this trait; the real
//! implementation is [`crate::client::MotionClient`], tests substitute a
//! recording mock.

use async_trait::async_trait;

use crate::error::MotionError;
use crate::params::{
    CreateProjectParams, CreateTaskParams, ListProjectsParams, ListTasksParams, ListUsersParams,
    ListWorkspacesParams, MoveTaskFields, UpdateTaskFields,
};
use crate::types::{
    ListProjectsResponse, ListTasksResponse, ListUsersResponse, ListWorkspacesResponse,
    MotionProject, MotionSchedule, MotionStatus, MotionTask, MotionUser,
};

#[async_trait]
pub trait MotionApi: Send + Sync {
    async fn list_tasks(&self, params: &ListTasksParams)
        -> Result<ListTasksResponse, MotionError>;

    async fn get_task(&self, task_id: &str) -> Result<MotionTask, MotionError>;

    async fn create_task(&self, params: &CreateTaskParams) -> Result<MotionTask, MotionError>;

    async fn update_task(
        &self,
        task_id: &str,
        fields: &UpdateTaskFields,
    ) -> Result<MotionTask, MotionError>;

    async fn move_task(
        &self,
        task_id: &str,
        fields: &MoveTaskFields,
    ) -> Result<MotionTask, MotionError>;

    async fn delete_task(&self, task_id: &str) -> Result<(), MotionError>;

    async fn unassign_task(&self, task_id: &str) -> Result<(), MotionError>;

    async fn get_user(&self) -> Result<MotionUser, MotionError>;

    async fn list_users(&self, params: &ListUsersParams)
        -> Result<ListUsersResponse, MotionError>;

    async fn list_workspaces(
        &self,
        params: &ListWorkspacesParams,
    ) -> Result<ListWorkspacesResponse, MotionError>;

    async fn list_projects(
        &self,
        params: &ListProjectsParams,
    ) -> Result<ListProjectsResponse, MotionError>;

    async fn get_project(&self, project_id: &str) -> Result<MotionProject, MotionError>;

    async fn create_project(
        &self,
        params: &CreateProjectParams,
    ) -> Result<MotionProject, MotionError>;

    async fn get_schedules(&self) -> Result<Vec<MotionSchedule>, MotionError>;

    async fn get_statuses(&self, workspace_id: &str) -> Result<Vec<MotionStatus>, MotionError>;
}
