use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::project::{Priority, ProjectStatus};

/// Top-level container for categories, projects and tasks, stored on the
/// remote content server as JSON blobs. Ids are UUID strings minted at the
/// point of durable write; timestamps travel as RFC3339.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Workspace {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Labeled grouping of projects inside a workspace, with a display color
/// and sort position
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WorkspaceCategory {
    pub id: String,
    pub workspace_id: String,
    pub name: String,
    pub color: String,
    pub position: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Project inside a workspace; `category_id = None` means uncategorized
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WorkspaceProject {
    pub id: String,
    pub workspace_id: String,
    pub category_id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub priority: Priority,
    pub budget: Option<f64>,
    pub estimated_hours: Option<f64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub customer_id: Option<i64>,
    pub customer_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WorkspaceTask {
    pub id: String,
    pub workspace_id: String,
    pub category_id: Option<String>,
    pub project_id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub priority: Priority,
    pub estimated_hours: Option<f64>,
    pub due_date: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export)]
pub struct CreateWorkspaceRequest {
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
}

/// Patch sent to the content server verbatim; absent fields are left alone
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UpdateWorkspaceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export)]
pub struct CreateWorkspaceCategoryRequest {
    pub name: String,
    pub color: Option<String>,
    pub position: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UpdateWorkspaceCategoryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export)]
pub struct CreateWorkspaceProjectRequest {
    pub category_id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
    pub priority: Option<Priority>,
    pub budget: Option<f64>,
    pub estimated_hours: Option<f64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub customer_id: Option<i64>,
    pub customer_name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UpdateWorkspaceProjectRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export)]
pub struct CreateWorkspaceTaskRequest {
    pub category_id: Option<String>,
    pub project_id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
    pub priority: Option<Priority>,
    pub estimated_hours: Option<f64>,
    pub due_date: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UpdateWorkspaceTaskRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct WorkspacesResponse {
    pub workspaces: Vec<Workspace>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct WorkspaceCategoriesResponse {
    pub categories: Vec<WorkspaceCategory>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct WorkspaceProjectsResponse {
    pub projects: Vec<WorkspaceProject>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct WorkspaceTasksResponse {
    pub tasks: Vec<WorkspaceTask>,
}
