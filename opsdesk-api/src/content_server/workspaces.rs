use serde::Serialize;
use shared_types::{
    UpdateWorkspaceCategoryRequest, UpdateWorkspaceProjectRequest, UpdateWorkspaceRequest,
    UpdateWorkspaceTaskRequest, Workspace, WorkspaceCategory, WorkspaceProject, WorkspaceTask,
};

use super::{ContentServerClient, ContentServerError};

/// Serialize a patch and stamp `updated_at` so the stored blob always
/// reflects the write time
fn stamped_patch(patch: &impl Serialize) -> Result<serde_json::Value, ContentServerError> {
    let mut value = serde_json::to_value(patch)
        .map_err(|e| ContentServerError::InvalidResponse(e.to_string()))?;
    if let Some(map) = value.as_object_mut() {
        map.insert(
            "updated_at".to_string(),
            serde_json::json!(chrono::Utc::now()),
        );
    }
    Ok(value)
}

impl ContentServerClient {
    pub async fn list_workspaces(&self) -> Result<Vec<Workspace>, ContentServerError> {
        self.get_json("/api/workspaces").await
    }

    pub async fn get_workspace(&self, id: &str) -> Result<Workspace, ContentServerError> {
        self.get_json(&format!("/api/workspaces/{}", id)).await
    }

    pub async fn create_workspace(
        &self,
        workspace: &Workspace,
    ) -> Result<Workspace, ContentServerError> {
        self.post_json("/api/workspaces", workspace).await
    }

    pub async fn update_workspace(
        &self,
        id: &str,
        patch: &UpdateWorkspaceRequest,
    ) -> Result<Workspace, ContentServerError> {
        self.put_json(&format!("/api/workspaces/{}", id), &stamped_patch(patch)?)
            .await
    }

    pub async fn delete_workspace(&self, id: &str) -> Result<(), ContentServerError> {
        self.delete(&format!("/api/workspaces/{}", id)).await
    }

    pub async fn list_categories(
        &self,
        workspace_id: &str,
    ) -> Result<Vec<WorkspaceCategory>, ContentServerError> {
        self.get_json(&format!("/api/workspaces/{}/categories", workspace_id))
            .await
    }

    pub async fn create_category(
        &self,
        category: &WorkspaceCategory,
    ) -> Result<WorkspaceCategory, ContentServerError> {
        self.post_json(
            &format!("/api/workspaces/{}/categories", category.workspace_id),
            category,
        )
        .await
    }

    pub async fn update_category(
        &self,
        workspace_id: &str,
        id: &str,
        patch: &UpdateWorkspaceCategoryRequest,
    ) -> Result<WorkspaceCategory, ContentServerError> {
        self.put_json(
            &format!("/api/workspaces/{}/categories/{}", workspace_id, id),
            &stamped_patch(patch)?,
        )
        .await
    }

    pub async fn delete_category(
        &self,
        workspace_id: &str,
        id: &str,
    ) -> Result<(), ContentServerError> {
        self.delete(&format!("/api/workspaces/{}/categories/{}", workspace_id, id))
            .await
    }

    pub async fn list_projects(
        &self,
        workspace_id: &str,
    ) -> Result<Vec<WorkspaceProject>, ContentServerError> {
        self.get_json(&format!("/api/workspaces/{}/projects", workspace_id))
            .await
    }

    pub async fn create_project(
        &self,
        project: &WorkspaceProject,
    ) -> Result<WorkspaceProject, ContentServerError> {
        self.post_json(
            &format!("/api/workspaces/{}/projects", project.workspace_id),
            project,
        )
        .await
    }

    pub async fn update_project(
        &self,
        workspace_id: &str,
        id: &str,
        patch: &UpdateWorkspaceProjectRequest,
    ) -> Result<WorkspaceProject, ContentServerError> {
        self.put_json(
            &format!("/api/workspaces/{}/projects/{}", workspace_id, id),
            &stamped_patch(patch)?,
        )
        .await
    }

    pub async fn delete_project(
        &self,
        workspace_id: &str,
        id: &str,
    ) -> Result<(), ContentServerError> {
        self.delete(&format!("/api/workspaces/{}/projects/{}", workspace_id, id))
            .await
    }

    pub async fn list_tasks(
        &self,
        workspace_id: &str,
    ) -> Result<Vec<WorkspaceTask>, ContentServerError> {
        self.get_json(&format!("/api/workspaces/{}/tasks", workspace_id))
            .await
    }

    pub async fn create_task(
        &self,
        task: &WorkspaceTask,
    ) -> Result<WorkspaceTask, ContentServerError> {
        self.post_json(
            &format!("/api/workspaces/{}/tasks", task.workspace_id),
            task,
        )
        .await
    }

    pub async fn update_task(
        &self,
        workspace_id: &str,
        id: &str,
        patch: &UpdateWorkspaceTaskRequest,
    ) -> Result<WorkspaceTask, ContentServerError> {
        self.put_json(
            &format!("/api/workspaces/{}/tasks/{}", workspace_id, id),
            &stamped_patch(patch)?,
        )
        .await
    }

    pub async fn delete_task(
        &self,
        workspace_id: &str,
        id: &str,
    ) -> Result<(), ContentServerError> {
        self.delete(&format!("/api/workspaces/{}/tasks/{}", workspace_id, id))
            .await
    }
}
