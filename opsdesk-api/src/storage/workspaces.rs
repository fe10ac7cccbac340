//! Remote half of the façade. Every call goes to the content server
//! first; what happens on failure depends on the entity:
//!
//! - workspace reads fall back to the local file, workspace creates
//!   append to it
//! - workspace updates/deletes re-throw
//! - category/project/task reads degrade to an empty list, their writes
//!   re-throw with the remote status text
//!
//! The asymmetry between workspaces and their children is part of the
//! documented contract. Nothing on this path is retried.

use anyhow::Result;
use chrono::Utc;
use shared_types::{
    CreateWorkspaceCategoryRequest, CreateWorkspaceProjectRequest, CreateWorkspaceRequest,
    CreateWorkspaceTaskRequest, Priority, ProjectStatus, UpdateWorkspaceCategoryRequest,
    UpdateWorkspaceProjectRequest, UpdateWorkspaceRequest, UpdateWorkspaceTaskRequest,
    Workspace, WorkspaceCategory, WorkspaceProject, WorkspaceTask,
};
use tracing::warn;
use uuid::Uuid;

use super::Storage;
use crate::content_server::ContentServerError;

const DEFAULT_WORKSPACE_COLOR: &str = "#6366f1";
const DEFAULT_CATEGORY_COLOR: &str = "#94a3b8";

impl Storage {
    pub async fn get_workspaces(&self) -> Result<Vec<Workspace>> {
        match self.remote.list_workspaces().await {
            Ok(workspaces) => Ok(workspaces),
            Err(err) => {
                warn!("Workspace list unavailable remotely, using local fallback: {}", err);
                Ok(self.fallback.read_workspaces())
            }
        }
    }

    pub async fn get_workspace(&self, id: &str) -> Result<Option<Workspace>> {
        match self.remote.get_workspace(id).await {
            Ok(workspace) => Ok(Some(workspace)),
            Err(ContentServerError::Status(404, _)) => Ok(None),
            Err(err) => {
                warn!("Workspace {} unavailable remotely, using local fallback: {}", id, err);
                Ok(self
                    .fallback
                    .read_workspaces()
                    .into_iter()
                    .find(|w| w.id == id))
            }
        }
    }

    pub async fn create_workspace(&self, request: &CreateWorkspaceRequest) -> Result<Workspace> {
        let now = Utc::now();
        let workspace = Workspace {
            id: Uuid::new_v4().to_string(),
            name: request.name.clone(),
            description: request.description.clone(),
            color: request
                .color
                .clone()
                .unwrap_or_else(|| DEFAULT_WORKSPACE_COLOR.to_string()),
            created_at: now,
            updated_at: now,
        };

        match self.remote.create_workspace(&workspace).await {
            Ok(stored) => Ok(stored),
            Err(err) => {
                warn!("Workspace create failed remotely, writing local fallback: {}", err);
                self.fallback.append_workspace(&workspace)?;
                Ok(workspace)
            }
        }
    }

    /// No local fallback: a remote failure is the caller's problem
    pub async fn update_workspace(
        &self,
        id: &str,
        patch: &UpdateWorkspaceRequest,
    ) -> Result<Workspace> {
        Ok(self.remote.update_workspace(id, patch).await?)
    }

    /// No local fallback, and no cascade to the workspace's children
    pub async fn delete_workspace(&self, id: &str) -> Result<()> {
        Ok(self.remote.delete_workspace(id).await?)
    }

    pub async fn get_workspace_categories(
        &self,
        workspace_id: &str,
    ) -> Result<Vec<WorkspaceCategory>> {
        match self.remote.list_categories(workspace_id).await {
            Ok(categories) => Ok(categories),
            Err(err) => {
                warn!(
                    "Categories for workspace {} unavailable, returning empty list: {}",
                    workspace_id, err
                );
                Ok(Vec::new())
            }
        }
    }

    pub async fn create_workspace_category(
        &self,
        workspace_id: &str,
        request: &CreateWorkspaceCategoryRequest,
    ) -> Result<WorkspaceCategory> {
        let now = Utc::now();
        let category = WorkspaceCategory {
            id: Uuid::new_v4().to_string(),
            workspace_id: workspace_id.to_string(),
            name: request.name.clone(),
            color: request
                .color
                .clone()
                .unwrap_or_else(|| DEFAULT_CATEGORY_COLOR.to_string()),
            position: request.position.unwrap_or(0),
            created_at: now,
            updated_at: now,
        };

        Ok(self.remote.create_category(&category).await?)
    }

    pub async fn update_workspace_category(
        &self,
        workspace_id: &str,
        id: &str,
        patch: &UpdateWorkspaceCategoryRequest,
    ) -> Result<WorkspaceCategory> {
        Ok(self.remote.update_category(workspace_id, id, patch).await?)
    }

    pub async fn delete_workspace_category(&self, workspace_id: &str, id: &str) -> Result<()> {
        Ok(self.remote.delete_category(workspace_id, id).await?)
    }

    pub async fn get_workspace_projects(
        &self,
        workspace_id: &str,
    ) -> Result<Vec<WorkspaceProject>> {
        match self.remote.list_projects(workspace_id).await {
            Ok(projects) => Ok(projects),
            Err(err) => {
                warn!(
                    "Projects for workspace {} unavailable, returning empty list: {}",
                    workspace_id, err
                );
                Ok(Vec::new())
            }
        }
    }

    pub async fn create_workspace_project(
        &self,
        workspace_id: &str,
        request: &CreateWorkspaceProjectRequest,
    ) -> Result<WorkspaceProject> {
        let now = Utc::now();
        let project = WorkspaceProject {
            id: Uuid::new_v4().to_string(),
            workspace_id: workspace_id.to_string(),
            category_id: request.category_id.clone(),
            name: request.name.clone(),
            description: request.description.clone(),
            status: request.status.unwrap_or(ProjectStatus::Planning),
            priority: request.priority.unwrap_or(Priority::Medium),
            budget: request.budget,
            estimated_hours: request.estimated_hours,
            start_date: request.start_date.clone(),
            end_date: request.end_date.clone(),
            customer_id: request.customer_id,
            customer_name: request.customer_name.clone(),
            created_at: now,
            updated_at: now,
        };

        Ok(self.remote.create_project(&project).await?)
    }

    pub async fn update_workspace_project(
        &self,
        workspace_id: &str,
        id: &str,
        patch: &UpdateWorkspaceProjectRequest,
    ) -> Result<WorkspaceProject> {
        Ok(self.remote.update_project(workspace_id, id, patch).await?)
    }

    pub async fn delete_workspace_project(&self, workspace_id: &str, id: &str) -> Result<()> {
        Ok(self.remote.delete_project(workspace_id, id).await?)
    }

    pub async fn get_workspace_tasks(&self, workspace_id: &str) -> Result<Vec<WorkspaceTask>> {
        match self.remote.list_tasks(workspace_id).await {
            Ok(tasks) => Ok(tasks),
            Err(err) => {
                warn!(
                    "Tasks for workspace {} unavailable, returning empty list: {}",
                    workspace_id, err
                );
                Ok(Vec::new())
            }
        }
    }

    pub async fn create_workspace_task(
        &self,
        workspace_id: &str,
        request: &CreateWorkspaceTaskRequest,
    ) -> Result<WorkspaceTask> {
        let now = Utc::now();
        let task = WorkspaceTask {
            id: Uuid::new_v4().to_string(),
            workspace_id: workspace_id.to_string(),
            category_id: request.category_id.clone(),
            project_id: request.project_id.clone(),
            title: request.title.clone(),
            description: request.description.clone(),
            status: request.status.unwrap_or(ProjectStatus::Planning),
            priority: request.priority.unwrap_or(Priority::Medium),
            estimated_hours: request.estimated_hours,
            due_date: request.due_date.clone(),
            created_at: now,
            updated_at: now,
        };

        Ok(self.remote.create_task(&task).await?)
    }

    pub async fn update_workspace_task(
        &self,
        workspace_id: &str,
        id: &str,
        patch: &UpdateWorkspaceTaskRequest,
    ) -> Result<WorkspaceTask> {
        Ok(self.remote.update_task(workspace_id, id, patch).await?)
    }

    pub async fn delete_workspace_task(&self, workspace_id: &str, id: &str) -> Result<()> {
        Ok(self.remote.delete_task(workspace_id, id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{spawn_content_server, storage_with, unreachable_base_url};

    fn workspace_request(name: &str) -> CreateWorkspaceRequest {
        CreateWorkspaceRequest {
            name: name.to_string(),
            description: None,
            color: None,
        }
    }

    #[actix_web::test]
    async fn test_unreachable_remote_reads_fall_back_to_local_file() {
        let (storage, _dir) = storage_with(&unreachable_base_url());

        // Nothing written yet: empty, not an error
        let workspaces = storage.get_workspaces().await.unwrap();
        assert!(workspaces.is_empty());

        // Create degrades to the fallback file
        let created = storage
            .create_workspace(&workspace_request("offline workspace"))
            .await
            .unwrap();
        assert!(!created.id.is_empty());
        assert_eq!(created.created_at, created.updated_at);

        // And the fallback file now serves reads
        let workspaces = storage.get_workspaces().await.unwrap();
        assert_eq!(workspaces.len(), 1);
        assert_eq!(workspaces[0].name, "offline workspace");

        let found = storage.get_workspace(&created.id).await.unwrap();
        assert_eq!(found.unwrap().name, "offline workspace");
    }

    #[actix_web::test]
    async fn test_workspace_updates_and_deletes_do_not_fall_back() {
        let (storage, _dir) = storage_with(&unreachable_base_url());

        let created = storage
            .create_workspace(&workspace_request("stuck"))
            .await
            .unwrap();

        let patch = UpdateWorkspaceRequest {
            name: Some("renamed".to_string()),
            description: None,
            color: None,
        };
        assert!(storage.update_workspace(&created.id, &patch).await.is_err());
        assert!(storage.delete_workspace(&created.id).await.is_err());
    }

    #[actix_web::test]
    async fn test_child_reads_degrade_but_child_writes_throw() {
        let (storage, _dir) = storage_with(&unreachable_base_url());

        // Reads degrade to empty collections
        assert!(storage
            .get_workspace_categories("ws-1")
            .await
            .unwrap()
            .is_empty());
        assert!(storage
            .get_workspace_projects("ws-1")
            .await
            .unwrap()
            .is_empty());
        assert!(storage.get_workspace_tasks("ws-1").await.unwrap().is_empty());

        // Writes propagate the failure, asymmetric with workspace creates
        let category = CreateWorkspaceCategoryRequest {
            name: "Electrical".to_string(),
            color: None,
            position: None,
        };
        assert!(storage
            .create_workspace_category("ws-1", &category)
            .await
            .is_err());

        let project = CreateWorkspaceProjectRequest {
            category_id: None,
            name: "Panel upgrade".to_string(),
            description: None,
            status: None,
            priority: None,
            budget: None,
            estimated_hours: None,
            start_date: None,
            end_date: None,
            customer_id: None,
            customer_name: None,
        };
        assert!(storage
            .create_workspace_project("ws-1", &project)
            .await
            .is_err());

        let task = CreateWorkspaceTaskRequest {
            category_id: None,
            project_id: None,
            title: "Pull permits".to_string(),
            description: None,
            status: None,
            priority: None,
            estimated_hours: None,
            due_date: None,
        };
        assert!(storage.create_workspace_task("ws-1", &task).await.is_err());

        // Meanwhile the same outage leaves workspace creates working
        assert!(storage
            .create_workspace(&workspace_request("still works"))
            .await
            .is_ok());
    }

    #[actix_web::test]
    async fn test_remote_round_trip_when_server_is_up() {
        let base_url = spawn_content_server().await;
        let (storage, _dir) = storage_with(&base_url);

        let created = storage
            .create_workspace(&workspace_request("online workspace"))
            .await
            .unwrap();

        let listed = storage.get_workspaces().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, created.id);

        let patch = UpdateWorkspaceRequest {
            name: Some("renamed workspace".to_string()),
            description: None,
            color: None,
        };
        let updated = storage.update_workspace(&created.id, &patch).await.unwrap();
        assert_eq!(updated.name, "renamed workspace");
        assert!(updated.updated_at > created.updated_at);
        // Untouched fields survive the patch
        assert_eq!(updated.color, created.color);

        let category = storage
            .create_workspace_category(
                &created.id,
                &CreateWorkspaceCategoryRequest {
                    name: "Electrical".to_string(),
                    color: Some("#facc15".to_string()),
                    position: Some(2),
                },
            )
            .await
            .unwrap();
        assert_eq!(category.workspace_id, created.id);

        let categories = storage.get_workspace_categories(&created.id).await.unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].position, 2);

        storage
            .delete_workspace_category(&created.id, &category.id)
            .await
            .unwrap();
        assert!(storage
            .get_workspace_categories(&created.id)
            .await
            .unwrap()
            .is_empty());

        storage.delete_workspace(&created.id).await.unwrap();
        assert!(storage.get_workspaces().await.unwrap().is_empty());
        assert!(storage.get_workspace(&created.id).await.unwrap().is_none());
    }
}
