use actix_web::{web, HttpResponse, Result as ActixResult};
use shared_types::{
    CreateWorkspaceCategoryRequest, CreateWorkspaceProjectRequest, CreateWorkspaceRequest,
    CreateWorkspaceTaskRequest, UpdateWorkspaceCategoryRequest, UpdateWorkspaceProjectRequest,
    UpdateWorkspaceRequest, UpdateWorkspaceTaskRequest, WorkspaceCategoriesResponse,
    WorkspaceProjectsResponse, WorkspaceTasksResponse, WorkspacesResponse,
};
use std::sync::Arc;

use crate::storage::Storage;

pub async fn create_workspace(
    storage: web::Data<Arc<Storage>>,
    request: web::Json<CreateWorkspaceRequest>,
) -> ActixResult<HttpResponse> {
    let request = request.into_inner();
    request
        .validate()
        .map_err(|e| actix_web::error::ErrorBadRequest(e.to_string()))?;

    let workspace = storage
        .create_workspace(&request)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(workspace))
}

pub async fn list_workspaces(storage: web::Data<Arc<Storage>>) -> ActixResult<HttpResponse> {
    let workspaces = storage
        .get_workspaces()
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(WorkspacesResponse { workspaces }))
}

pub async fn get_workspace(
    storage: web::Data<Arc<Storage>>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let workspace = storage
        .get_workspace(&path.into_inner())
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?
        .ok_or_else(|| actix_web::error::ErrorNotFound("Workspace not found"))?;

    Ok(HttpResponse::Ok().json(workspace))
}

pub async fn update_workspace(
    storage: web::Data<Arc<Storage>>,
    path: web::Path<String>,
    request: web::Json<UpdateWorkspaceRequest>,
) -> ActixResult<HttpResponse> {
    let workspace = storage
        .update_workspace(&path.into_inner(), &request.into_inner())
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(workspace))
}

pub async fn delete_workspace(
    storage: web::Data<Arc<Storage>>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    storage
        .delete_workspace(&path.into_inner())
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}

pub async fn list_categories(
    storage: web::Data<Arc<Storage>>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let categories = storage
        .get_workspace_categories(&path.into_inner())
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(WorkspaceCategoriesResponse { categories }))
}

pub async fn create_category(
    storage: web::Data<Arc<Storage>>,
    path: web::Path<String>,
    request: web::Json<CreateWorkspaceCategoryRequest>,
) -> ActixResult<HttpResponse> {
    let request = request.into_inner();
    request
        .validate()
        .map_err(|e| actix_web::error::ErrorBadRequest(e.to_string()))?;

    let category = storage
        .create_workspace_category(&path.into_inner(), &request)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(category))
}

pub async fn update_category(
    storage: web::Data<Arc<Storage>>,
    path: web::Path<(String, String)>,
    request: web::Json<UpdateWorkspaceCategoryRequest>,
) -> ActixResult<HttpResponse> {
    let (workspace_id, category_id) = path.into_inner();

    let category = storage
        .update_workspace_category(&workspace_id, &category_id, &request.into_inner())
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(category))
}

pub async fn delete_category(
    storage: web::Data<Arc<Storage>>,
    path: web::Path<(String, String)>,
) -> ActixResult<HttpResponse> {
    let (workspace_id, category_id) = path.into_inner();

    storage
        .delete_workspace_category(&workspace_id, &category_id)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}

pub async fn list_projects(
    storage: web::Data<Arc<Storage>>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let projects = storage
        .get_workspace_projects(&path.into_inner())
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(WorkspaceProjectsResponse { projects }))
}

pub async fn create_project(
    storage: web::Data<Arc<Storage>>,
    path: web::Path<String>,
    request: web::Json<CreateWorkspaceProjectRequest>,
) -> ActixResult<HttpResponse> {
    let request = request.into_inner();
    request
        .validate()
        .map_err(|e| actix_web::error::ErrorBadRequest(e.to_string()))?;

    let project = storage
        .create_workspace_project(&path.into_inner(), &request)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(project))
}

pub async fn update_project(
    storage: web::Data<Arc<Storage>>,
    path: web::Path<(String, String)>,
    request: web::Json<UpdateWorkspaceProjectRequest>,
) -> ActixResult<HttpResponse> {
    let (workspace_id, project_id) = path.into_inner();

    let project = storage
        .update_workspace_project(&workspace_id, &project_id, &request.into_inner())
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(project))
}

pub async fn delete_project(
    storage: web::Data<Arc<Storage>>,
    path: web::Path<(String, String)>,
) -> ActixResult<HttpResponse> {
    let (workspace_id, project_id) = path.into_inner();

    storage
        .delete_workspace_project(&workspace_id, &project_id)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}

pub async fn list_tasks(
    storage: web::Data<Arc<Storage>>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let tasks = storage
        .get_workspace_tasks(&path.into_inner())
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(WorkspaceTasksResponse { tasks }))
}

pub async fn create_task(
    storage: web::Data<Arc<Storage>>,
    path: web::Path<String>,
    request: web::Json<CreateWorkspaceTaskRequest>,
) -> ActixResult<HttpResponse> {
    let request = request.into_inner();
    request
        .validate()
        .map_err(|e| actix_web::error::ErrorBadRequest(e.to_string()))?;

    let task = storage
        .create_workspace_task(&path.into_inner(), &request)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(task))
}

pub async fn update_task(
    storage: web::Data<Arc<Storage>>,
    path: web::Path<(String, String)>,
    request: web::Json<UpdateWorkspaceTaskRequest>,
) -> ActixResult<HttpResponse> {
    let (workspace_id, task_id) = path.into_inner();

    let task = storage
        .update_workspace_task(&workspace_id, &task_id, &request.into_inner())
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(task))
}

pub async fn delete_task(
    storage: web::Data<Arc<Storage>>,
    path: web::Path<(String, String)>,
) -> ActixResult<HttpResponse> {
    let (workspace_id, task_id) = path.into_inner();

    storage
        .delete_workspace_task(&workspace_id, &task_id)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}
