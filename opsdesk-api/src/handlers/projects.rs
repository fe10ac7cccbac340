use actix_web::{web, HttpResponse, Result as ActixResult};
use shared_types::{
    CreateProjectPartRequest, CreateProjectRequest, ProjectPartsResponse, ProjectsResponse,
    TasksResponse, UpdateProjectPartRequest, UpdateProjectRequest,
};
use std::sync::Arc;

use super::OwnerQuery;
use crate::storage::Storage;

pub async fn create_project(
    storage: web::Data<Arc<Storage>>,
    query: web::Query<OwnerQuery>,
    request: web::Json<CreateProjectRequest>,
) -> ActixResult<HttpResponse> {
    let request = request.into_inner();
    request
        .validate()
        .map_err(|e| actix_web::error::ErrorBadRequest(e.to_string()))?;

    let project = storage
        .create_project(query.user_id, &request)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(project))
}

pub async fn list_projects(
    storage: web::Data<Arc<Storage>>,
    query: web::Query<OwnerQuery>,
) -> ActixResult<HttpResponse> {
    let projects = storage
        .get_projects(query.user_id)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(ProjectsResponse { projects }))
}

pub async fn get_project(
    storage: web::Data<Arc<Storage>>,
    path: web::Path<i64>,
    query: web::Query<OwnerQuery>,
) -> ActixResult<HttpResponse> {
    let project = storage
        .get_project(path.into_inner(), query.user_id)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?
        .ok_or_else(|| actix_web::error::ErrorNotFound("Project not found"))?;

    Ok(HttpResponse::Ok().json(project))
}

pub async fn update_project(
    storage: web::Data<Arc<Storage>>,
    path: web::Path<i64>,
    query: web::Query<OwnerQuery>,
    request: web::Json<UpdateProjectRequest>,
) -> ActixResult<HttpResponse> {
    let project = storage
        .update_project(path.into_inner(), query.user_id, &request.into_inner())
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?
        .ok_or_else(|| actix_web::error::ErrorNotFound("Project not found"))?;

    Ok(HttpResponse::Ok().json(project))
}

pub async fn delete_project(
    storage: web::Data<Arc<Storage>>,
    path: web::Path<i64>,
    query: web::Query<OwnerQuery>,
) -> ActixResult<HttpResponse> {
    storage
        .delete_project(path.into_inner(), query.user_id)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}

pub async fn list_project_tasks(
    storage: web::Data<Arc<Storage>>,
    path: web::Path<i64>,
    query: web::Query<OwnerQuery>,
) -> ActixResult<HttpResponse> {
    let tasks = storage
        .get_project_tasks(path.into_inner(), query.user_id)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(TasksResponse { tasks }))
}

pub async fn create_part(
    storage: web::Data<Arc<Storage>>,
    path: web::Path<i64>,
    request: web::Json<CreateProjectPartRequest>,
) -> ActixResult<HttpResponse> {
    let request = request.into_inner();
    request
        .validate()
        .map_err(|e| actix_web::error::ErrorBadRequest(e.to_string()))?;

    let part = storage
        .create_project_part(path.into_inner(), &request)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(part))
}

pub async fn list_parts(
    storage: web::Data<Arc<Storage>>,
    path: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    let parts = storage
        .get_project_parts(path.into_inner())
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(ProjectPartsResponse { parts }))
}

pub async fn update_part(
    storage: web::Data<Arc<Storage>>,
    path: web::Path<(i64, i64)>,
    request: web::Json<UpdateProjectPartRequest>,
) -> ActixResult<HttpResponse> {
    let (project_id, part_id) = path.into_inner();

    let part = storage
        .update_project_part(part_id, project_id, &request.into_inner())
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?
        .ok_or_else(|| actix_web::error::ErrorNotFound("Part not found"))?;

    Ok(HttpResponse::Ok().json(part))
}

pub async fn delete_part(
    storage: web::Data<Arc<Storage>>,
    path: web::Path<(i64, i64)>,
) -> ActixResult<HttpResponse> {
    let (project_id, part_id) = path.into_inner();

    storage
        .delete_project_part(part_id, project_id)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}
