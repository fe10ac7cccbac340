use actix_web::{web, HttpResponse, Result as ActixResult};
use shared_types::{CreateTaskRequest, TasksResponse, UpdateTaskRequest};
use std::sync::Arc;

use super::OwnerQuery;
use crate::storage::Storage;

pub async fn create_task(
    storage: web::Data<Arc<Storage>>,
    query: web::Query<OwnerQuery>,
    request: web::Json<CreateTaskRequest>,
) -> ActixResult<HttpResponse> {
    let request = request.into_inner();
    request
        .validate()
        .map_err(|e| actix_web::error::ErrorBadRequest(e.to_string()))?;

    let task = storage
        .create_task(query.user_id, &request)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(task))
}

pub async fn list_tasks(
    storage: web::Data<Arc<Storage>>,
    query: web::Query<OwnerQuery>,
) -> ActixResult<HttpResponse> {
    let tasks = storage
        .get_tasks(query.user_id)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(TasksResponse { tasks }))
}

pub async fn get_task(
    storage: web::Data<Arc<Storage>>,
    path: web::Path<i64>,
    query: web::Query<OwnerQuery>,
) -> ActixResult<HttpResponse> {
    let task = storage
        .get_task(path.into_inner(), query.user_id)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?
        .ok_or_else(|| actix_web::error::ErrorNotFound("Task not found"))?;

    Ok(HttpResponse::Ok().json(task))
}

pub async fn update_task(
    storage: web::Data<Arc<Storage>>,
    path: web::Path<i64>,
    query: web::Query<OwnerQuery>,
    request: web::Json<UpdateTaskRequest>,
) -> ActixResult<HttpResponse> {
    let task = storage
        .update_task(path.into_inner(), query.user_id, &request.into_inner())
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?
        .ok_or_else(|| actix_web::error::ErrorNotFound("Task not found"))?;

    Ok(HttpResponse::Ok().json(task))
}

pub async fn delete_task(
    storage: web::Data<Arc<Storage>>,
    path: web::Path<i64>,
    query: web::Query<OwnerQuery>,
) -> ActixResult<HttpResponse> {
    storage
        .delete_task(path.into_inner(), query.user_id)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}
