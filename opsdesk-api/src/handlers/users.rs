use actix_web::{web, HttpResponse, Result as ActixResult};
use shared_types::{CreateUserRequest, UpdateUserRequest, UsersResponse};
use std::sync::Arc;

use crate::storage::Storage;

pub async fn create_user(
    storage: web::Data<Arc<Storage>>,
    request: web::Json<CreateUserRequest>,
) -> ActixResult<HttpResponse> {
    let request = request.into_inner();
    request
        .validate()
        .map_err(|e| actix_web::error::ErrorBadRequest(e.to_string()))?;

    let user = storage
        .create_user(&request)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(user))
}

pub async fn list_users(storage: web::Data<Arc<Storage>>) -> ActixResult<HttpResponse> {
    let users = storage
        .get_users()
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(UsersResponse { users }))
}

pub async fn get_user(
    storage: web::Data<Arc<Storage>>,
    path: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    let user = storage
        .get_user(path.into_inner())
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?
        .ok_or_else(|| actix_web::error::ErrorNotFound("User not found"))?;

    Ok(HttpResponse::Ok().json(user))
}

pub async fn update_user(
    storage: web::Data<Arc<Storage>>,
    path: web::Path<i64>,
    request: web::Json<UpdateUserRequest>,
) -> ActixResult<HttpResponse> {
    let user = storage
        .update_user(path.into_inner(), &request.into_inner())
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?
        .ok_or_else(|| actix_web::error::ErrorNotFound("User not found"))?;

    Ok(HttpResponse::Ok().json(user))
}

pub async fn delete_user(
    storage: web::Data<Arc<Storage>>,
    path: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    storage
        .delete_user(path.into_inner())
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}
