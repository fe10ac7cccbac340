use actix_web::{web, HttpResponse, Result as ActixResult};
use shared_types::{CreateTimeEntryRequest, TimeEntriesResponse, UpdateTimeEntryRequest};
use std::sync::Arc;

use super::OwnerQuery;
use crate::storage::Storage;

pub async fn create_time_entry(
    storage: web::Data<Arc<Storage>>,
    query: web::Query<OwnerQuery>,
    request: web::Json<CreateTimeEntryRequest>,
) -> ActixResult<HttpResponse> {
    let request = request.into_inner();
    request
        .validate()
        .map_err(|e| actix_web::error::ErrorBadRequest(e.to_string()))?;

    let entry = storage
        .create_time_entry(query.user_id, &request)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(entry))
}

pub async fn list_time_entries(
    storage: web::Data<Arc<Storage>>,
    query: web::Query<OwnerQuery>,
) -> ActixResult<HttpResponse> {
    let time_entries = storage
        .get_time_entries(query.user_id)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(TimeEntriesResponse { time_entries }))
}

pub async fn get_time_entry(
    storage: web::Data<Arc<Storage>>,
    path: web::Path<i64>,
    query: web::Query<OwnerQuery>,
) -> ActixResult<HttpResponse> {
    let entry = storage
        .get_time_entry(path.into_inner(), query.user_id)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?
        .ok_or_else(|| actix_web::error::ErrorNotFound("Time entry not found"))?;

    Ok(HttpResponse::Ok().json(entry))
}

pub async fn update_time_entry(
    storage: web::Data<Arc<Storage>>,
    path: web::Path<i64>,
    query: web::Query<OwnerQuery>,
    request: web::Json<UpdateTimeEntryRequest>,
) -> ActixResult<HttpResponse> {
    let entry = storage
        .update_time_entry(path.into_inner(), query.user_id, &request.into_inner())
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?
        .ok_or_else(|| actix_web::error::ErrorNotFound("Time entry not found"))?;

    Ok(HttpResponse::Ok().json(entry))
}

pub async fn delete_time_entry(
    storage: web::Data<Arc<Storage>>,
    path: web::Path<i64>,
    query: web::Query<OwnerQuery>,
) -> ActixResult<HttpResponse> {
    storage
        .delete_time_entry(path.into_inner(), query.user_id)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}
