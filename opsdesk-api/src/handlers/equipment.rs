use actix_web::{web, HttpResponse, Result as ActixResult};
use shared_types::{CreateEquipmentRequest, EquipmentResponse, UpdateEquipmentRequest};
use std::sync::Arc;

use super::OwnerQuery;
use crate::storage::Storage;

pub async fn create_equipment(
    storage: web::Data<Arc<Storage>>,
    query: web::Query<OwnerQuery>,
    request: web::Json<CreateEquipmentRequest>,
) -> ActixResult<HttpResponse> {
    let request = request.into_inner();
    request
        .validate()
        .map_err(|e| actix_web::error::ErrorBadRequest(e.to_string()))?;

    let equipment = storage
        .create_equipment(query.user_id, &request)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(equipment))
}

pub async fn list_equipment(
    storage: web::Data<Arc<Storage>>,
    query: web::Query<OwnerQuery>,
) -> ActixResult<HttpResponse> {
    let equipment = storage
        .get_equipment_list(query.user_id)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(EquipmentResponse { equipment }))
}

pub async fn get_equipment(
    storage: web::Data<Arc<Storage>>,
    path: web::Path<i64>,
    query: web::Query<OwnerQuery>,
) -> ActixResult<HttpResponse> {
    let equipment = storage
        .get_equipment(path.into_inner(), query.user_id)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?
        .ok_or_else(|| actix_web::error::ErrorNotFound("Equipment not found"))?;

    Ok(HttpResponse::Ok().json(equipment))
}

pub async fn update_equipment(
    storage: web::Data<Arc<Storage>>,
    path: web::Path<i64>,
    query: web::Query<OwnerQuery>,
    request: web::Json<UpdateEquipmentRequest>,
) -> ActixResult<HttpResponse> {
    let equipment = storage
        .update_equipment(path.into_inner(), query.user_id, &request.into_inner())
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?
        .ok_or_else(|| actix_web::error::ErrorNotFound("Equipment not found"))?;

    Ok(HttpResponse::Ok().json(equipment))
}

pub async fn delete_equipment(
    storage: web::Data<Arc<Storage>>,
    path: web::Path<i64>,
    query: web::Query<OwnerQuery>,
) -> ActixResult<HttpResponse> {
    storage
        .delete_equipment(path.into_inner(), query.user_id)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}
