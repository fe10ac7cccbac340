use actix_web::{web, HttpResponse, Result as ActixResult};
use shared_types::{
    CategoryColorsResponse, CategoryPositionsResponse, PriorityColorsResponse,
    SetCategoryColorRequest, SetCategoryPositionRequest, SetPriorityColorRequest,
    SetStatusColorRequest, StatusColorsResponse,
};
use std::sync::Arc;

use crate::storage::Storage;

pub async fn get_category_colors(storage: web::Data<Arc<Storage>>) -> ActixResult<HttpResponse> {
    let colors = storage
        .get_category_colors()
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(CategoryColorsResponse { colors }))
}

pub async fn set_category_color(
    storage: web::Data<Arc<Storage>>,
    request: web::Json<SetCategoryColorRequest>,
) -> ActixResult<HttpResponse> {
    let request = request.into_inner();
    request
        .validate()
        .map_err(|e| actix_web::error::ErrorBadRequest(e.to_string()))?;

    storage
        .set_category_color(&request.category_name, &request.color)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}

pub async fn get_status_colors(storage: web::Data<Arc<Storage>>) -> ActixResult<HttpResponse> {
    let colors = storage
        .get_status_colors()
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(StatusColorsResponse { colors }))
}

pub async fn set_status_color(
    storage: web::Data<Arc<Storage>>,
    request: web::Json<SetStatusColorRequest>,
) -> ActixResult<HttpResponse> {
    let request = request.into_inner();
    request
        .validate()
        .map_err(|e| actix_web::error::ErrorBadRequest(e.to_string()))?;

    storage
        .set_status_color(&request.status, &request.color)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}

pub async fn get_priority_colors(storage: web::Data<Arc<Storage>>) -> ActixResult<HttpResponse> {
    let colors = storage
        .get_priority_colors()
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(PriorityColorsResponse { colors }))
}

pub async fn set_priority_color(
    storage: web::Data<Arc<Storage>>,
    request: web::Json<SetPriorityColorRequest>,
) -> ActixResult<HttpResponse> {
    let request = request.into_inner();
    request
        .validate()
        .map_err(|e| actix_web::error::ErrorBadRequest(e.to_string()))?;

    storage
        .set_priority_color(&request.priority, &request.color)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}

pub async fn get_category_positions(
    storage: web::Data<Arc<Storage>>,
) -> ActixResult<HttpResponse> {
    let positions = storage
        .get_category_positions()
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(CategoryPositionsResponse { positions }))
}

pub async fn set_category_position(
    storage: web::Data<Arc<Storage>>,
    request: web::Json<SetCategoryPositionRequest>,
) -> ActixResult<HttpResponse> {
    let request = request.into_inner();
    request
        .validate()
        .map_err(|e| actix_web::error::ErrorBadRequest(e.to_string()))?;

    storage
        .set_category_position(&request.category_name, request.position)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}
