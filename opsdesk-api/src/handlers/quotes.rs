use actix_web::{web, HttpResponse, Result as ActixResult};
use shared_types::{CreateQuoteRequest, QuotesResponse, UpdateQuoteRequest};
use std::sync::Arc;

use super::OwnerQuery;
use crate::storage::Storage;

pub async fn create_quote(
    storage: web::Data<Arc<Storage>>,
    query: web::Query<OwnerQuery>,
    request: web::Json<CreateQuoteRequest>,
) -> ActixResult<HttpResponse> {
    let request = request.into_inner();
    request
        .validate()
        .map_err(|e| actix_web::error::ErrorBadRequest(e.to_string()))?;

    let quote = storage
        .create_quote(query.user_id, &request)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(quote))
}

pub async fn list_quotes(
    storage: web::Data<Arc<Storage>>,
    query: web::Query<OwnerQuery>,
) -> ActixResult<HttpResponse> {
    let quotes = storage
        .get_quotes(query.user_id)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(QuotesResponse { quotes }))
}

pub async fn get_quote(
    storage: web::Data<Arc<Storage>>,
    path: web::Path<i64>,
    query: web::Query<OwnerQuery>,
) -> ActixResult<HttpResponse> {
    let quote = storage
        .get_quote(path.into_inner(), query.user_id)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?
        .ok_or_else(|| actix_web::error::ErrorNotFound("Quote not found"))?;

    Ok(HttpResponse::Ok().json(quote))
}

pub async fn update_quote(
    storage: web::Data<Arc<Storage>>,
    path: web::Path<i64>,
    query: web::Query<OwnerQuery>,
    request: web::Json<UpdateQuoteRequest>,
) -> ActixResult<HttpResponse> {
    let quote = storage
        .update_quote(path.into_inner(), query.user_id, &request.into_inner())
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?
        .ok_or_else(|| actix_web::error::ErrorNotFound("Quote not found"))?;

    Ok(HttpResponse::Ok().json(quote))
}

pub async fn delete_quote(
    storage: web::Data<Arc<Storage>>,
    path: web::Path<i64>,
    query: web::Query<OwnerQuery>,
) -> ActixResult<HttpResponse> {
    storage
        .delete_quote(path.into_inner(), query.user_id)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}
