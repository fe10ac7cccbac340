use actix_web::{web, HttpResponse, Result as ActixResult};
use shared_types::{
    CreateInvoiceRequest, InvoicesResponse, MarkInvoiceSyncedRequest, UpdateInvoiceRequest,
};
use std::sync::Arc;
use tracing::info;

use super::OwnerQuery;
use crate::storage::Storage;

pub async fn create_invoice(
    storage: web::Data<Arc<Storage>>,
    query: web::Query<OwnerQuery>,
    request: web::Json<CreateInvoiceRequest>,
) -> ActixResult<HttpResponse> {
    let request = request.into_inner();
    request
        .validate()
        .map_err(|e| actix_web::error::ErrorBadRequest(e.to_string()))?;

    let invoice = storage
        .create_invoice(query.user_id, &request)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(invoice))
}

pub async fn list_invoices(
    storage: web::Data<Arc<Storage>>,
    query: web::Query<OwnerQuery>,
) -> ActixResult<HttpResponse> {
    let invoices = storage
        .get_invoices(query.user_id)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(InvoicesResponse { invoices }))
}

pub async fn get_invoice(
    storage: web::Data<Arc<Storage>>,
    path: web::Path<i64>,
    query: web::Query<OwnerQuery>,
) -> ActixResult<HttpResponse> {
    let invoice = storage
        .get_invoice(path.into_inner(), query.user_id)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?
        .ok_or_else(|| actix_web::error::ErrorNotFound("Invoice not found"))?;

    Ok(HttpResponse::Ok().json(invoice))
}

pub async fn update_invoice(
    storage: web::Data<Arc<Storage>>,
    path: web::Path<i64>,
    query: web::Query<OwnerQuery>,
    request: web::Json<UpdateInvoiceRequest>,
) -> ActixResult<HttpResponse> {
    let invoice = storage
        .update_invoice(path.into_inner(), query.user_id, &request.into_inner())
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?
        .ok_or_else(|| actix_web::error::ErrorNotFound("Invoice not found"))?;

    Ok(HttpResponse::Ok().json(invoice))
}

pub async fn mark_invoice_synced(
    storage: web::Data<Arc<Storage>>,
    path: web::Path<i64>,
    query: web::Query<OwnerQuery>,
    request: web::Json<MarkInvoiceSyncedRequest>,
) -> ActixResult<HttpResponse> {
    let invoice_id = path.into_inner();

    let invoice = storage
        .mark_invoice_synced(invoice_id, query.user_id, &request.quickbooks_id)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?
        .ok_or_else(|| actix_web::error::ErrorNotFound("Invoice not found"))?;

    info!(
        "Invoice {} linked to QuickBooks record {}",
        invoice_id, request.quickbooks_id
    );

    Ok(HttpResponse::Ok().json(invoice))
}

pub async fn delete_invoice(
    storage: web::Data<Arc<Storage>>,
    path: web::Path<i64>,
    query: web::Query<OwnerQuery>,
) -> ActixResult<HttpResponse> {
    storage
        .delete_invoice(path.into_inner(), query.user_id)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}
