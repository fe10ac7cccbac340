use actix_web::{web, HttpResponse, Result as ActixResult};
use shared_types::{
    ClientContactsResponse, ClientsResponse, CreateClientContactRequest, CreateClientRequest,
    UpdateClientContactRequest, UpdateClientRequest,
};
use std::sync::Arc;

use super::OwnerQuery;
use crate::storage::Storage;

pub async fn create_client(
    storage: web::Data<Arc<Storage>>,
    query: web::Query<OwnerQuery>,
    request: web::Json<CreateClientRequest>,
) -> ActixResult<HttpResponse> {
    let request = request.into_inner();
    request
        .validate()
        .map_err(|e| actix_web::error::ErrorBadRequest(e.to_string()))?;

    let client = storage
        .create_client(query.user_id, &request)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(client))
}

pub async fn list_clients(
    storage: web::Data<Arc<Storage>>,
    query: web::Query<OwnerQuery>,
) -> ActixResult<HttpResponse> {
    let clients = storage
        .get_clients(query.user_id)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(ClientsResponse { clients }))
}

pub async fn get_client(
    storage: web::Data<Arc<Storage>>,
    path: web::Path<i64>,
    query: web::Query<OwnerQuery>,
) -> ActixResult<HttpResponse> {
    let client = storage
        .get_client(path.into_inner(), query.user_id)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?
        .ok_or_else(|| actix_web::error::ErrorNotFound("Client not found"))?;

    Ok(HttpResponse::Ok().json(client))
}

pub async fn update_client(
    storage: web::Data<Arc<Storage>>,
    path: web::Path<i64>,
    query: web::Query<OwnerQuery>,
    request: web::Json<UpdateClientRequest>,
) -> ActixResult<HttpResponse> {
    let client = storage
        .update_client(path.into_inner(), query.user_id, &request.into_inner())
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?
        .ok_or_else(|| actix_web::error::ErrorNotFound("Client not found"))?;

    Ok(HttpResponse::Ok().json(client))
}

pub async fn delete_client(
    storage: web::Data<Arc<Storage>>,
    path: web::Path<i64>,
    query: web::Query<OwnerQuery>,
) -> ActixResult<HttpResponse> {
    storage
        .delete_client(path.into_inner(), query.user_id)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}

pub async fn create_contact(
    storage: web::Data<Arc<Storage>>,
    path: web::Path<i64>,
    request: web::Json<CreateClientContactRequest>,
) -> ActixResult<HttpResponse> {
    let request = request.into_inner();
    request
        .validate()
        .map_err(|e| actix_web::error::ErrorBadRequest(e.to_string()))?;

    let contact = storage
        .create_client_contact(path.into_inner(), &request)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(contact))
}

pub async fn list_contacts(
    storage: web::Data<Arc<Storage>>,
    path: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    let contacts = storage
        .get_client_contacts(path.into_inner())
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(ClientContactsResponse { contacts }))
}

pub async fn update_contact(
    storage: web::Data<Arc<Storage>>,
    path: web::Path<(i64, i64)>,
    request: web::Json<UpdateClientContactRequest>,
) -> ActixResult<HttpResponse> {
    let (client_id, contact_id) = path.into_inner();

    let contact = storage
        .update_client_contact(contact_id, client_id, &request.into_inner())
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?
        .ok_or_else(|| actix_web::error::ErrorNotFound("Contact not found"))?;

    Ok(HttpResponse::Ok().json(contact))
}

pub async fn delete_contact(
    storage: web::Data<Arc<Storage>>,
    path: web::Path<(i64, i64)>,
) -> ActixResult<HttpResponse> {
    let (client_id, contact_id) = path.into_inner();

    storage
        .delete_client_contact(contact_id, client_id)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}

pub async fn set_primary_contact(
    storage: web::Data<Arc<Storage>>,
    path: web::Path<(i64, i64)>,
) -> ActixResult<HttpResponse> {
    let (client_id, contact_id) = path.into_inner();

    let contact = storage
        .set_primary_contact(client_id, contact_id)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?
        .ok_or_else(|| actix_web::error::ErrorNotFound("Contact not found"))?;

    Ok(HttpResponse::Ok().json(contact))
}
