use actix_web::{web, HttpResponse, Result as ActixResult};
use shared_types::{
    CreateEmployeeRequest, DepartmentsResponse, EmployeesResponse, UpdateEmployeeRequest,
};
use std::sync::Arc;

use super::EmployeeListQuery;
use crate::storage::Storage;

pub async fn create_employee(
    storage: web::Data<Arc<Storage>>,
    request: web::Json<CreateEmployeeRequest>,
) -> ActixResult<HttpResponse> {
    let request = request.into_inner();
    request
        .validate()
        .map_err(|e| actix_web::error::ErrorBadRequest(e.to_string()))?;

    let employee = storage
        .create_employee(&request)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(employee))
}

pub async fn list_employees(
    storage: web::Data<Arc<Storage>>,
    query: web::Query<EmployeeListQuery>,
) -> ActixResult<HttpResponse> {
    let employees = storage
        .get_employees(query.include_inactive)
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(EmployeesResponse { employees }))
}

pub async fn list_departments(storage: web::Data<Arc<Storage>>) -> ActixResult<HttpResponse> {
    let departments = storage
        .get_departments()
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(DepartmentsResponse { departments }))
}

pub async fn get_employee(
    storage: web::Data<Arc<Storage>>,
    path: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    let employee = storage
        .get_employee(path.into_inner())
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?
        .ok_or_else(|| actix_web::error::ErrorNotFound("Employee not found"))?;

    Ok(HttpResponse::Ok().json(employee))
}

pub async fn update_employee(
    storage: web::Data<Arc<Storage>>,
    path: web::Path<i64>,
    request: web::Json<UpdateEmployeeRequest>,
) -> ActixResult<HttpResponse> {
    let employee = storage
        .update_employee(path.into_inner(), &request.into_inner())
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?
        .ok_or_else(|| actix_web::error::ErrorNotFound("Employee not found"))?;

    Ok(HttpResponse::Ok().json(employee))
}

pub async fn delete_employee(
    storage: web::Data<Arc<Storage>>,
    path: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    storage
        .delete_employee(path.into_inner())
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}
