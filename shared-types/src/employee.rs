use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Employee record; departments are the distinct `department` values
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub department: Option<String>,
    pub title: Option<String>,
    pub hourly_rate: Option<f64>,
    pub is_active: bool,
    pub hired_on: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export)]
pub struct CreateEmployeeRequest {
    pub name: String,
    pub email: String,
    pub department: Option<String>,
    pub title: Option<String>,
    pub hourly_rate: Option<f64>,
    pub hired_on: Option<String>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export)]
pub struct UpdateEmployeeRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub title: Option<String>,
    pub hourly_rate: Option<f64>,
    pub is_active: Option<bool>,
    pub hired_on: Option<String>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct EmployeesResponse {
    pub employees: Vec<Employee>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct DepartmentsResponse {
    pub departments: Vec<String>,
}
