use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Material or component purchased for a project
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProjectPart {
    pub id: i64,
    pub project_id: i64,
    pub name: String,
    pub quantity: f64,
    pub unit_cost: f64,
    pub supplier: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export)]
pub struct CreateProjectPartRequest {
    pub name: String,
    pub quantity: f64,
    pub unit_cost: f64,
    pub supplier: Option<String>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export)]
pub struct UpdateProjectPartRequest {
    pub name: Option<String>,
    pub quantity: Option<f64>,
    pub unit_cost: Option<f64>,
    pub supplier: Option<String>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct ProjectPartsResponse {
    pub parts: Vec<ProjectPart>,
}
