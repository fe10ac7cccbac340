use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentStatus {
    Available,
    Assigned,
    Maintenance,
    Retired,
}

impl EquipmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentStatus::Available => "available",
            EquipmentStatus::Assigned => "assigned",
            EquipmentStatus::Maintenance => "maintenance",
            EquipmentStatus::Retired => "retired",
        }
    }

    pub fn from_str_or_default(value: &str) -> Self {
        match value {
            "assigned" => EquipmentStatus::Assigned,
            "maintenance" => EquipmentStatus::Maintenance,
            "retired" => EquipmentStatus::Retired,
            _ => EquipmentStatus::Available,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Equipment {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub serial_number: Option<String>,
    pub status: EquipmentStatus,
    pub assigned_to: Option<i64>,
    pub notes: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export)]
pub struct CreateEquipmentRequest {
    pub name: String,
    pub serial_number: Option<String>,
    pub status: Option<EquipmentStatus>,
    pub assigned_to: Option<i64>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export)]
pub struct UpdateEquipmentRequest {
    pub name: Option<String>,
    pub serial_number: Option<String>,
    pub status: Option<EquipmentStatus>,
    pub assigned_to: Option<i64>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct EquipmentResponse {
    pub equipment: Vec<Equipment>,
}
