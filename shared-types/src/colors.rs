use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Display color assigned to a workspace category. The backing store is a
/// single flat JSON document (name -> hex), rewritten in full on every
/// change.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryColor {
    pub category_name: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StatusColor {
    pub status: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriorityColor {
    pub priority: String,
    pub color: String,
}

/// Sort position of a category within its workspace
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryPosition {
    pub category_name: String,
    pub position: i64,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export)]
pub struct SetCategoryColorRequest {
    pub category_name: String,
    pub color: String,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export)]
pub struct SetStatusColorRequest {
    pub status: String,
    pub color: String,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export)]
pub struct SetPriorityColorRequest {
    pub priority: String,
    pub color: String,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export)]
pub struct SetCategoryPositionRequest {
    pub category_name: String,
    pub position: i64,
}

#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct CategoryColorsResponse {
    pub colors: Vec<CategoryColor>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct StatusColorsResponse {
    pub colors: Vec<StatusColor>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct PriorityColorsResponse {
    pub colors: Vec<PriorityColor>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct CategoryPositionsResponse {
    pub positions: Vec<CategoryPosition>,
}
