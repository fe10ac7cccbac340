use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Logged hours against a project or task
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TimeEntry {
    pub id: i64,
    pub user_id: i64,
    pub project_id: Option<i64>,
    pub task_id: Option<i64>,
    pub description: Option<String>,
    pub hours: f64,
    pub entry_date: String,
    pub billable: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export)]
pub struct CreateTimeEntryRequest {
    pub project_id: Option<i64>,
    pub task_id: Option<i64>,
    pub description: Option<String>,
    pub hours: f64,
    pub entry_date: String,
    pub billable: Option<bool>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export)]
pub struct UpdateTimeEntryRequest {
    pub project_id: Option<i64>,
    pub task_id: Option<i64>,
    pub description: Option<String>,
    pub hours: Option<f64>,
    pub entry_date: Option<String>,
    pub billable: Option<bool>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct TimeEntriesResponse {
    pub time_entries: Vec<TimeEntry>,
}
