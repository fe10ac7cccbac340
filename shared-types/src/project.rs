use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Project status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Planning,
    Active,
    OnHold,
    Completed,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "planning",
            ProjectStatus::Active => "active",
            ProjectStatus::OnHold => "on_hold",
            ProjectStatus::Completed => "completed",
        }
    }

    /// Unknown values map to Planning rather than failing the row read
    pub fn from_str_or_default(value: &str) -> Self {
        match value {
            "active" => ProjectStatus::Active,
            "on_hold" => ProjectStatus::OnHold,
            "completed" => ProjectStatus::Completed,
            _ => ProjectStatus::Planning,
        }
    }
}

/// Priority shared by projects and tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }

    pub fn from_str_or_default(value: &str) -> Self {
        match value {
            "low" => Priority::Low,
            "high" => Priority::High,
            "urgent" => Priority::Urgent,
            _ => Priority::Medium,
        }
    }
}

/// Billable project tracked against a client
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Project {
    pub id: i64,
    pub user_id: i64,
    pub client_id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub priority: Priority,
    pub budget: Option<f64>,
    pub estimated_hours: Option<f64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export)]
pub struct CreateProjectRequest {
    pub client_id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
    pub priority: Option<Priority>,
    pub budget: Option<f64>,
    pub estimated_hours: Option<f64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export)]
pub struct UpdateProjectRequest {
    pub client_id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
    pub priority: Option<Priority>,
    pub budget: Option<f64>,
    pub estimated_hours: Option<f64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct ProjectsResponse {
    pub projects: Vec<Project>,
}
