//! Frontend Models
//!
//! Data structures matching backend payloads.

use serde::{Deserialize, Serialize};

/// Item type options (value, label)
pub const ITEM_TYPES: &[(&str, &str)] = &[
    ("budget", "Budget"),
    ("cost", "Cost"),
];

/// Project status options; the backend defaults to "Pending"
pub const PROJECT_STATUSES: &[&str] = &["Pending", "Active", "On Hold", "Completed"];

/// Project as returned by the list endpoint. Only `id` and `name` are guaranteed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub name: String,
    pub status: Option<String>,
    pub tag: Option<String>,
    #[serde(rename = "startDate", alias = "start_date")]
    pub start_date: Option<String>,
    #[serde(rename = "endDate", alias = "end_date")]
    pub end_date: Option<String>,
    pub username: Option<String>,
}

/// Budget or cost line of a project
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub project_id: Option<u32>,
    #[serde(alias = "item_name")]
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    pub amount: Option<i64>,
    pub category: Option<String>,
    pub item_tag: Option<String>,
    #[serde(rename = "startDate", alias = "start_date")]
    pub start_date: Option<String>,
    #[serde(rename = "endDate", alias = "end_date")]
    pub end_date: Option<String>,
}

// ========================
// Request Bodies
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProject {
    pub name: String,
    pub status: String,
    pub tag: String,
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewItem {
    pub project_id: u32,
    pub item_name: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub amount: i64,
    pub category: String,
    pub item_tag: String,
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemChanges {
    pub item_name: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub amount: i64,
    pub category: String,
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
}

// ========================
// Response Envelopes
// ========================

#[derive(Debug, Deserialize)]
pub struct ProjectsResponse {
    pub projects: Vec<Project>,
}

#[derive(Debug, Deserialize)]
pub struct ItemsResponse {
    pub items: Vec<Item>,
}

#[derive(Debug, Deserialize)]
pub struct NetPositionResponse {
    pub net_position: f64,
}
