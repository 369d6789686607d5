//! REST API Bindings
//!
//! Frontend bindings to the budget backend, organized by domain.

mod http;

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::AppError;
use crate::models::{Item, ItemChanges, NewItem, NewProject, Project};

pub use http::HttpApi;

/// Same set `encodeURIComponent` escapes
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Backend operations used by the UI
#[async_trait(?Send)]
pub trait BudgetApi {
    // ========================
    // Projects
    // ========================

    async fn user_projects(&self, username: &str) -> Result<Vec<Project>, AppError>;

    async fn create_project(&self, project: &NewProject) -> Result<(), AppError>;

    async fn net_position(&self, project_id: u32, split_monthly: bool) -> Result<f64, AppError>;

    // ========================
    // Items
    // ========================

    async fn project_items(&self, project_id: u32) -> Result<Vec<Item>, AppError>;

    async fn create_item(&self, item: &NewItem) -> Result<(), AppError>;

    async fn update_item(&self, item_id: u32, changes: &ItemChanges) -> Result<(), AppError>;

    async fn delete_item(&self, item_id: u32) -> Result<(), AppError>;
}

// ========================
// Endpoint Paths
// ========================

pub const PROJECTS_PATH: &str = "/api/projects";
pub const ITEMS_PATH: &str = "/api/items";

pub fn user_projects_path(username: &str) -> String {
    format!("/api/user_projects?username={}", utf8_percent_encode(username, QUERY_VALUE))
}

pub fn project_items_path(project_id: u32) -> String {
    format!("/api/project_items?projectId={}", project_id)
}

pub fn item_path(item_id: u32) -> String {
    format!("{}/{}", ITEMS_PATH, item_id)
}

pub fn net_position_path(project_id: u32, split_monthly: bool) -> String {
    format!("/api/net_position?projectId={}&splitMonthly={}", project_id, split_monthly)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_is_uri_component_encoded() {
        assert_eq!(user_projects_path("alice"), "/api/user_projects?username=alice");
        assert_eq!(
            user_projects_path("Ann & Bo/QA?"),
            "/api/user_projects?username=Ann%20%26%20Bo%2FQA%3F"
        );
        assert_eq!(user_projects_path("o'neil.(x)"), "/api/user_projects?username=o'neil.(x)");
    }

    #[test]
    fn test_item_paths() {
        assert_eq!(item_path(42), "/api/items/42");
        assert_eq!(project_items_path(9), "/api/project_items?projectId=9");
        assert_eq!(net_position_path(9, true), "/api/net_position?projectId=9&splitMonthly=true");
    }
}
