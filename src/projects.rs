//! Project List Service
//!
//! Loads a user's projects and keeps the sidebar entries in sync,
//! always replacing the whole list.

use crate::api::BudgetApi;
use crate::error::AppError;
use crate::models::Project;
use crate::navigation::{project_path, Navigator};

/// One sidebar row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarEntry {
    pub id: u32,
    pub label: String,
    pub href: String,
}

impl From<&Project> for SidebarEntry {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id,
            label: project.name.clone(),
            href: project_path(project.id),
        }
    }
}

impl SidebarEntry {
    /// Navigate to the project's page
    pub fn open(&self, navigator: &impl Navigator) {
        navigator.go_to(&self.href);
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectList {
    entries: Vec<SidebarEntry>,
}

impl ProjectList {
    pub fn entries(&self) -> &[SidebarEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace every entry with one per project
    pub fn replace(&mut self, projects: &[Project]) {
        self.entries = projects.iter().map(SidebarEntry::from).collect();
    }

    /// Apply a load result. A failure leaves the previous entries visible.
    pub fn apply(&mut self, result: Result<Vec<Project>, AppError>) -> Result<usize, AppError> {
        let projects = result?;
        self.replace(&projects);
        Ok(self.len())
    }
}

/// Fetch the projects visible to `username`
pub async fn load_projects<A: BudgetApi>(api: &A, username: &str) -> Result<Vec<Project>, AppError> {
    let projects = api.user_projects(username).await;
    match &projects {
        Ok(list) => log::info!("loaded {} projects for {}", list.len(), username),
        Err(e) => log::error!("error fetching user projects: {}", e),
    }
    projects
}
