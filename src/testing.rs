//! In-memory test doubles for storage, navigation and the backend.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use async_trait::async_trait;

use crate::api::{self, BudgetApi};
use crate::error::AppError;
use crate::models::{Item, ItemChanges, NewItem, NewProject, Project};
use crate::navigation::Navigator;
use crate::session::KeyValueStorage;

#[derive(Default)]
pub struct MemoryStorage {
    values: RefCell<HashMap<String, String>>,
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    visited: RefCell<Vec<String>>,
    reloads: Cell<usize>,
}

impl RecordingNavigator {
    pub fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }

    pub fn reloads(&self) -> usize {
        self.reloads.get()
    }
}

impl Navigator for RecordingNavigator {
    fn go_to(&self, path: &str) {
        self.visited.borrow_mut().push(path.to_string());
    }

    fn reload(&self) {
        self.reloads.set(self.reloads.get() + 1);
    }
}

pub fn project(id: u32, name: &str, username: &str) -> Project {
    Project {
        id,
        name: name.to_string(),
        status: Some("Pending".to_string()),
        tag: None,
        start_date: Some("2024-01-01".to_string()),
        end_date: Some("2024-12-31".to_string()),
        username: Some(username.to_string()),
    }
}

pub fn item(id: u32, project_id: u32, name: &str, category: &str) -> Item {
    Item {
        id,
        project_id: Some(project_id),
        name: name.to_string(),
        item_type: Some("cost".to_string()),
        amount: Some(100),
        category: Some(category.to_string()),
        item_tag: None,
        start_date: Some("2024-02-01".to_string()),
        end_date: Some("2024-02-28".to_string()),
    }
}

/// Backend double holding projects and items in memory.
/// Every call is recorded as `METHOD path`.
#[derive(Default)]
pub struct FakeApi {
    pub projects: RefCell<Vec<Project>>,
    pub items: RefCell<Vec<Item>>,
    calls: RefCell<Vec<String>>,
    fail_next: RefCell<Option<AppError>>,
}

impl FakeApi {
    pub fn with_projects(projects: Vec<Project>) -> Self {
        Self {
            projects: RefCell::new(projects),
            ..Default::default()
        }
    }

    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items: RefCell::new(items),
            ..Default::default()
        }
    }

    /// Make the next call fail with `err`
    pub fn fail_next(&self, err: AppError) {
        *self.fail_next.borrow_mut() = Some(err);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self, prefix: &str) -> usize {
        self.calls.borrow().iter().filter(|c| c.starts_with(prefix)).count()
    }

    fn record(&self, call: String) -> Result<(), AppError> {
        self.calls.borrow_mut().push(call);
        match self.fail_next.borrow_mut().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn next_id(&self) -> u32 {
        let projects = self.projects.borrow().iter().map(|p| p.id).max().unwrap_or(0);
        let items = self.items.borrow().iter().map(|i| i.id).max().unwrap_or(0);
        projects.max(items) + 1
    }
}

#[async_trait(?Send)]
impl BudgetApi for FakeApi {
    async fn user_projects(&self, username: &str) -> Result<Vec<Project>, AppError> {
        self.record(format!("GET {}", api::user_projects_path(username)))?;
        Ok(self
            .projects
            .borrow()
            .iter()
            .filter(|p| p.username.as_deref() == Some(username))
            .cloned()
            .collect())
    }

    async fn create_project(&self, new: &NewProject) -> Result<(), AppError> {
        self.record(format!("POST {}", api::PROJECTS_PATH))?;
        let id = self.next_id();
        self.projects.borrow_mut().push(Project {
            id,
            name: new.name.clone(),
            status: Some(new.status.clone()),
            tag: Some(new.tag.clone()),
            start_date: Some(new.start_date.clone()),
            end_date: Some(new.end_date.clone()),
            username: Some(new.username.clone()),
        });
        Ok(())
    }

    async fn net_position(&self, project_id: u32, split_monthly: bool) -> Result<f64, AppError> {
        self.record(format!("GET {}", api::net_position_path(project_id, split_monthly)))?;
        let total = self
            .items
            .borrow()
            .iter()
            .filter(|i| i.project_id == Some(project_id))
            .map(|i| match i.item_type.as_deref() {
                Some("budget") => i.amount.unwrap_or(0),
                Some("cost") => -i.amount.unwrap_or(0),
                _ => 0,
            })
            .sum::<i64>();
        Ok(total as f64)
    }

    async fn project_items(&self, project_id: u32) -> Result<Vec<Item>, AppError> {
        self.record(format!("GET {}", api::project_items_path(project_id)))?;
        Ok(self
            .items
            .borrow()
            .iter()
            .filter(|i| i.project_id == Some(project_id))
            .cloned()
            .collect())
    }

    async fn create_item(&self, new: &NewItem) -> Result<(), AppError> {
        self.record(format!("POST {}", api::ITEMS_PATH))?;
        let id = self.next_id();
        self.items.borrow_mut().push(Item {
            id,
            project_id: Some(new.project_id),
            name: new.item_name.clone(),
            item_type: Some(new.item_type.clone()),
            amount: Some(new.amount),
            category: Some(new.category.clone()),
            item_tag: Some(new.item_tag.clone()),
            start_date: Some(new.start_date.clone()),
            end_date: Some(new.end_date.clone()),
        });
        Ok(())
    }

    async fn update_item(&self, item_id: u32, changes: &ItemChanges) -> Result<(), AppError> {
        self.record(format!("PUT {}", api::item_path(item_id)))?;
        let mut items = self.items.borrow_mut();
        let item = items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or(AppError::Rejected { status: 404, message: Some("Item not found".into()) })?;
        item.name = changes.item_name.clone();
        item.item_type = Some(changes.item_type.clone());
        item.amount = Some(changes.amount);
        item.category = Some(changes.category.clone());
        item.start_date = Some(changes.start_date.clone());
        item.end_date = Some(changes.end_date.clone());
        Ok(())
    }

    async fn delete_item(&self, item_id: u32) -> Result<(), AppError> {
        self.record(format!("DELETE {}", api::item_path(item_id)))?;
        let mut items = self.items.borrow_mut();
        let before = items.len();
        items.retain(|i| i.id != item_id);
        if items.len() == before {
            return Err(AppError::Rejected { status: 404, message: Some("Item not found".into()) });
        }
        Ok(())
    }
}
