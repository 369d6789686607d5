//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::AppError;
use crate::models::Project;
use crate::projects::ProjectList;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Non-blocking message shown in the notice bar
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub level: NoticeLevel,
    pub text: String,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Sidebar entries for the current user
    pub projects: ProjectList,
    /// Visible notices, oldest first
    pub notices: Vec<Notice>,
    pub next_notice_id: u32,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Apply a project load result to the sidebar
pub fn store_apply_projects(store: &AppStore, result: Result<Vec<Project>, AppError>) -> Result<usize, AppError> {
    store.projects().write().apply(result)
}

/// Add a notice, returning its id
pub fn store_push_notice(store: &AppStore, level: NoticeLevel, text: String) -> u32 {
    let id = {
        let field = store.next_notice_id();
        let mut next = field.write();
        *next += 1;
        *next
    };
    store.notices().write().push(Notice { id, level, text });
    id
}

pub fn store_dismiss_notice(store: &AppStore, id: u32) {
    store.notices().write().retain(|n| n.id != id);
}
