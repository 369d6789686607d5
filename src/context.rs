//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::bootstrap::BootState;
use crate::modals::Operation;
use crate::navigation::Page;
use crate::store::{store_dismiss_notice, store_push_notice, AppStore, NoticeLevel};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Session state machine
    pub boot: RwSignal<BootState>,
    /// What the content area shows
    pub page: RwSignal<Page>,
    /// Trigger to reload the sidebar - read
    pub projects_version: ReadSignal<u32>,
    /// Trigger to reload the sidebar - write
    set_projects_version: WriteSignal<u32>,
    /// Trigger to reload the project view - read
    pub items_version: ReadSignal<u32>,
    /// Trigger to reload the project view - write
    set_items_version: WriteSignal<u32>,
    store: AppStore,
    notice_timeout_ms: u32,
}

impl AppContext {
    pub fn new(
        boot: RwSignal<BootState>,
        page: RwSignal<Page>,
        projects_version: (ReadSignal<u32>, WriteSignal<u32>),
        items_version: (ReadSignal<u32>, WriteSignal<u32>),
        store: AppStore,
        notice_timeout_ms: u32,
    ) -> Self {
        Self {
            boot,
            page,
            projects_version: projects_version.0,
            set_projects_version: projects_version.1,
            items_version: items_version.0,
            set_items_version: items_version.1,
            store,
            notice_timeout_ms,
        }
    }

    /// Username of the active session, tracked
    pub fn username(&self) -> Option<String> {
        self.boot.with(|b| b.username().map(str::to_string))
    }

    /// Trigger a reload of the sidebar
    pub fn refresh_projects(&self) {
        self.set_projects_version.update(|v| *v += 1);
    }

    /// Trigger a reload of the project view
    pub fn refresh_items(&self) {
        self.set_items_version.update(|v| *v += 1);
    }

    /// Refreshes owed after a successful mutation
    pub fn after_mutation(&self, operation: Operation) {
        self.refresh_projects();
        if operation.refreshes_items() {
            self.refresh_items();
        }
    }

    /// Show a non-blocking notice that dismisses itself
    pub fn notify(&self, level: NoticeLevel, text: impl Into<String>) {
        let store = self.store;
        let id = store_push_notice(&store, level, text.into());
        Timeout::new(self.notice_timeout_ms, move || store_dismiss_notice(&store, id)).forget();
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Blocking message via the browser's alert dialog
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
