//! Budget Tracker Frontend App
//!
//! Sidebar plus content layout; resolves the session on mount.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::HttpApi;
use crate::bootstrap::BootState;
use crate::components::{ContentArea, CreateProjectModal, NoticeBar, ProjectSidebar, UserBadge, UsernameModal};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::navigation::Page;
use crate::session::{BrowserStorage, Session};
use crate::store::AppState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let session = Session::new(BrowserStorage, config.storage_key.clone());

    // State
    let boot = RwSignal::new(BootState::Initial);
    let page = RwSignal::new(Page::current());
    let projects_version = signal(0u32);
    let items_version = signal(0u32);
    let store = Store::new(AppState::default());
    let create_project_open = RwSignal::new(false);

    // Provide context to all children
    provide_context(store);
    provide_context(HttpApi::new(config.clone()));
    provide_context(session.clone());
    provide_context(config.clone());
    provide_context(AppContext::new(
        boot,
        page,
        projects_version,
        items_version,
        store,
        config.notice_timeout_ms,
    ));

    // Initial -> Authenticated | Prompting
    let resolved = BootState::resolve(&session);
    log::info!("[APP] boot state {:?} on {:?}", resolved, page.get_untracked());
    boot.set(resolved);

    view! {
        <div class="app-layout">
            <header class="top-bar">
                <span class="brand">"Budget Tracker"</span>
                <UserBadge />
            </header>
            <div class="app-body">
                <ProjectSidebar create_project_open=create_project_open />
                <ContentArea />
            </div>
            <NoticeBar />
            <UsernameModal />
            <CreateProjectModal open=create_project_open />
        </div>
    }
}
