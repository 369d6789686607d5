use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpApi;
use crate::context::{alert, use_app_context};
use crate::generation::{latest, Generation};
use crate::navigation::{BrowserNavigator, Page};
use crate::projects::load_projects;
use crate::store::{store_apply_projects, use_app_store, AppStateStoreFields, NoticeLevel};

pub const LOAD_PROJECTS_FAILED: &str = "Could not load your projects. Showing the last known list.";

#[component]
pub fn ProjectSidebar(create_project_open: RwSignal<bool>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let api = expect_context::<HttpApi>();
    let generation = RwSignal::new(Generation::default());

    // Reload whenever the session changes or a refresh is requested
    Effect::new(move |_| {
        let trigger = ctx.projects_version.get();
        let Some(username) = ctx.username() else {
            return;
        };
        log::debug!("[Sidebar] loading projects for {}, trigger={}", username, trigger);
        let ticket = generation.try_update(|g| g.bump()).unwrap_or_default();
        let api = api.clone();
        spawn_local(async move {
            let is_current = move || generation.with_untracked(|g| g.is_current(ticket));
            // a slower load for a previous user must not win
            let Some(result) = latest(load_projects(&api, &username), is_current).await else {
                return;
            };
            if store_apply_projects(&store, result).is_err() {
                ctx.notify(NoticeLevel::Error, LOAD_PROJECTS_FAILED);
            }
        });
    });

    let show_overview = move |_| {
        ctx.page.set(Page::Overview);
        if ctx.username().is_some() {
            ctx.refresh_projects();
        } else {
            alert("Please set your username first.");
        }
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar-item overview-link" on:click=show_overview>"Overview"</div>
            <div class="sidebar-header">
                <h3>"Projects"</h3>
                <button
                    class="add-project-btn"
                    title="Create project"
                    on:click=move |_| create_project_open.set(true)
                >
                    "+"
                </button>
            </div>
            <div id="projects-list">
                <For
                    each=move || store.projects().get().entries().to_vec()
                    key=|entry| entry.id
                    children=move |entry| {
                        let is_active = move || ctx.page.get() == Page::Project(entry.id);
                        let target = entry.clone();
                        view! {
                            <div
                                class=move || if is_active() { "sidebar-item mb-2 active" } else { "sidebar-item mb-2" }
                                on:click=move |_| target.open(&BrowserNavigator)
                            >
                                {entry.label}
                            </div>
                        }
                    }
                />
                <Show when=move || store.projects().with(|p| p.is_empty()) && ctx.username().is_some()>
                    <p class="sidebar-empty">"No projects yet"</p>
                </Show>
            </div>
        </aside>
    }
}
