//! Content Area
//!
//! Overview text, or a project's items, net position and item dialogs.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{CreateItemModal, EditItemModal, RemoveItemModal};
use crate::api::{BudgetApi, HttpApi};
use crate::context::use_app_context;
use crate::generation::{latest, Generation};
use crate::models::Item;
use crate::navigation::Page;
use crate::store::{use_app_store, AppStateStoreFields, NoticeLevel};

#[component]
pub fn ContentArea() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <main id="content" class="main-content">
            {move || match ctx.page.get() {
                Page::Overview => view! { <Overview /> }.into_any(),
                Page::Project(id) => view! { <ProjectView project_id=id /> }.into_any(),
            }}
        </main>
    }
}

#[component]
pub fn Overview() -> impl IntoView {
    view! {
        <h1>"Overview"</h1>
        <p>"Welcome to your project overview. Please select a project from the sidebar."</p>
    }
}

/// Items and net position of one project. The item dialogs only exist here.
#[component]
pub fn ProjectView(project_id: u32) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let api = expect_context::<HttpApi>();

    // Sidebar already holds the name; fall back to the id before it loads
    let title = move || {
        store
            .projects()
            .with(|p| p.entries().iter().find(|e| e.id == project_id).map(|e| e.label.clone()))
            .unwrap_or_else(|| format!("Project #{}", project_id))
    };

    let (items, set_items) = signal(Vec::<Item>::new());
    let (net_position, set_net_position) = signal(None::<f64>);
    let (split_monthly, set_split_monthly) = signal(false);
    let generation = RwSignal::new(Generation::default());

    // Reload items when a mutation lands
    Effect::new(move |_| {
        let trigger = ctx.items_version.get();
        let split = split_monthly.get();
        log::debug!("[ProjectView] loading project {}, trigger={}", project_id, trigger);
        let ticket = generation.try_update(|g| g.bump()).unwrap_or_default();
        let api = api.clone();
        spawn_local(async move {
            let is_current = move || generation.with_untracked(|g| g.is_current(ticket));
            match latest(api.project_items(project_id), is_current).await {
                Some(Ok(loaded)) => set_items.set(loaded),
                Some(Err(e)) => {
                    log::error!("error fetching items: {}", e);
                    ctx.notify(NoticeLevel::Error, "Failed to load items.");
                }
                None => return,
            }
            match latest(api.net_position(project_id, split), is_current).await {
                Some(Ok(value)) => set_net_position.set(Some(value)),
                Some(Err(e)) => {
                    log::warn!("net position unavailable: {}", e);
                    set_net_position.set(None);
                    ctx.notify(NoticeLevel::Error, "Failed to load net position.");
                }
                None => {}
            }
        });
    });

    view! {
        <h1>{title}</h1>
        <div class="item-actions">
            <CreateItemModal project_id=project_id />
            <EditItemModal project_id=project_id />
            <RemoveItemModal project_id=project_id />
        </div>

        <div class="net-position">
            <span>"Net position: "</span>
            <strong>{move || net_position.get().map(format_amount).unwrap_or_else(|| "—".to_string())}</strong>
            <label class="split-toggle">
                <input
                    type="checkbox"
                    prop:checked=move || split_monthly.get()
                    on:change=move |ev| set_split_monthly.set(event_target_checked(&ev))
                />
                " Split monthly"
            </label>
        </div>

        <table class="items-table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Type"</th>
                    <th>"Amount"</th>
                    <th>"Category"</th>
                    <th>"Start"</th>
                    <th>"End"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || items.get()
                    key=|item| item.clone()
                    children=move |item| view! {
                        <tr>
                            <td>{item.name}</td>
                            <td>{item.item_type.unwrap_or_default()}</td>
                            <td class="amount">{item.amount.map(|a| a.to_string()).unwrap_or_default()}</td>
                            <td>{item.category.unwrap_or_default()}</td>
                            <td>{item.start_date.unwrap_or_default()}</td>
                            <td>{item.end_date.unwrap_or_default()}</td>
                        </tr>
                    }
                />
            </tbody>
        </table>
        <p class="item-count">{move || format!("{} items", items.get().len())}</p>
    }
}

/// Net position with two decimals
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1250.0), "1250.00");
        assert_eq!(format_amount(-3.456), "-3.46");
    }
}
