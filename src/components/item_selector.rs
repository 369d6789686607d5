use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpApi;
use crate::generation::Generation;
use crate::models::Item;
use crate::selector::{open_item_options, placeholder_options, SelectOption};

/// Dropdown over a remote option set
#[component]
pub fn ItemSelector(
    options: RwSignal<Vec<SelectOption>>,
    selected: RwSignal<String>,
    #[prop(into)] label: String,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-label">{label}</span>
            <select
                class="form-select"
                prop:value=move || selected.get()
                on:change=move |ev| selected.set(event_target_value(&ev))
            >
                {move || options.get().into_iter().map(|opt| view! {
                    <option value=opt.value disabled=opt.disabled>{opt.label}</option>
                }).collect_view()}
            </select>
        </label>
    }
}

/// Signals of a dialog that picks one of a project's items
#[derive(Clone, Copy)]
pub struct ItemPicker {
    pub open: RwSignal<bool>,
    pub options: RwSignal<Vec<SelectOption>>,
    pub selected: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    generation: RwSignal<Generation>,
}

impl ItemPicker {
    pub fn new() -> Self {
        Self {
            open: RwSignal::new(false),
            options: RwSignal::new(placeholder_options()),
            selected: RwSignal::new(String::new()),
            error: RwSignal::new(None),
            generation: RwSignal::new(Generation::default()),
        }
    }

    /// Fetch the items, then show the dialog
    pub fn open_for(self, api: HttpApi, project_id: u32, label: fn(&Item) -> String) {
        let ticket = self.generation.try_update(|g| g.bump()).unwrap_or_default();
        self.error.set(None);
        spawn_local(async move {
            let generation = self.generation;
            let is_current = move || generation.with_untracked(|g| g.is_current(ticket));
            let Some(opened) = open_item_options(&api, project_id, label, is_current).await else {
                return;
            };
            self.selected.set(opened.selection);
            self.options.set(opened.options);
            self.error.set(opened.error);
            self.open.set(true);
        });
    }

    /// Drop any load still in flight
    pub fn closed(self) {
        self.generation.update(|g| {
            g.bump();
        });
        self.error.set(None);
    }
}
