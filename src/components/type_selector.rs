//! Type Selector Component
//!
//! Budget/cost toggle buttons for item forms.

use leptos::prelude::*;

use crate::models::ITEM_TYPES;

/// Type selector buttons for items
#[component]
pub fn TypeSelector(
    #[prop(into)] current_type: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="type-selector">
            {ITEM_TYPES.iter().map(|(value, label)| {
                let val = value.to_string();
                let val_clone = val.clone();
                let is_selected = move || current_type.get() == val;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "type-btn active" } else { "type-btn" }
                        on:click=move |_| on_change.run(val_clone.clone())
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
