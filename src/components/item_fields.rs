//! Item Form Fields
//!
//! Inputs shared by the create-item and edit-item dialogs.

use leptos::prelude::*;

use super::{FormField, TypeSelector};
use crate::modals::ItemForm;

#[component]
pub fn ItemFields(
    form: RwSignal<ItemForm>,
    /// Edit requests carry no tag
    #[prop(default = true)]
    with_tag: bool,
) -> impl IntoView {
    view! {
        <FormField
            label="Item name"
            value=Signal::derive(move || form.with(|f| f.name.clone()))
            on_input=move |v: String| form.update(|f| f.name = v)
        />
        <TypeSelector
            current_type=Signal::derive(move || form.with(|f| f.item_type.clone()))
            on_change=move |v: String| form.update(|f| f.item_type = v)
        />
        <FormField
            label="Amount"
            input_type="number"
            value=Signal::derive(move || form.with(|f| f.amount.clone()))
            on_input=move |v: String| form.update(|f| f.amount = v)
        />
        <FormField
            label="Category"
            value=Signal::derive(move || form.with(|f| f.category.clone()))
            on_input=move |v: String| form.update(|f| f.category = v)
        />
        <Show when=move || with_tag>
            <FormField
                label="Tag"
                value=Signal::derive(move || form.with(|f| f.item_tag.clone()))
                on_input=move |v: String| form.update(|f| f.item_tag = v)
            />
        </Show>
        <FormField
            label="Start date"
            input_type="date"
            value=Signal::derive(move || form.with(|f| f.start_date.clone()))
            on_input=move |v: String| form.update(|f| f.start_date = v)
        />
        <FormField
            label="End date"
            input_type="date"
            value=Signal::derive(move || form.with(|f| f.end_date.clone()))
            on_input=move |v: String| form.update(|f| f.end_date = v)
        />
    }
}

/// Blank form with the first item type preselected
pub fn blank_item_form() -> ItemForm {
    ItemForm {
        item_type: crate::models::ITEM_TYPES[0].0.to_string(),
        ..ItemForm::default()
    }
}
