//! Edit Item Dialog
//!
//! Loads the project's items into the selector before showing.

use leptos::prelude::*;

use super::item_fields::blank_item_form;
use super::item_selector::ItemPicker;
use super::{submit_dialog, FormError, ItemFields, ItemSelector, Modal};
use crate::api::HttpApi;
use crate::context::use_app_context;
use crate::modals::Operation;
use crate::selector::name_with_category;

#[component]
pub fn EditItemModal(project_id: u32) -> impl IntoView {
    let ctx = use_app_context();
    let api = expect_context::<HttpApi>();
    let submit_api = api.clone();

    let picker = ItemPicker::new();
    let form = RwSignal::new(blank_item_form());
    let pending = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let prepared = form.with_untracked(|f| f.to_edit(&picker.selected.get_untracked()));
        submit_dialog(ctx, submit_api.clone(), Operation::EditItem, prepared, pending, picker.error, move || {
            picker.open.set(false);
            form.set(blank_item_form());
        });
    };

    view! {
        <button
            type="button"
            class="btn btn-warning"
            on:click=move |_| picker.open_for(api.clone(), project_id, name_with_category)
        >
            "Edit item"
        </button>
        <Modal title="Edit Item" open=picker.open on_close=Callback::new(move |_: ()| picker.closed())>
            <form class="modal-form" on:submit=on_submit>
                <ItemSelector label="Item" options=picker.options selected=picker.selected />
                <ItemFields form=form with_tag=false />
                <FormError error=picker.error />
                <button type="submit" class="btn btn-primary" disabled=move || pending.get()>
                    "Save changes"
                </button>
            </form>
        </Modal>
    }
}
