//! Remove Item Dialog

use leptos::prelude::*;

use super::item_selector::ItemPicker;
use super::{submit_dialog, FormError, ItemSelector, Modal};
use crate::api::HttpApi;
use crate::context::use_app_context;
use crate::modals::{remove_item, Operation};
use crate::selector::name_only;

#[component]
pub fn RemoveItemModal(project_id: u32) -> impl IntoView {
    let ctx = use_app_context();
    let api = expect_context::<HttpApi>();
    let submit_api = api.clone();

    let picker = ItemPicker::new();
    let pending = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let prepared = remove_item(&picker.selected.get_untracked());
        submit_dialog(ctx, submit_api.clone(), Operation::RemoveItem, prepared, pending, picker.error, move || {
            picker.open.set(false);
            picker.selected.set(String::new());
        });
    };

    view! {
        <button
            type="button"
            class="btn btn-danger"
            on:click=move |_| picker.open_for(api.clone(), project_id, name_only)
        >
            "Remove item"
        </button>
        <Modal title="Remove Item" open=picker.open on_close=Callback::new(move |_: ()| picker.closed())>
            <form class="modal-form" on:submit=on_submit>
                <ItemSelector label="Item to remove" options=picker.options selected=picker.selected />
                <FormError error=picker.error />
                <button type="submit" class="btn btn-danger" disabled=move || pending.get()>
                    "Remove"
                </button>
            </form>
        </Modal>
    }
}
