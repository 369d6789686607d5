//! Create Item Dialog

use leptos::prelude::*;

use super::item_fields::blank_item_form;
use super::{submit_dialog, FormError, ItemFields, Modal};
use crate::api::HttpApi;
use crate::context::use_app_context;
use crate::modals::Operation;

/// Trigger button plus dialog for adding an item to `project_id`
#[component]
pub fn CreateItemModal(project_id: u32) -> impl IntoView {
    let ctx = use_app_context();
    let api = expect_context::<HttpApi>();

    let open = RwSignal::new(false);
    let form = RwSignal::new(blank_item_form());
    let pending = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let prepared = form.with_untracked(|f| f.to_create(Some(project_id)));
        submit_dialog(ctx, api.clone(), Operation::CreateItem, prepared, pending, error, move || {
            open.set(false);
            form.set(blank_item_form());
        });
    };

    view! {
        <button type="button" class="btn btn-success" on:click=move |_| open.set(true)>
            "Create item"
        </button>
        <Modal title="Create Item" open=open on_close=Callback::new(move |_: ()| error.set(None))>
            <form class="modal-form" on:submit=on_submit>
                <ItemFields form=form />
                <FormError error=error />
                <button type="submit" class="btn btn-primary" disabled=move || pending.get()>
                    "Add item"
                </button>
            </form>
        </Modal>
    }
}
