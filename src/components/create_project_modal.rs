//! Create Project Dialog

use leptos::prelude::*;

use super::{submit_dialog, FormError, FormField, Modal};
use crate::api::HttpApi;
use crate::context::use_app_context;
use crate::modals::{Operation, ProjectForm};
use crate::models::PROJECT_STATUSES;

#[component]
pub fn CreateProjectModal(open: RwSignal<bool>) -> impl IntoView {
    let ctx = use_app_context();
    let api = expect_context::<HttpApi>();

    let form = RwSignal::new(ProjectForm {
        status: PROJECT_STATUSES[0].to_string(),
        ..ProjectForm::default()
    });
    let pending = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let username = ctx.boot.with_untracked(|b| b.username().map(str::to_string));
        let prepared = form.with_untracked(|f| f.to_mutation(username.as_deref()));
        submit_dialog(ctx, api.clone(), Operation::CreateProject, prepared, pending, error, move || {
            open.set(false);
            form.update(|f| {
                *f = ProjectForm {
                    status: PROJECT_STATUSES[0].to_string(),
                    ..ProjectForm::default()
                }
            });
        });
    };

    view! {
        <Modal title="Create Project" open=open on_close=Callback::new(move |_: ()| error.set(None))>
            <form class="modal-form" on:submit=on_submit>
                <FormField
                    label="Project name"
                    value=Signal::derive(move || form.with(|f| f.name.clone()))
                    on_input=move |v: String| form.update(|f| f.name = v)
                />
                <label class="form-field">
                    <span class="form-label">"Status"</span>
                    <select
                        class="form-select"
                        prop:value=move || form.with(|f| f.status.clone())
                        on:change=move |ev| form.update(|f| f.status = event_target_value(&ev))
                    >
                        {PROJECT_STATUSES.iter().map(|status| view! {
                            <option value=*status>{*status}</option>
                        }).collect_view()}
                    </select>
                </label>
                <FormField
                    label="Tag"
                    value=Signal::derive(move || form.with(|f| f.tag.clone()))
                    on_input=move |v: String| form.update(|f| f.tag = v)
                />
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
                <FormError error=error />
                <button type="submit" class="btn btn-primary" disabled=move || pending.get()>
                    "Create"
                </button>
            </form>
        </Modal>
    }
}
