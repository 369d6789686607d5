//! Modal Dialog Shell
//!
//! Overlay shared by every dialog, plus the submit flow they all use.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpApi;
use crate::context::{alert, AppContext};
use crate::error::AppError;
use crate::modals::{self, Mutation, Operation, SubmitOutcome};
use crate::store::NoticeLevel;

/// Dialog overlay. Children are rendered once and hidden while closed,
/// so form state survives a failed submit.
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    open: RwSignal<bool>,
    /// Hide the × button (first username prompt)
    #[prop(into, optional)]
    locked: Signal<bool>,
    #[prop(into, optional)] on_close: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let close = move |_| {
        open.set(false);
        if let Some(cb) = on_close {
            cb.run(());
        }
    };

    view! {
        <div class="modal-backdrop" class:show=move || open.get()>
            <div class="modal-dialog" role="dialog">
                <div class="modal-header">
                    <h5 class="modal-title">{title}</h5>
                    <Show when=move || !locked.get()>
                        <button type="button" class="modal-close" on:click=close>"×"</button>
                    </Show>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Labelled input bound to one string field
#[component]
pub fn FormField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-label">{label}</span>
            <input
                class="form-control"
                type=input_type
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </label>
    }
}

/// Inline error under a dialog form
#[component]
pub fn FormError(error: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        {move || error.get().map(|message| view! { <div class="form-error">{message}</div> })}
    }
}

/// Send a dialog's mutation and route the outcome:
/// validation → alert; rejection/failure → inline error, dialog stays open;
/// success → notice, refreshes, `on_done`.
pub fn submit_dialog(
    ctx: AppContext,
    api: HttpApi,
    operation: Operation,
    prepared: Result<Mutation, AppError>,
    pending: RwSignal<bool>,
    error: RwSignal<Option<String>>,
    on_done: impl FnOnce() + 'static,
) {
    if pending.get_untracked() {
        return;
    }
    pending.set(true);
    error.set(None);

    spawn_local(async move {
        let outcome = modals::submit(&api, operation, prepared, |op| ctx.after_mutation(op)).await;
        pending.set(false);
        match outcome {
            SubmitOutcome::Done(message) => {
                ctx.notify(NoticeLevel::Success, message);
                on_done();
            }
            SubmitOutcome::Invalid(message) => alert(&message),
            SubmitOutcome::Rejected(message) | SubmitOutcome::Failed(message) => error.set(Some(message)),
        }
    });
}
