//! Username Prompt and Badge
//!
//! The prompt is open whenever the boot state is `Prompting`.

use leptos::prelude::*;

use super::{FormField, Modal};
use crate::context::{alert, use_app_context};
use crate::navigation::BrowserNavigator;
use crate::session::{BrowserStorage, Session};

#[component]
pub fn UsernameModal() -> impl IntoView {
    let ctx = use_app_context();
    let session = expect_context::<Session<BrowserStorage>>();

    let input = RwSignal::new(String::new());
    let open = RwSignal::new(ctx.boot.get_untracked().is_prompting());

    // keep the dialog in step with the state machine
    Effect::new(move |_| {
        let prompting = ctx.boot.with(|b| b.is_prompting());
        open.set(prompting);
        if prompting {
            input.set(ctx.boot.with_untracked(|b| b.username().unwrap_or_default().to_string()));
        }
    });

    // only a returning user may back out
    let locked = Signal::derive(move || ctx.boot.with(|b| b.is_prompting() && b.username().is_none()));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let next = ctx.boot.with_untracked(|b| b.submit_username(&session, &input.get_untracked()));
        match next {
            // the sidebar reloads off the new username
            Ok(state) => ctx.boot.set(state),
            Err(e) => alert(&e.to_string()),
        }
    };

    view! {
        <Modal
            title="Enter your username"
            open=open
            locked=locked
            on_close=Callback::new(move |_: ()| ctx.boot.update(|b| *b = b.dismiss_prompt()))
        >
            <form class="modal-form" on:submit=on_submit>
                <FormField
                    label="Username"
                    value=input
                    on_input=move |v: String| input.set(v)
                />
                <button type="submit" class="btn btn-primary">"Continue"</button>
            </form>
        </Modal>
    }
}

/// `User: {name}` label with logout. Clicking the label reopens the prompt.
#[component]
pub fn UserBadge() -> impl IntoView {
    let ctx = use_app_context();
    let session = expect_context::<Session<BrowserStorage>>();

    let label = move || match ctx.username() {
        Some(name) => format!("User: {}", name),
        None => "Set username".to_string(),
    };

    view! {
        <div class="user-badge">
            <span
                class="username-display"
                title="Change username"
                on:click=move |_| ctx.boot.update(|b| *b = b.reopen_prompt())
            >
                {label}
            </span>
            <button
                type="button"
                class="btn btn-link logout-btn"
                on:click=move |_| session.clear(&BrowserNavigator)
            >
                "Logout"
            </button>
        </div>
    }
}
