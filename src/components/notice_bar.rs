use leptos::prelude::*;

use crate::store::{store_dismiss_notice, use_app_store, AppStateStoreFields, NoticeLevel};

/// Stack of non-blocking notices
#[component]
pub fn NoticeBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="notice-bar" aria-live="polite">
            <For
                each=move || store.notices().get()
                key=|notice| notice.id
                children=move |notice| {
                    let class = match notice.level {
                        NoticeLevel::Success => "notice notice-success",
                        NoticeLevel::Error => "notice notice-error",
                    };
                    let id = notice.id;
                    view! {
                        <div class=class>
                            <span>{notice.text}</span>
                            <button class="notice-close" on:click=move |_| store_dismiss_notice(&store, id)>"×"</button>
                        </div>
                    }
                }
            />
        </div>
    }
}
