//! Status Banner Component
//!
//! Shows in-flight and failed network operations.

use leptos::prelude::*;

use crate::context::{use_editor, EditorAction};
use crate::store::AppStateStoreFields;

#[component]
pub fn StatusBanner() -> impl IntoView {
    let ctx = use_editor();
    let store = ctx.store;

    let status = move || store.status().get();

    view! {
        {move || {
            let status = status();
            status.message().map(|message| {
                let class = if status.is_error() { "status-banner error" } else { "status-banner" };
                let dismissable = !status.is_busy();
                view! {
                    <div class=class role="status">
                        <span class="status-text">{message}</span>
                        <Show when=move || dismissable>
                            <button
                                type="button"
                                class="dismiss-btn"
                                on:click=move |_| ctx.dispatch(EditorAction::DismissStatus)
                            >
                                "×"
                            </button>
                        </Show>
                    </div>
                }
            })
        }}
    }
}
