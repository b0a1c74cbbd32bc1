//! List Form Component
//!
//! Hidden `characters` field kept in sync with the working list, and the
//! submit button of the enclosing server-rendered form.

use leptos::prelude::*;

use crate::context::{use_editor, EditorAction};
use crate::store::AppStateStoreFields;

#[component]
pub fn ListForm() -> impl IntoView {
    let ctx = use_editor();
    let store = ctx.store;
    let via_api = ctx.config().submit_via_api;

    let form_value = move || store.editor().with(|e| e.form_value());
    let blocked = move || store.loading().get() || store.saving().get();

    let on_click = move |ev: web_sys::MouseEvent| {
        // Without API mode the browser submits the enclosing form as usual
        if via_api {
            ev.prevent_default();
            ctx.dispatch(EditorAction::Save);
        }
    };

    view! {
        <div class="list-form">
            <input type="hidden" id="characters" name="characters" prop:value=form_value />
            <p class="list-count">
                {move || {
                    let n = store.editor().with(|e| e.working_list().len());
                    format!("{} character{}", n, if n == 1 { "" } else { "s" })
                }}
            </p>
            <button type="submit" id="submit-btn" disabled=blocked on:click=on_click>
                "Save List"
            </button>
        </div>
    }
}
