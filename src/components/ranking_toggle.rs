//! Ranking Toggle Component

use leptos::prelude::*;

use crate::context::{use_editor, EditorAction};
use crate::store::AppStateStoreFields;

/// `ranked` checkbox; submitted with the form and drives ranking mode
#[component]
pub fn RankingToggle() -> impl IntoView {
    let ctx = use_editor();
    let store = ctx.store;

    view! {
        <label class="ranking-toggle">
            <input
                type="checkbox"
                id="ranked"
                name="ranked"
                prop:checked=move || store.editor().with(|e| e.is_ranked())
                on:change=move |ev| ctx.dispatch(EditorAction::ToggleRanking(event_target_checked(&ev)))
            />
            "Ranked list"
        </label>
    }
}
