//! Search Bar Component
//!
//! Character name field and search button. Enter or the button search
//! immediately; typing searches after a short pause.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{use_editor, EditorAction};
use crate::store::AppStateStoreFields;

/// Whether a typed query is long enough to search on its own
pub fn should_autosearch(query: &str, min_len: usize, debounce_ms: u32) -> bool {
    debounce_ms > 0 && query.trim().chars().count() >= min_len
}

#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_editor();
    let store = ctx.store;
    let config = ctx.config();
    let debounce_ms = config.search_debounce_ms;
    let min_len = config.min_query_len;

    // Bumped on every keystroke; a pending debounce only fires if still current
    let (input_gen, set_input_gen) = signal(0u64);

    let search_now = move || {
        set_input_gen.update(|g| *g += 1);
        ctx.dispatch(EditorAction::Search(store.query().get_untracked()));
    };

    let on_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        store.query().set(value.clone());
        set_input_gen.update(|g| *g += 1);

        if !should_autosearch(&value, min_len, debounce_ms) {
            return;
        }
        let generation = input_gen.get_untracked();
        spawn_local(async move {
            TimeoutFuture::new(debounce_ms).await;
            if input_gen.get_untracked() == generation {
                ctx.dispatch(EditorAction::Search(value));
            }
        });
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        // Enter would otherwise submit the enclosing list form
        if ev.key() == "Enter" {
            ev.prevent_default();
            search_now();
        }
    };

    let searching = move || store.status().with(|s| *s == crate::store::EditorStatus::Searching);

    view! {
        <div class="search-bar">
            <input
                type="text"
                id="character-name"
                placeholder="Search characters..."
                autocomplete="off"
                prop:value=move || store.query().get()
                on:input=on_input
                on:keydown=on_keydown
            />
            <button
                type="button"
                id="search-btn"
                disabled=searching
                on:click=move |_| search_now()
            >
                {move || if searching() { "Searching..." } else { "Search" }}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_autosearch() {
        assert!(should_autosearch("ma", 2, 300));
        assert!(!should_autosearch(" m ", 2, 300));
        assert!(!should_autosearch("mario", 2, 0));
        assert!(should_autosearch("é", 1, 300));
    }
}
