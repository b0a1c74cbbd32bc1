//! List Editor App
//!
//! Search panel on one side, the working list on the other, and the form
//! controls that feed the server-rendered submission form.

use leptos::prelude::*;

use crate::components::{CharacterPanel, ListForm, RankingToggle, SearchBar, StatusBanner};
use crate::config::EditorConfig;
use crate::context::{EditorAction, EditorContext};
use crate::editor::ListKind;

#[component]
pub fn App(config: EditorConfig) -> impl IntoView {
    let edit_list_id = config.edit_list_id.clone();
    let ctx = EditorContext::new(config);

    // Provide context to all children
    provide_context(ctx);

    // Seed the working list when editing an existing list
    Effect::new(move |_| {
        if let Some(list_id) = edit_list_id.clone() {
            ctx.dispatch(EditorAction::Prefill(list_id));
        }
    });

    view! {
        <div class="list-editor">
            <StatusBanner />

            <section class="search-column">
                <h2>"Find Characters"</h2>
                <SearchBar />
                <CharacterPanel kind={ListKind::SearchResults} />
            </section>

            <section class="list-column">
                <h2>"Your List"</h2>
                <RankingToggle />
                <CharacterPanel kind={ListKind::WorkingList} />
                <ListForm />
            </section>
        </div>
    }
}
