//! Character Panel Component
//!
//! Renders either the search results or the working list through the shared
//! `CharacterRow` template. In ranking mode the working list also supports
//! drag reordering via leptos-dragdrop.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::components::{CharacterRow, DropZone};
use crate::context::{use_editor, EditorAction};
use crate::editor::{ListKind, RowModel};
use crate::store::AppStateStoreFields;

/// DOM id of each panel's container
fn container_id(kind: ListKind) -> &'static str {
    match kind {
        ListKind::SearchResults => "search-results",
        ListKind::WorkingList => "character-list",
    }
}

fn empty_text(kind: ListKind) -> &'static str {
    match kind {
        ListKind::SearchResults => "No results yet. Search for a character above.",
        ListKind::WorkingList => "Your list is empty.",
    }
}

/// Only the working list can be dragged into a new order
fn reorderable(kind: ListKind) -> bool {
    kind == ListKind::WorkingList
}

/// Key over every field that changes the row's markup
fn row_key(row: &RowModel) -> (usize, String, Option<(usize, bool, bool)>) {
    (
        row.index,
        row.character.id.to_string(),
        row.rank.map(|r| (r.rank, r.can_move_up, r.can_move_down)),
    )
}

#[component]
pub fn CharacterPanel(kind: ListKind) -> impl IntoView {
    let ctx = use_editor();
    let store = ctx.store;

    let dnd = reorderable(kind).then(create_dnd_signals);
    if let Some(dnd) = dnd {
        bind_global_mouseup(dnd, move |from, to| {
            let id = store
                .editor()
                .with_untracked(|editor| editor.working_list().get(from).map(|c| c.id.clone()));
            match id {
                Some(id) => {
                    log::debug!(target: "dnd", "drop row {} at {}", from, to);
                    ctx.dispatch(EditorAction::MoveTo { from, to, id });
                }
                None => log::warn!(target: "dnd", "drag source {} is gone", from),
            }
        });
    }

    let rows = move || store.editor().with(|editor| editor.rows(kind));
    let draggable = move || dnd.is_some() && store.editor().with(|e| e.is_ranked());
    let row_count = move || store.editor().with(|editor| match kind {
        ListKind::SearchResults => editor.search_results().len(),
        ListKind::WorkingList => editor.working_list().len(),
    });

    view! {
        <div id=container_id(kind) class="character-panel">
            <Show when=move || row_count() == 0>
                <p class="panel-empty">{empty_text(kind)}</p>
            </Show>

            {dnd.map(|dnd| view! {
                <Show when=draggable>
                    <DropZone dnd=dnd gap=0 />
                </Show>
            })}

            <For
                each=rows
                key=row_key
                children=move |row| {
                    let Some(dnd) = dnd else {
                        return view! {
                            <div class="character-row-wrapper">
                                <CharacterRow row=row />
                            </div>
                        }
                        .into_any();
                    };
                    let index = row.index;

                    let on_mousedown = make_on_mousedown(dnd, index);
                    let on_mouseenter = make_on_row_mouseenter(dnd, index);
                    let on_mouseleave = make_on_mouseleave(dnd);

                    let row_class = move || {
                        let mut c = String::from("character-row-wrapper");
                        if dnd.dragging_read.get() == Some(index) { c.push_str(" dragging"); }
                        if dnd.drop_target_read.get() == Some(DropTarget::Row(index)) { c.push_str(" drop-target"); }
                        c
                    };

                    view! {
                        <div
                            class=row_class
                            on:mousedown=move |ev| if draggable() { on_mousedown(ev) }
                            on:mouseenter=on_mouseenter
                            on:mouseleave=on_mouseleave
                        >
                            <CharacterRow row=row />
                        </div>

                        <Show when=draggable>
                            <DropZone dnd=dnd gap={index + 1} />
                        </Show>
                    }
                    .into_any()
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_working_list_is_reorderable() {
        assert!(reorderable(ListKind::WorkingList));
        assert!(!reorderable(ListKind::SearchResults));
    }

    #[test]
    fn test_container_ids() {
        assert_eq!(container_id(ListKind::SearchResults), "search-results");
        assert_eq!(container_id(ListKind::WorkingList), "character-list");
    }

    #[test]
    fn test_drop_gap_after_source_lands_on_previous_row() {
        // Gap 3 sits before row 3; dragging row 0 there puts it at index 2
        assert_eq!(DropTarget::Slot(3).destination(0), 2);
        assert_eq!(DropTarget::Slot(0).destination(2), 0);
    }
}
