//! Editor Context
//!
//! Shared store, config and the action dispatch table, provided via the
//! Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::config::EditorConfig;
use crate::editor::{ListEditor, ListKind};
use crate::models::CharacterId;
use crate::store::{AppState, AppStateStoreFields, AppStore};

/// Everything a row or control can ask the editor to do.
///
/// Row actions carry the character id alongside the index so a click that
/// races a re-render still lands on the right entry.
#[derive(Clone, Debug, PartialEq)]
pub enum EditorAction {
    Search(String),
    Add { index: usize, id: CharacterId },
    Remove { index: usize, id: CharacterId },
    MoveUp { index: usize, id: CharacterId },
    MoveDown { index: usize, id: CharacterId },
    MoveTo { from: usize, to: usize, id: CharacterId },
    ToggleRanking(bool),
    Prefill(String),
    Save,
    DismissStatus,
}

/// App-wide handle provided via context
#[derive(Clone, Copy)]
pub struct EditorContext {
    pub store: AppStore,
    config: StoredValue<EditorConfig>,
}

impl EditorContext {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            store: Store::new(AppState::new(config.ranked)),
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> EditorConfig {
        self.config.get_value()
    }

    pub fn dispatch(&self, action: EditorAction) {
        log::debug!(target: "dispatch", "{:?}", action);
        match action {
            EditorAction::Search(name) => self.search(name),
            EditorAction::Add { index, id } => {
                self.with_row(ListKind::SearchResults, index, id, |editor, i| {
                    editor.add_to_list(i).is_some()
                })
            }
            EditorAction::Remove { index, id } => {
                self.with_row(ListKind::WorkingList, index, id, |editor, i| {
                    editor.remove_from_list(i).is_some()
                })
            }
            EditorAction::MoveUp { index, id } => {
                self.with_row(ListKind::WorkingList, index, id, |editor, i| editor.move_up(i))
            }
            EditorAction::MoveDown { index, id } => {
                self.with_row(ListKind::WorkingList, index, id, |editor, i| editor.move_down(i))
            }
            EditorAction::MoveTo { from, to, id } => {
                self.with_row(ListKind::WorkingList, from, id, |editor, i| editor.move_to(i, to))
            }
            EditorAction::ToggleRanking(enabled) => {
                self.store.editor().update(|editor| editor.set_ranked(enabled));
            }
            EditorAction::Prefill(list_id) => self.prefill_for_edit(list_id),
            EditorAction::Save => self.save(),
            EditorAction::DismissStatus => self.store.update(|state| state.dismiss_status()),
        }
    }

    /// Run a row operation after mapping the clicked index to a live one
    fn with_row<F>(&self, kind: ListKind, index: usize, id: CharacterId, op: F)
    where
        F: FnOnce(&mut ListEditor, usize) -> bool,
    {
        self.store.editor().update(|editor| {
            apply_row_op(editor, kind, index, &id, op);
        });
    }

    fn search(&self, name: String) {
        let name = name.trim().to_string();
        if name.is_empty() {
            return;
        }
        let store = self.store;
        let config = self.config();
        let token = store.try_update(|state| state.begin_search());
        let Some(token) = token else { return };

        spawn_local(async move {
            let result = api::search_characters(&config, &name).await;
            store.update(|state| {
                state.finish_search(token, result);
            });
        });
    }

    fn prefill_for_edit(&self, list_id: String) {
        let store = self.store;
        let config = self.config();
        store.update(|state| state.begin_load());
        log::info!(target: "dispatch", "prefilling list {}", list_id);

        spawn_local(async move {
            let result = api::get_list_characters(&config, &list_id).await;
            store.update(|state| state.finish_load(result));
        });
    }

    fn save(&self) {
        let store = self.store;
        let config = self.config();
        if !config.submit_via_api {
            return;
        }
        let characters = store.editor().with_untracked(|editor| editor.form_value());
        let started = store.try_update(|state| state.begin_save()).unwrap_or(false);
        if !started {
            return;
        }

        spawn_local(async move {
            let result = api::create_list(&config, &characters).await;
            store.update(|state| state.finish_save(result));
        });
    }
}

/// Resolve a possibly stale row index, then run `op` on the live one.
///
/// Returns `None` when the row is gone, otherwise whether `op` changed anything.
fn apply_row_op<F>(editor: &mut ListEditor, kind: ListKind, index: usize, id: &CharacterId, op: F) -> Option<bool>
where
    F: FnOnce(&mut ListEditor, usize) -> bool,
{
    let Some(live) = editor.resolve(kind, index, id) else {
        log::warn!(target: "dispatch", "ignoring stale {:?} row {} ({})", kind, index, id);
        return None;
    };
    let changed = op(editor, live);
    if !changed {
        log::debug!(target: "dispatch", "no-op on {:?} row {}", kind, live);
    }
    Some(changed)
}

/// Get the editor context
pub fn use_editor() -> EditorContext {
    expect_context::<EditorContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Character;

    fn editor_with(ids: &[&str]) -> ListEditor {
        let mut editor = ListEditor::new(true);
        editor.seed(ids.iter().map(|id| Character::new(*id, id.to_uppercase())).collect());
        editor
    }

    fn ids(editor: &ListEditor) -> String {
        editor.form_value()
    }

    #[test]
    fn test_drag_from_shifted_index_moves_dragged_row() {
        let mut editor = editor_with(&["a", "b", "c"]);
        // "a" was removed after the drag started at index 2 ("c")
        editor.remove_from_list(0);

        let id = CharacterId::new("c");
        let moved = apply_row_op(&mut editor, ListKind::WorkingList, 2, &id, |e, i| e.move_to(i, 0));
        assert_eq!(moved, Some(true));
        assert_eq!(ids(&editor), "c, b");
    }

    #[test]
    fn test_drag_of_removed_row_is_ignored() {
        let mut editor = editor_with(&["a", "b", "c"]);
        editor.remove_from_list(2);

        let id = CharacterId::new("c");
        let moved = apply_row_op(&mut editor, ListKind::WorkingList, 2, &id, |e, i| e.move_to(i, 0));
        assert_eq!(moved, None);
        assert_eq!(ids(&editor), "a, b");
    }

    #[test]
    fn test_row_op_reports_boundary_no_op() {
        let mut editor = editor_with(&["a", "b"]);
        let id = CharacterId::new("a");
        let moved = apply_row_op(&mut editor, ListKind::WorkingList, 0, &id, |e, i| e.move_up(i));
        assert_eq!(moved, Some(false));
        assert_eq!(ids(&editor), "a, b");
    }
}
