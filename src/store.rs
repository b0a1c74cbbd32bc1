//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use reactive_stores::Store;

use crate::editor::{ListEditor, SearchToken};
use crate::error::ApiResult;
use crate::models::{Character, ListRecord};

/// User-visible state of the last network operation
#[derive(Clone, Debug, Default, PartialEq)]
pub enum EditorStatus {
    #[default]
    Idle,
    Searching,
    SearchFailed(String),
    Loading,
    LoadFailed(String),
    Saving,
    Saved(String),
    SaveFailed(String),
}

impl EditorStatus {
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            EditorStatus::SearchFailed(_) | EditorStatus::LoadFailed(_) | EditorStatus::SaveFailed(_)
        )
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, EditorStatus::Searching | EditorStatus::Loading | EditorStatus::Saving)
    }

    /// Banner text; `None` when nothing should be shown
    pub fn message(&self) -> Option<String> {
        match self {
            EditorStatus::Idle => None,
            EditorStatus::Searching => Some("Searching...".to_string()),
            EditorStatus::SearchFailed(e) => Some(format!("Search failed: {}", e)),
            EditorStatus::Loading => Some("Loading list...".to_string()),
            EditorStatus::LoadFailed(e) => Some(format!("Could not load list: {}", e)),
            EditorStatus::Saving => Some("Saving...".to_string()),
            EditorStatus::Saved(title) if title.is_empty() => Some("List saved".to_string()),
            EditorStatus::Saved(title) => Some(format!("Saved \"{}\"", title)),
            EditorStatus::SaveFailed(e) => Some(format!("Save failed: {}", e)),
        }
    }
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Search results, working list and ranking mode
    pub editor: ListEditor,
    /// Last network operation
    pub status: EditorStatus,
    /// Current contents of the search field
    pub query: String,
    /// Saved list is still being fetched
    pub loading: bool,
    /// A save request is in flight
    pub saving: bool,
}

impl AppState {
    pub fn new(ranked: bool) -> Self {
        Self {
            editor: ListEditor::new(ranked),
            ..Default::default()
        }
    }
}

// ========================
// Network Transitions
// ========================

impl AppState {
    /// Submitting now would send a partial list or a duplicate save
    pub fn submit_blocked(&self) -> bool {
        self.loading || self.saving
    }

    /// Tag a new search; a pending load or save keeps the banner
    pub fn begin_search(&mut self) -> SearchToken {
        if !self.submit_blocked() {
            self.status = EditorStatus::Searching;
        }
        self.editor.begin_search()
    }

    /// Apply a search outcome; stale outcomes leave everything untouched
    pub fn finish_search(&mut self, token: SearchToken, result: ApiResult<Vec<Character>>) -> bool {
        if !self.editor.is_current(token) {
            log::debug!(target: "store", "dropping stale search response {:?}", token);
            return false;
        }
        match result {
            Ok(results) => {
                log::info!(target: "store", "search returned {} results", results.len());
                self.editor.finish_search(token, results);
                if self.status == EditorStatus::Searching {
                    self.status = EditorStatus::Idle;
                }
            }
            Err(e) => {
                log::error!(target: "store", "search failed: {}", e);
                if !self.submit_blocked() {
                    self.status = EditorStatus::SearchFailed(e.to_string());
                }
            }
        }
        true
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.status = EditorStatus::Loading;
    }

    pub fn finish_load(&mut self, result: ApiResult<Vec<Character>>) {
        self.loading = false;
        match result {
            Ok(characters) => {
                log::info!(target: "store", "prefilled {} characters", characters.len());
                self.editor.seed(characters);
                self.status = EditorStatus::Idle;
            }
            Err(e) => {
                log::error!(target: "store", "loading list failed: {}", e);
                self.status = EditorStatus::LoadFailed(e.to_string());
            }
        }
    }

    /// Start a save; refused while a load or another save is pending
    pub fn begin_save(&mut self) -> bool {
        if self.submit_blocked() {
            log::warn!(target: "store", "save refused while a request is pending");
            return false;
        }
        self.saving = true;
        self.status = EditorStatus::Saving;
        true
    }

    pub fn finish_save(&mut self, result: ApiResult<ListRecord>) {
        self.saving = false;
        self.status = match result {
            Ok(record) => EditorStatus::Saved(record.title.unwrap_or_default()),
            Err(e) => {
                log::error!(target: "store", "saving list failed: {}", e);
                EditorStatus::SaveFailed(e.to_string())
            }
        };
    }

    /// Clear a finished status, leaving in-flight ones alone
    pub fn dismiss_status(&mut self) {
        if !self.status.is_busy() {
            self.status = EditorStatus::Idle;
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    #[test]
    fn test_status_flags() {
        assert!(EditorStatus::SearchFailed("x".into()).is_error());
        assert!(!EditorStatus::Searching.is_error());
        assert!(EditorStatus::Loading.is_busy());
        assert_eq!(EditorStatus::Idle.message(), None);
        assert_eq!(EditorStatus::Saved(String::new()).message().as_deref(), Some("List saved"));
    }

    fn mario_results() -> Vec<Character> {
        vec![
            Character::new("3005-177", "Mario"),
            Character::new("3005-2412", "Dr. Mario"),
        ]
    }

    #[test]
    fn test_search_mario_then_add_first() {
        let mut state = AppState::default();
        let token = state.begin_search();
        assert_eq!(state.status, EditorStatus::Searching);

        assert!(state.finish_search(token, Ok(mario_results())));
        assert_eq!(state.status, EditorStatus::Idle);
        assert_eq!(state.editor.search_results().len(), 2);

        state.editor.add_to_list(0);
        assert_eq!(state.editor.working_list(), &mario_results()[..1]);
        assert_eq!(state.editor.form_value(), "3005-177");
    }

    #[test]
    fn test_failed_search_keeps_lists() {
        let mut state = AppState::default();
        let token = state.begin_search();
        state.finish_search(token, Ok(mario_results()));
        state.editor.add_to_list(1);

        let token = state.begin_search();
        let err = ApiError::Status { status: 500, message: "boom".to_string() };
        assert!(state.finish_search(token, Err(err)));

        assert!(state.status.is_error());
        assert_eq!(state.editor.search_results(), &mario_results()[..]);
        assert_eq!(state.editor.form_value(), "3005-2412");
    }

    #[test]
    fn test_stale_search_does_not_touch_status() {
        let mut state = AppState::default();
        let old = state.begin_search();
        let new = state.begin_search();
        assert!(state.finish_search(new, Ok(mario_results())));

        let err = ApiError::Network("timeout".to_string());
        assert!(!state.finish_search(old, Err(err)));
        assert_eq!(state.status, EditorStatus::Idle);
        assert_eq!(state.editor.search_results().len(), 2);
    }

    #[test]
    fn test_failed_load_leaves_working_list() {
        let mut state = AppState::default();
        state.editor.seed(vec![Character::new("a", "A")]);
        state.begin_load();
        state.finish_load(Err(ApiError::Decode("eof".to_string())));

        assert!(matches!(state.status, EditorStatus::LoadFailed(_)));
        assert_eq!(state.editor.form_value(), "a");
    }

    #[test]
    fn test_load_seeds_working_list() {
        let mut state = AppState::default();
        state.begin_load();
        state.finish_load(Ok(mario_results()));
        assert_eq!(state.status, EditorStatus::Idle);
        assert_eq!(state.editor.form_value(), "3005-177, 3005-2412");
    }

    #[test]
    fn test_dismiss_only_clears_finished_status() {
        let mut state = AppState::default();
        state.begin_save();
        state.dismiss_status();
        assert_eq!(state.status, EditorStatus::Saving);

        state.finish_save(Err(ApiError::Network("offline".to_string())));
        state.dismiss_status();
        assert_eq!(state.status, EditorStatus::Idle);
    }

    #[test]
    fn test_search_during_load_keeps_submit_blocked() {
        let mut state = AppState::default();
        state.begin_load();
        let token = state.begin_search();
        assert!(state.finish_search(token, Ok(mario_results())));

        assert!(state.submit_blocked());
        assert_eq!(state.status, EditorStatus::Loading);
        assert_eq!(state.editor.search_results().len(), 2);

        state.finish_load(Ok(vec![Character::new("a", "A")]));
        assert!(!state.submit_blocked());
        assert_eq!(state.status, EditorStatus::Idle);
    }

    #[test]
    fn test_search_during_save_keeps_submit_blocked() {
        let mut state = AppState::default();
        assert!(state.begin_save());
        let token = state.begin_search();
        state.finish_search(token, Err(ApiError::Network("offline".to_string())));

        assert!(state.submit_blocked());
        assert_eq!(state.status, EditorStatus::Saving);
        assert!(!state.begin_save());

        state.finish_save(Err(ApiError::Network("offline".to_string())));
        assert!(!state.submit_blocked());
        assert!(state.begin_save());
    }

    #[test]
    fn test_save_refused_while_loading() {
        let mut state = AppState::default();
        state.begin_load();
        assert!(!state.begin_save());
        assert_eq!(state.status, EditorStatus::Loading);
    }

    #[test]
    fn test_new_state_carries_ranking_mode() {
        let state = AppState::new(true);
        assert!(state.editor.is_ranked());
        assert_eq!(state.status, EditorStatus::Idle);
    }
}
