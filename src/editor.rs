//! List Editor State
//!
//! The search results and working list behind the editor UI, kept free of
//! DOM and reactive types so every operation can be tested directly.

use crate::models::{Character, CharacterId};

/// Separator used by the hidden `characters` form field
const ID_SEPARATOR: &str = ", ";

/// Which of the two panels a row belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    SearchResults,
    WorkingList,
}

/// Tag attached to a search request; only the latest one may land
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SearchToken(u64);

/// Primary action of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowAction {
    Add,
    Remove,
}

/// Reorder controls shown on working-list rows in ranking mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RankControls {
    pub rank: usize,
    pub can_move_up: bool,
    pub can_move_down: bool,
}

/// Everything the shared row template needs to draw one character
#[derive(Debug, Clone, PartialEq)]
pub struct RowModel {
    pub kind: ListKind,
    pub index: usize,
    pub character: Character,
    pub action: RowAction,
    pub rank: Option<RankControls>,
}

/// Editor state: search results, working list and ranking mode
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListEditor {
    search_results: Vec<Character>,
    working_list: Vec<Character>,
    ranked: bool,
    latest_search: u64,
}

impl ListEditor {
    pub fn new(ranked: bool) -> Self {
        Self {
            ranked,
            ..Default::default()
        }
    }

    pub fn search_results(&self) -> &[Character] {
        &self.search_results
    }

    pub fn working_list(&self) -> &[Character] {
        &self.working_list
    }

    pub fn is_ranked(&self) -> bool {
        self.ranked
    }

    fn list(&self, kind: ListKind) -> &[Character] {
        match kind {
            ListKind::SearchResults => &self.search_results,
            ListKind::WorkingList => &self.working_list,
        }
    }

    // ========================
    // Search
    // ========================

    /// Allocate the token for a new search request
    pub fn begin_search(&mut self) -> SearchToken {
        self.latest_search += 1;
        SearchToken(self.latest_search)
    }

    /// Whether `token` belongs to the most recent search
    pub fn is_current(&self, token: SearchToken) -> bool {
        token.0 == self.latest_search
    }

    /// Replace the search results if `token` is still current.
    /// Returns false when the response is stale and was dropped.
    pub fn finish_search(&mut self, token: SearchToken, results: Vec<Character>) -> bool {
        if !self.is_current(token) {
            return false;
        }
        self.search_results = results;
        true
    }

    // ========================
    // Working List
    // ========================

    /// Append `SearchResults[index]` to the working list
    pub fn add_to_list(&mut self, index: usize) -> Option<&Character> {
        let character = self.search_results.get(index)?.clone();
        self.working_list.push(character);
        self.working_list.last()
    }

    pub fn remove_from_list(&mut self, index: usize) -> Option<Character> {
        if index >= self.working_list.len() {
            return None;
        }
        Some(self.working_list.remove(index))
    }

    pub fn move_up(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.working_list.len() {
            return false;
        }
        self.working_list.swap(index - 1, index);
        true
    }

    pub fn move_down(&mut self, index: usize) -> bool {
        if index + 1 >= self.working_list.len() {
            return false;
        }
        self.working_list.swap(index, index + 1);
        true
    }

    /// Remove the entry at `from` and reinsert it at `to` (clamped to the end)
    pub fn move_to(&mut self, from: usize, to: usize) -> bool {
        let len = self.working_list.len();
        if from >= len {
            return false;
        }
        let to = to.min(len - 1);
        if from == to {
            return false;
        }
        let character = self.working_list.remove(from);
        self.working_list.insert(to, character);
        true
    }

    pub fn set_ranked(&mut self, enabled: bool) {
        self.ranked = enabled;
    }

    /// Seed the working list with a saved list being edited.
    /// Anything added while the load was in flight stays after it.
    pub fn seed(&mut self, characters: Vec<Character>) {
        let added = std::mem::replace(&mut self.working_list, characters);
        self.working_list.extend(added);
    }

    /// Map a possibly stale row reference back to a live index.
    ///
    /// A click can race a re-render, so the row's index is only trusted when
    /// it still points at the same character.
    pub fn resolve(&self, kind: ListKind, index: usize, id: &CharacterId) -> Option<usize> {
        let list = self.list(kind);
        match list.get(index) {
            Some(c) if &c.id == id => Some(index),
            _ => list.iter().position(|c| &c.id == id),
        }
    }

    /// Value for the hidden `characters` form field
    pub fn form_value(&self) -> String {
        serialize_ids(&self.working_list)
    }

    // ========================
    // Rendering
    // ========================

    /// Row models for one panel, shared by both lists' templates
    pub fn rows(&self, kind: ListKind) -> Vec<RowModel> {
        let list = self.list(kind);
        let last = list.len().saturating_sub(1);
        list.iter()
            .enumerate()
            .map(|(index, character)| {
                let (action, rank) = match kind {
                    ListKind::SearchResults => (RowAction::Add, None),
                    ListKind::WorkingList => {
                        let rank = self.ranked.then(|| RankControls {
                            rank: index + 1,
                            can_move_up: index > 0,
                            can_move_down: index < last,
                        });
                        (RowAction::Remove, rank)
                    }
                };
                RowModel {
                    kind,
                    index,
                    character: character.clone(),
                    action,
                    rank,
                }
            })
            .collect()
    }
}

/// Join identifiers as `"id1, id2, id3"`; an empty list gives `""`
pub fn serialize_ids(characters: &[Character]) -> String {
    characters
        .iter()
        .map(|c| c.id.as_str())
        .collect::<Vec<_>>()
        .join(ID_SEPARATOR)
}

/// Split a serialized form value back into identifiers
pub fn parse_ids(value: &str) -> Vec<CharacterId> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(CharacterId::new)
        .collect()
}
