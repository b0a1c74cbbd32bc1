//! UI Components
//!
//! Leptos components of the list editor.

mod character_panel;
mod character_row;
mod drop_zone;
mod list_form;
mod ranking_toggle;
mod search_bar;
mod status_banner;

pub use character_panel::CharacterPanel;
pub use character_row::CharacterRow;
pub use drop_zone::DropZone;
pub use list_form::ListForm;
pub use ranking_toggle::RankingToggle;
pub use search_bar::SearchBar;
pub use status_banner::StatusBanner;
