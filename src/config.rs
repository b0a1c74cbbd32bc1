//! Editor Configuration
//!
//! Resolved once at startup from, in order:
//! 1. `window.EPICLIST_CONFIG` (a plain JS object, camelCase keys)
//! 2. `data-*` attributes on the mount element
//! 3. the `/lists/:id/edit` URL path, for the list being edited

use serde::Deserialize;
use wasm_bindgen::JsValue;

/// Global the server-rendered page may define before loading the bundle
const CONFIG_GLOBAL: &str = "EPICLIST_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// Backend proxy for the character database search
    pub search_endpoint: String,
    /// Prefix of `GET {list_endpoint}/:id`
    pub list_endpoint: String,
    /// Endpoint used when saving through the API instead of the form
    pub create_endpoint: String,
    /// Base URL of the external character database
    pub api_base: String,
    pub api_key: Option<String>,
    /// Set on edit pages; triggers the prefill
    pub edit_list_id: Option<String>,
    /// Initial ranking mode
    pub ranked: bool,
    /// Delay before search-as-you-type fires; 0 disables it
    pub search_debounce_ms: u32,
    pub min_query_len: usize,
    pub submit_via_api: bool,
    pub log_level: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            search_endpoint: "/search-characters".to_string(),
            list_endpoint: "/get-list".to_string(),
            create_endpoint: "/lists/new".to_string(),
            api_base: "http://giantbomb.com/api".to_string(),
            api_key: None,
            edit_list_id: None,
            ranked: false,
            search_debounce_ms: 300,
            min_query_len: 2,
            submit_via_api: false,
            log_level: "info".to_string(),
        }
    }
}

/// Values read from the mount element's `data-*` attributes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageOverrides {
    pub edit_list_id: Option<String>,
    pub ranked: Option<bool>,
    pub submit_via_api: Option<bool>,
}

impl EditorConfig {
    /// Resolve the config for the current page
    pub fn load(mount: Option<&web_sys::HtmlElement>) -> Self {
        let mut config = read_global().unwrap_or_else(|e| {
            log::warn!(target: "config", "ignoring {}: {}", CONFIG_GLOBAL, e);
            Self::default()
        });

        if let Some(el) = mount {
            config.apply_overrides(read_dataset(el));
        }

        if config.edit_list_id.is_none() {
            let path = web_sys::window()
                .and_then(|w| w.location().pathname().ok())
                .unwrap_or_default();
            config.edit_list_id = edit_id_from_path(&path);
        }

        config
    }

    pub fn apply_overrides(&mut self, overrides: PageOverrides) {
        if let Some(id) = overrides.edit_list_id.filter(|id| !id.trim().is_empty()) {
            self.edit_list_id = Some(id.trim().to_string());
        }
        if let Some(ranked) = overrides.ranked {
            self.ranked = ranked;
        }
        if let Some(via_api) = overrides.submit_via_api {
            self.submit_via_api = via_api;
        }
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

fn read_global() -> Result<EditorConfig, String> {
    let Some(window) = web_sys::window() else {
        return Ok(EditorConfig::default());
    };
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
        .map_err(|e| format!("{:?}", e))?;
    if value.is_undefined() || value.is_null() {
        return Ok(EditorConfig::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
}

fn read_dataset(el: &web_sys::HtmlElement) -> PageOverrides {
    let data = el.dataset();
    PageOverrides {
        edit_list_id: data.get("editListId"),
        ranked: data.get("ranked").as_deref().and_then(parse_flag),
        submit_via_api: data.get("submitViaApi").as_deref().and_then(parse_flag),
    }
}

/// Interpret a data attribute as a boolean; an empty attribute counts as set
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Extract `:id` from `/lists/:id/edit`
pub fn edit_id_from_path(path: &str) -> Option<String> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    match segments.as_slice() {
        ["lists", id, "edit"] => Some(id.to_string()),
        _ => None,
    }
}
