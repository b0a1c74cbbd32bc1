//! Frontend Models
//!
//! Data structures matching backend responses.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier assigned by the external character database
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(String);

impl CharacterId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Character data structure shown in both panels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub image_url: Option<String>,
}

impl Character {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: CharacterId::new(id),
            name: name.into(),
            image_url: None,
        }
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }
}

// ========================
// Wire Types
// ========================

/// Identifier as the proxy sends it: `guid` is a string, `api_id` may be a number
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WireId {
    Text(String),
    Number(u64),
}

impl WireId {
    fn into_id(self) -> Option<CharacterId> {
        match self {
            WireId::Text(s) if s.trim().is_empty() => None,
            WireId::Text(s) => Some(CharacterId::new(s.trim())),
            WireId::Number(n) => Some(CharacterId::new(n.to_string())),
        }
    }
}

/// Image field: either a plain URL or the database's image object
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WireImage {
    Url(String),
    Object {
        #[serde(default)]
        medium_url: Option<String>,
        #[serde(default)]
        small_url: Option<String>,
    },
}

impl WireImage {
    fn into_url(self) -> Option<String> {
        match self {
            WireImage::Url(url) => Some(url),
            WireImage::Object { medium_url, small_url } => medium_url.or(small_url),
        }
        .filter(|url| !url.is_empty())
    }
}

/// One character entry as returned by `/search-characters` and `/get-list/:id`
#[derive(Debug, Clone, Deserialize)]
pub struct CharacterResult {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image_url: Option<WireImage>,
    #[serde(default)]
    pub image_url_lg: Option<WireImage>,
    #[serde(default)]
    pub guid: Option<WireId>,
    #[serde(default)]
    pub api_id: Option<WireId>,
}

impl CharacterResult {
    /// Convert to a `Character`; `None` when the entry carries no usable id
    pub fn into_character(self) -> Option<Character> {
        let id = self
            .guid
            .and_then(WireId::into_id)
            .or_else(|| self.api_id.and_then(WireId::into_id))?;
        let image_url = self
            .image_url
            .and_then(WireImage::into_url)
            .or_else(|| self.image_url_lg.and_then(WireImage::into_url));
        Some(Character {
            id,
            name: self.name,
            image_url,
        })
    }
}

/// Convert wire entries, dropping (and logging) those without an id
pub fn collect_characters(results: Vec<CharacterResult>) -> Vec<Character> {
    results
        .into_iter()
        .filter_map(|r| {
            let name = r.name.clone();
            let character = r.into_character();
            if character.is_none() {
                log::warn!(target: "models", "skipping result {:?} without an id", name);
            }
            character
        })
        .collect()
}

/// Response of `POST /search-characters`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub character_results: Vec<CharacterResult>,
}

/// Response of `GET /get-list/:id`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListCharactersResponse {
    #[serde(default)]
    pub characters: Vec<CharacterResult>,
}

/// List record returned by `POST /lists/new`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListRecord {
    #[serde(default)]
    pub characters: serde_json::Value,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub user_id: Option<u64>,
    #[serde(default)]
    pub ranked: bool,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub story_id: Option<u64>,
}

/// Error body the backend sends with non-2xx responses
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_response_prefers_guid_and_image_url() {
        let json = r#"{
            "character_results": [
                {"name": "Mario", "guid": "3005-177", "api_id": 177,
                 "image_url": "http://img/mario.png", "image_url_lg": "http://img/mario-lg.png"},
                {"name": "Luigi", "api_id": 370,
                 "image_url_lg": {"medium_url": "http://img/luigi-m.png"}}
            ]
        }"#;
        let parsed: SearchResponse = serde_json::from_str(json).unwrap();
        let chars = collect_characters(parsed.character_results);

        assert_eq!(chars.len(), 2);
        assert_eq!(chars[0].id.as_str(), "3005-177");
        assert_eq!(chars[0].image_url.as_deref(), Some("http://img/mario.png"));
        assert_eq!(chars[1].id.as_str(), "370");
        assert_eq!(chars[1].image_url.as_deref(), Some("http://img/luigi-m.png"));
    }

    #[test]
    fn test_result_without_id_is_skipped() {
        let json = r#"{"characters": [{"name": "Nobody"}, {"name": "Link", "guid": "3005-191"}]}"#;
        let parsed: ListCharactersResponse = serde_json::from_str(json).unwrap();
        let chars = collect_characters(parsed.characters);

        assert_eq!(chars, vec![Character::new("3005-191", "Link")]);
    }

    #[test]
    fn test_missing_results_field_is_empty() {
        let parsed: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.character_results.is_empty());
    }

    #[test]
    fn test_list_record_parses() {
        let json = r#"{"characters": "3005-177, 3005-191", "title": "Plumbers",
                       "user_id": 11111, "ranked": true, "private": false, "story_id": null}"#;
        let record: ListRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.title.as_deref(), Some("Plumbers"));
        assert_eq!(record.user_id, Some(11111));
        assert!(record.ranked);
        assert!(!record.private);
        assert_eq!(record.story_id, None);
    }
}
