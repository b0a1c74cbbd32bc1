//! Character Search
//!
//! The backend proxies the external database, so the browser builds the full
//! database query URL and hands it over as a JSON string.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Serialize;

use super::post_json;
use crate::config::EditorConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{collect_characters, Character, SearchResponse};

/// Characters that must be escaped inside a query-string value
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'`');

#[derive(Serialize)]
struct SearchQuery<'a> {
    query: &'a str,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct SearchRequest {
    /// JSON-encoded `{"query": url}`
    pub data: String,
}

/// URL of the external database search for `name`
pub fn build_search_url(config: &EditorConfig, name: &str) -> String {
    let mut url = format!("{}/search?", config.api_base.trim_end_matches('/'));
    if let Some(key) = config.api_key.as_deref().filter(|k| !k.is_empty()) {
        url.push_str(&format!("api_key={}&", utf8_percent_encode(key, QUERY_VALUE)));
    }
    url.push_str(&format!(
        "format=json&query={}&resources=character",
        utf8_percent_encode(name.trim(), QUERY_VALUE)
    ));
    url
}

pub fn build_search_request(config: &EditorConfig, name: &str) -> ApiResult<SearchRequest> {
    let url = build_search_url(config, name);
    let data = serde_json::to_string(&SearchQuery { query: &url })
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    Ok(SearchRequest { data })
}

pub async fn search_characters(config: &EditorConfig, name: &str) -> ApiResult<Vec<Character>> {
    let request = build_search_request(config, name)?;
    let response: SearchResponse = post_json(&config.search_endpoint, &request).await?;
    Ok(collect_characters(response.character_results))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_with_key() {
        let config = EditorConfig {
            api_base: "http://giantbomb.com/api/".to_string(),
            api_key: Some("k3y".to_string()),
            ..Default::default()
        };
        assert_eq!(
            build_search_url(&config, " dr. mario & luigi "),
            "http://giantbomb.com/api/search?api_key=k3y&format=json&query=dr.%20mario%20%26%20luigi&resources=character"
        );
    }

    #[test]
    fn test_search_url_without_key() {
        let config = EditorConfig::default();
        assert_eq!(
            build_search_url(&config, "link"),
            "http://giantbomb.com/api/search?format=json&query=link&resources=character"
        );
    }

    #[test]
    fn test_search_request_wraps_query_as_json_string() {
        let config = EditorConfig::default();
        let request = build_search_request(&config, "mario").unwrap();

        let inner: serde_json::Value = serde_json::from_str(&request.data).unwrap();
        assert_eq!(inner["query"], build_search_url(&config, "mario"));

        let body = serde_json::to_value(&request).unwrap();
        assert!(body["data"].is_string());
    }
}
