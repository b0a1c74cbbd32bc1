//! List Endpoints

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Serialize;

use super::{get_json, post_json};
use crate::config::EditorConfig;
use crate::error::ApiResult;
use crate::models::{collect_characters, Character, ListCharactersResponse, ListRecord};

#[derive(Serialize)]
struct NewList<'a> {
    characters: &'a str,
}

#[derive(Serialize)]
struct CreateListArgs<'a> {
    list: NewList<'a>,
}

pub fn list_url(config: &EditorConfig, list_id: &str) -> String {
    format!(
        "{}/{}",
        config.list_endpoint.trim_end_matches('/'),
        utf8_percent_encode(list_id, NON_ALPHANUMERIC)
    )
}

/// Characters of an existing list, in saved order
pub async fn get_list_characters(config: &EditorConfig, list_id: &str) -> ApiResult<Vec<Character>> {
    let response: ListCharactersResponse = get_json(&list_url(config, list_id)).await?;
    Ok(collect_characters(response.characters))
}

/// Create a list from a serialized `"id1, id2"` character string
pub async fn create_list(config: &EditorConfig, characters: &str) -> ApiResult<ListRecord> {
    let args = CreateListArgs {
        list: NewList { characters },
    };
    post_json(&config.create_endpoint, &args).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_url() {
        let config = EditorConfig::default();
        assert_eq!(list_url(&config, "111111"), "/get-list/111111");
        assert_eq!(list_url(&config, "a/b"), "/get-list/a%2Fb");
    }

    #[test]
    fn test_create_list_body_shape() {
        let args = CreateListArgs {
            list: NewList { characters: "3005-177, 3005-191" },
        };
        assert_eq!(
            serde_json::to_string(&args).unwrap(),
            r#"{"list":{"characters":"3005-177, 3005-191"}}"#
        );
    }
}
