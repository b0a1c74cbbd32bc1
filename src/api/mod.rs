//! Backend API Wrappers
//!
//! Thin HTTP bindings to the backend proxy endpoints, organized by resource.

mod lists;
mod search;

use reqwasm::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ApiError, ApiResult};
use crate::models::ErrorBody;

// Re-export all public items
pub use lists::*;
pub use search::*;

async fn get_json<T: DeserializeOwned>(url: &str) -> ApiResult<T> {
    log::debug!(target: "api", "GET {}", url);
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(response).await
}

async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> ApiResult<T> {
    let body = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
    log::debug!(target: "api", "POST {} {}", url, body);
    let response = Request::post(url)
        .header("Content-Type", "application/json")
        .header("Accept", "application/json")
        .body(body)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(response).await
}

/// Decode a 2xx body, or turn anything else into `ApiError::Status`
async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let status = response.status();
    if response.ok() {
        return response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()));
    }

    let text = response.text().await.unwrap_or_default();
    let message = error_message(&text, response.status_text());
    log::warn!(target: "api", "request failed with {}: {}", status, message);
    Err(ApiError::Status { status, message })
}

/// Prefer the backend's `{"error": ...}` body, then raw text, then the status line
fn error_message(body: &str, status_text: String) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed.error;
    }
    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }
    if status_text.is_empty() {
        "Unknown error".to_string()
    } else {
        status_text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_json_body() {
        assert_eq!(error_message(r#"{"error": "bad key"}"#, "Forbidden".into()), "bad key");
        assert_eq!(error_message("  proxy down ", "Bad Gateway".into()), "proxy down");
        assert_eq!(error_message("", "Bad Gateway".into()), "Bad Gateway");
        assert_eq!(error_message("", String::new()), "Unknown error");
    }
}
