//! API Errors

use thiserror::Error;

/// Failure talking to the backend proxy
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Failed to send request: {0}")]
    Network(String),

    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to encode request: {0}")]
    Encode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        let err = ApiError::Status {
            status: 502,
            message: "upstream timeout".to_string(),
        };
        assert_eq!(err.to_string(), "Request failed with status 502: upstream timeout");
    }
}
