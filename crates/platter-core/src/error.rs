//! Normalized error handling for backend responses
//!
//! The backend reports rejections as JSON with a `detail` field on some
//! endpoints and a bare `message` on others. Every non-2xx response goes
//! through one normalizer so the alert dialog always has a readable
//! message.

use serde::Deserialize;
use thiserror::Error;

/// Error from a backend call, carrying a user-presentable message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Backend answered with a non-success status
    #[error("{0}")]
    Rejected(String),
    /// The request never completed (connection refused, CORS, timeout)
    #[error("network error: {0}")]
    Network(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl ApiError {
    /// Normalize a non-2xx response body into a message
    ///
    /// Prefers the JSON `detail` field, then `message`, then falls back
    /// to the status code.
    pub fn from_response(status: u16, body: &str) -> Self {
        if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
            if let Some(text) = parsed.detail.or(parsed.message) {
                return Self::Rejected(text);
            }
        }
        tracing::debug!(status, body, "unstructured error response");
        Self::Rejected(format!("request failed with status {status}"))
    }

    pub fn network(err: impl std::fmt::Display) -> Self {
        Self::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_field_preferred() {
        let err = ApiError::from_response(400, r#"{"detail": "Only GLB files are supported"}"#);
        assert_eq!(err.to_string(), "Only GLB files are supported");
    }

    #[test]
    fn test_message_field_fallback() {
        let err = ApiError::from_response(500, r#"{"message": "database unavailable"}"#);
        assert_eq!(err.to_string(), "database unavailable");
    }

    #[test]
    fn test_unstructured_body_uses_status() {
        let err = ApiError::from_response(502, "<html>Bad Gateway</html>");
        assert_eq!(err.to_string(), "request failed with status 502");
    }

    #[test]
    fn test_empty_json_uses_status() {
        let err = ApiError::from_response(404, "{}");
        assert_eq!(err.to_string(), "request failed with status 404");
    }

    #[test]
    fn test_network_error_display() {
        let err = ApiError::network("fetch aborted");
        assert_eq!(err.to_string(), "network error: fetch aborted");
    }
}
