//! Application Errors
//!
//! One error type for validation, transport and storage failures.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Rejected locally, before any request was sent
    #[error("{0}")]
    Validation(String),
    /// Server answered with a non-2xx status
    #[error("request rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },
    /// Request never completed
    #[error("network error: {0}")]
    Network(String),
    /// 2xx response with an unexpected body
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("storage unavailable: {0}")]
    Storage(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Message from a structured `{error}` body, if the server sent one
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message: Some(m), .. } if !m.trim().is_empty() => Some(m),
            _ => None,
        }
    }
}

/// Error body returned by the backend on rejection
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Parse a rejection body; anything that isn't `{error: string}` yields `None`
pub fn parse_error_body(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body).ok().map(|b| b.error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_body() {
        assert_eq!(parse_error_body(r#"{"error":"Name required"}"#), Some("Name required".to_string()));
        assert_eq!(parse_error_body("<html>500</html>"), None);
        assert_eq!(parse_error_body(r#"{"message":"nope"}"#), None);
    }

    #[test]
    fn test_server_message_ignores_blank() {
        let err = AppError::Rejected { status: 400, message: Some("  ".into()) };
        assert_eq!(err.server_message(), None);

        let err = AppError::Rejected { status: 400, message: Some("Item not found".into()) };
        assert_eq!(err.server_message(), Some("Item not found"));
    }
}
