//! Error types for the bookstay API client

use thiserror::Error;

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors that can occur when interacting with the bookstay API
#[derive(Debug, Error)]
pub enum ApiError {
    /// Base URL could not be parsed
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// Server rejected the request with 401
    ///
    /// The caller is expected to treat this as an expired session.
    #[error("Unauthorized - session expired or invalid credentials")]
    Unauthorized,

    /// Server answered with a non-success status
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from the response body, empty when none was sent
        message: String,
    },

    /// Request did not complete within the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// Connection-level failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// Response body could not be decoded
    #[error("Response parsing failed: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// Classify a transport-layer failure from reqwest
    pub(crate) fn from_transport(source: &reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::Timeout
        } else {
            Self::Transport(source.to_string())
        }
    }

    /// Message suitable for showing to a user
    ///
    /// Prefers the message the server put in the error body; falls back to
    /// the supplied operation-specific text when the failure carried none.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Api { message, .. } if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_body() {
        let err = ApiError::Api {
            status: 400,
            message: "Room is not available".to_string(),
        };
        assert_eq!(err.user_message("Failed to create reservation"), "Room is not available");
    }

    #[test]
    fn test_user_message_falls_back_when_body_empty() {
        let err = ApiError::Api {
            status: 500,
            message: String::new(),
        };
        assert_eq!(err.user_message("Failed to create reservation"), "Failed to create reservation");
    }

    #[test]
    fn test_user_message_falls_back_for_transport() {
        let err = ApiError::Transport("connection refused".to_string());
        assert_eq!(err.user_message("Failed to fetch hotels"), "Failed to fetch hotels");
    }
}
