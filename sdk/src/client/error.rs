//! Client error types.
//!
//! Provides error types for HTTP client operations.

use std::fmt;

/// Client errors.
#[derive(Debug)]
pub enum ClientError {
    /// HTTP request failed.
    Request(reqwest::Error),

    /// Failed to deserialize response.
    Deserialization(String),

    /// API returned an error response.
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the response envelope.
        message: String,
    },

    /// Resource not found (404).
    NotFound(String),

    /// Request failed client-side validation.
    Validation(String),

    /// Invalid configuration.
    InvalidConfig(String),

    /// Request timeout.
    Timeout,
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request(e) => write!(f, "HTTP request failed: {}", e),
            Self::Deserialization(msg) => write!(f, "deserialization failed: {}", msg),
            Self::Api { status, message } => write!(f, "API error [{}]: {}", status, message),
            Self::NotFound(resource) => write!(f, "not found: {}", resource),
            Self::Validation(msg) => write!(f, "validation failed: {}", msg),
            Self::InvalidConfig(msg) => write!(f, "invalid configuration: {}", msg),
            Self::Timeout => write!(f, "request timeout"),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Request(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Request(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_api() {
        let err = ClientError::Api {
            status: 400,
            message: "amount must be positive".to_string(),
        };
        assert_eq!(err.to_string(), "API error [400]: amount must be positive");
    }

    #[test]
    fn test_client_error_not_found() {
        let err = ClientError::NotFound("stream stream-1".to_string());
        assert_eq!(err.to_string(), "not found: stream stream-1");
    }

    #[test]
    fn test_client_error_validation() {
        let err = ClientError::Validation("invalid amount: amount must be positive".to_string());
        assert!(err.to_string().starts_with("validation failed:"));
    }

    #[test]
    fn test_client_error_timeout() {
        let err = ClientError::Timeout;
        assert_eq!(err.to_string(), "request timeout");
    }

    #[test]
    fn test_client_error_invalid_config() {
        let err = ClientError::InvalidConfig("base_url cannot be empty".to_string());
        assert_eq!(
            err.to_string(),
            "invalid configuration: base_url cannot be empty"
        );
    }
}
