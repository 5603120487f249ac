//! API error types.
//!
//! Maps handler failures onto the `{success: false, message}` response
//! envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::store::StoreError;

/// API errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Requested resource does not exist.
    #[error("{0} not found")]
    NotFound(String),

    /// Request failed validation.
    #[error("{0}")]
    Validation(String),

    /// Storage-level rejection.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Error response envelope.
#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
}

impl ApiError {
    /// Returns the HTTP status for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) | Self::Store(StoreError::PollNotFound(_)) => StatusCode::NOT_FOUND,
            Self::Validation(_) | Self::Store(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            success: false,
            message: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status() {
        let err = ApiError::NotFound("stream s1".to_string());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "stream s1 not found");
    }

    #[test]
    fn test_validation_status() {
        let err = ApiError::Validation("amount must be positive".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_store_error_mapping() {
        let err = ApiError::from(StoreError::PollNotFound("poll-1".to_string()));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let err = ApiError::from(StoreError::UnknownOption("option-9".to_string()));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err = ApiError::from(StoreError::PollClosed("poll-1".to_string()));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
