//! Custom error types for the API service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Custom error type for the API service
///
/// Every variant maps to exactly one HTTP status. Unexpected failures are
/// collapsed into `Internal`, logged, and surfaced with a generic message
/// so callers never see the underlying cause.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing or malformed input
    #[error("{0}")]
    Validation(String),

    /// A uniqueness constraint would be violated
    #[error("{0}")]
    Conflict(String),

    /// Unknown email or wrong password, indistinguishable on purpose
    #[error("Invalid credentials.")]
    InvalidCredentials,

    /// No bearer token on the request
    #[error("No token provided. Please log in.")]
    MissingToken,

    /// Token signature did not verify
    #[error("Invalid token. Please log in again.")]
    InvalidToken,

    /// Token expiry has passed
    #[error("Token expired. Please log in again.")]
    ExpiredToken,

    /// Record does not exist, or belongs to another account
    #[error("{0}")]
    NotFound(String),

    /// The operation would violate a stored invariant
    #[error("{0}")]
    InvalidOperation(String),

    /// Any unexpected failure (store unreachable, encoding failed, ...)
    #[error("Internal server error.")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidOperation(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::InvalidCredentials
            | ApiError::MissingToken
            | ApiError::InvalidToken
            | ApiError::ExpiredToken => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(ref e) = self {
            error!("Internal error: {:#}", e);
        }

        let status = self.status_code();
        let body = Json(json!({
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::Validation("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidOperation("no".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Conflict("taken".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::MissingToken.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::ExpiredToken.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::NotFound("gone".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal(anyhow::anyhow!("boom")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_message_is_generic() {
        let err = ApiError::Internal(anyhow::anyhow!("connection refused"));
        assert_eq!(err.to_string(), "Internal server error.");
    }

    #[test]
    fn test_unknown_email_and_wrong_password_share_a_message() {
        // Both failure paths construct the same variant; the message must
        // not leak which case occurred.
        assert_eq!(ApiError::InvalidCredentials.to_string(), "Invalid credentials.");
    }
}
