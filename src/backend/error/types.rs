/**
 * Backend Error Types
 *
 * This module defines the error type every handler and middleware returns.
 * Each variant maps to exactly one HTTP status; the boundary handler in
 * `conversion.rs` renders it as `{ "message": ... }`.
 *
 * # Error Categories
 *
 * - `ValidationError` (400) - missing or blank required fields
 * - `Unauthorized` (401) - bad credentials, missing/invalid/expired token
 * - `Conflict` (400) - duplicate email on registration
 * - `NotFound` (404) - unknown resource, malformed id, unmatched route
 * - `Internal` (500) - store, hashing and token-encoding failures
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::flow::{TOKEN_FAILED, USER_EXISTS};
use crate::backend::auth::password::PasswordError;
use crate::backend::auth::sessions::TokenError;
use crate::backend::store::StoreError;
use crate::shared::SharedError;

/// Message returned for every 500 response
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use ideadrop::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::unauthorized("Invalid Credentials");
/// assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Missing or blank required fields
    #[error("Validation error: {message}")]
    ValidationError { message: String },

    /// Authentication failed
    ///
    /// Messages stay generic so that callers cannot tell an expired token
    /// from a malformed one, or an unknown email from a wrong password.
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// A unique resource already exists
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// Resource not found
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// Anything the client cannot fix
    ///
    /// The message is logged, never sent.
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl BackendError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// Duplicate registrations answer 400, like the rest of the
    /// client-input failures of the registration endpoint.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ValidationError { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Conflict { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message sent to the client
    pub fn message(&self) -> String {
        match self {
            Self::ValidationError { message }
            | Self::Unauthorized { message }
            | Self::Conflict { message }
            | Self::NotFound { message } => message.clone(),
            Self::Internal { .. } => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

impl From<SharedError> for BackendError {
    fn from(err: SharedError) -> Self {
        Self::validation(err.to_string())
    }
}

impl From<StoreError> for BackendError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail => Self::conflict(USER_EXISTS),
            other => Self::internal(other.to_string()),
        }
    }
}

impl From<PasswordError> for BackendError {
    fn from(err: PasswordError) -> Self {
        Self::internal(err.to_string())
    }
}

impl From<TokenError> for BackendError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::InvalidToken => Self::unauthorized(TOKEN_FAILED),
            TokenError::Encoding(e) => Self::internal(format!("token encoding failed: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(BackendError::validation("x").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(BackendError::unauthorized("x").status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(BackendError::conflict("x").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(BackendError::not_found("x").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            BackendError::internal("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_message_is_hidden() {
        let error = BackendError::internal("connection refused (os error 111)");
        assert_eq!(error.message(), INTERNAL_ERROR_MESSAGE);
    }

    #[test]
    fn test_from_shared_error() {
        let backend_error: BackendError =
            SharedError::validation("title", "Title, summary and description are required").into();
        assert_eq!(backend_error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            backend_error.message(),
            "Title, summary and description are required"
        );
    }

    #[test]
    fn test_duplicate_email_becomes_conflict() {
        let backend_error: BackendError = StoreError::DuplicateEmail.into();
        assert!(matches!(backend_error, BackendError::Conflict { .. }));
        assert_eq!(backend_error.message(), "User already exists");
    }

    #[test]
    fn test_invalid_token_is_unauthorized() {
        let backend_error: BackendError = TokenError::InvalidToken.into();
        assert_eq!(backend_error.status_code(), StatusCode::UNAUTHORIZED);
    }
}
