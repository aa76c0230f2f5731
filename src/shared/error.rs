//! Shared Error Types
//!
//! Errors produced outside the HTTP layer, mostly while checking the fields
//! of an incoming payload.
//!
//! # Usage
//!
//! ```rust
//! use ideadrop::shared::error::SharedError;
//!
//! let error = SharedError::validation("title", "Title, summary and description are required");
//! assert_eq!(error.to_string(), "Title, summary and description are required");
//! ```
use thiserror::Error;

/// Shared error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// A required field was missing or blank
    ///
    /// The display string is the bare message since it is what clients see.
    #[error("{message}")]
    ValidationError {
        /// The first field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the field that failed
    pub fn field(&self) -> &str {
        match self {
            Self::ValidationError { field, .. } => field,
        }
    }
}
