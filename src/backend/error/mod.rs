//! Backend Error Module
//!
//! Error types used by handlers and middleware, and their conversion into
//! HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse and the 404 fallback
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use ideadrop::backend::error::BackendError;
//! use axum::Json;
//!
//! async fn handler() -> Result<Json<()>, BackendError> {
//!     Err(BackendError::not_found("Idea not found"))
//! }
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use conversion::not_found;
pub use types::{BackendError, INTERNAL_ERROR_MESSAGE};
