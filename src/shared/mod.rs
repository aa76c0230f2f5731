//! Shared Module
//!
//! Types that are independent of the HTTP layer: idea payloads, tag parsing,
//! configuration and validation errors.

/// Idea data structures
pub mod idea;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use idea::{Idea, IdeaDraft, IdeaInput, TagsInput};
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
