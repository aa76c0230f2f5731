//! IdeaDrop - Main Library
//!
//! IdeaDrop is a small HTTP backend for sharing ideas. It exposes CRUD
//! endpoints for ideas and a username/password authentication flow built on
//! short-lived access tokens and long-lived refresh tokens carried in an
//! HTTP-only cookie.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared by every layer
//!   - Idea payloads and tag normalisation
//!   - Application configuration
//!   - Field validation errors
//!
//! - **`backend`** - The Axum server
//!   - Token issuing and verification
//!   - Register / login / logout / refresh flow
//!   - Access guard middleware
//!   - Idea handlers and the credential store
//!
//! # Usage
//!
//! ```rust,no_run
//! use ideadrop::backend::server::init::create_app;
//! use ideadrop::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::error::SharedError` for field validation failures
//! - `backend::error::BackendError` at the HTTP boundary, rendered as
//!   `{ "message": ... }` with the status chosen by the failing check

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
