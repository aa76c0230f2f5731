//! Backend Module
//!
//! The Axum HTTP server: authentication, the ideas resource, persistence and
//! error handling.

pub mod auth;
pub mod error;
pub mod extract;
pub mod ideas;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod store;

pub use error::BackendError;
pub use server::{create_app, create_app_with_store};
