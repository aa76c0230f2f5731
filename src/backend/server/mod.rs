//! Server setup: shared state, store selection and router assembly.

pub mod config;
pub mod init;
pub mod state;

pub use init::{create_app, create_app_with_store};
pub use state::AppState;
