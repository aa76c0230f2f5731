//! Ideas resource
//!
//! Handlers for `/api/ideas`. Ideas are not owned by any user: any
//! authenticated user may edit or delete any idea.

pub mod handlers;

pub use handlers::{create_idea, delete_idea, get_idea, list_ideas, update_idea};
