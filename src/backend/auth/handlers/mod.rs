//! Authentication HTTP handlers
//!
//! - `POST /api/auth/register` - create an account (201 + refresh cookie)
//! - `POST /api/auth/login` - open a session (201 + refresh cookie)
//! - `POST /api/auth/logout` - clear the refresh cookie (200)
//! - `POST /api/auth/refresh` - new access token from the cookie (200)

pub mod login;
pub mod logout;
pub mod refresh;
pub mod register;
pub mod types;

pub use login::login;
pub use logout::logout;
pub use refresh::refresh;
pub use register::register;
pub use types::{AuthResponse, LoginRequest, MessageResponse, RegisterRequest};
