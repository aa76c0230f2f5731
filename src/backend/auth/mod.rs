/**
 * Authentication Module
 *
 * Account registration, login, logout and access-token refresh.
 *
 * # Components
 *
 * - **`users`** - stored user record and its public projection
 * - **`password`** - bcrypt hashing on the blocking pool
 * - **`sessions`** - signed, time-limited tokens
 * - **`cookies`** - the `refreshToken` cookie
 * - **`flow`** - `AuthService`, the HTTP-independent auth operations
 * - **`handlers`** - Axum handlers for the `/api/auth` routes
 *
 * # Token Lifetimes
 *
 * Access tokens are short-lived and sent as `Authorization: Bearer`. Refresh
 * tokens are long-lived and only ever travel in an HTTP-only cookie.
 */

pub mod cookies;
pub mod flow;
pub mod handlers;
pub mod password;
pub mod sessions;
pub mod users;

pub use flow::{AuthService, Session};
pub use handlers::{login, logout, refresh, register};
pub use users::PublicUser;
