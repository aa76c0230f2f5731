/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /api/auth/register` - create an account
 * - `POST /api/auth/login` - sign in
 * - `POST /api/auth/logout` - clear the refresh cookie
 * - `POST /api/auth/refresh` - new access token from the refresh cookie
 *
 * ## Ideas
 * - `GET /api/ideas` - list, newest first, optional `_limit`
 * - `GET /api/ideas/{id}` - fetch one
 * - `POST /api/ideas` - create (requires authentication)
 * - `PUT /api/ideas/{id}` - replace (requires authentication)
 * - `DELETE /api/ideas/{id}` - delete (requires authentication)
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
    Router,
};

use crate::backend::auth::{login, logout, refresh, register};
use crate::backend::ideas::{create_idea, delete_idea, get_idea, list_ideas, update_idea};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

pub fn configure_api_routes(router: Router<AppState>, state: &AppState) -> Router<AppState> {
    let guard = from_fn_with_state(state.clone(), auth_middleware);

    router
        // Authentication endpoints
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
        .route("/api/auth/refresh", post(refresh))
        // Ideas: reads are public, writes go through the guard
        .route(
            "/api/ideas",
            get(list_ideas).merge(post(create_idea).route_layer(guard.clone())),
        )
        .route(
            "/api/ideas/{id}",
            get(get_idea).merge(
                put(update_idea)
                    .merge(delete(delete_idea))
                    .route_layer(guard),
            ),
        )
}
