pub mod auth;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/redeem     exchange a magic-link token for a session (public)
/// /auth/validate   validate a session token (public)
/// /auth/logout     revoke a session (public, idempotent)
/// /auth/me         authenticated admin summary (requires Bearer session)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/auth", auth::router())
}
