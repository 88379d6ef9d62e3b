//! Route definitions for the `/auth` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/auth`.
///
/// ```text
/// POST /redeem    -> redeem
/// POST /validate  -> validate
/// POST /logout    -> logout
/// GET  /me        -> me (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/redeem", post(auth::redeem))
        .route("/validate", post(auth::validate))
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me))
}
