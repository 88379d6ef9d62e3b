//! Session-token authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use chrono::Utc;

use atelier_core::error::CoreError;

use crate::auth::session::{validate_session, CurrentAdmin};
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated admin extracted from a Bearer session token in the
/// `Authorization` header.
///
/// Every extraction round-trips to the store: expiry, revocation, and the
/// live account-active flag are all checked per request, never cached.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication:
///
/// ```ignore
/// async fn my_handler(AuthAdmin(admin): AuthAdmin) -> AppResult<Json<()>> {
///     tracing::info!(admin_id = admin.id, role = %admin.role, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthAdmin(pub CurrentAdmin);

impl FromRequestParts<AppState> for AuthAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let admin = validate_session(&state.pool, token, Utc::now()).await?;

        Ok(AuthAdmin(admin))
    }
}
