//! Handlers for the `/auth` resource (redeem, validate, logout, me).

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use atelier_core::types::Timestamp;

use crate::auth::session::{self, ClientInfo, CurrentAdmin};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/redeem`.
#[derive(Debug, Deserialize)]
pub struct RedeemRequest {
    pub token: String,
}

/// Request body for `POST /auth/validate`.
#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub session_token: String,
}

/// Request body for `POST /auth/logout`.
#[derive(Debug, Deserialize)]
pub struct LogoutRequest {
    pub session_token: String,
}

/// Successful redemption response.
#[derive(Debug, Serialize)]
pub struct RedeemResponse {
    pub session_token: String,
    pub expires_at: Timestamp,
    pub user: CurrentAdmin,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/redeem
///
/// Exchange a one-time magic-link token for a session credential.
pub async fn redeem(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(input): Json<RedeemRequest>,
) -> AppResult<Json<RedeemResponse>> {
    // Reject blank input before touching the store.
    if input.token.trim().is_empty() {
        return Err(AppError::BadRequest("token must not be empty".into()));
    }

    let client = client_info(&headers);
    let now = Utc::now();

    let credential = session::redeem_magic_link(&state.pool, &input.token, client, now).await?;

    Ok(Json(RedeemResponse {
        session_token: credential.token,
        expires_at: credential.expires_at,
        user: credential.admin,
    }))
}

/// POST /api/v1/auth/validate
///
/// Validate a session token and return the admin summary. Touches the
/// session's `last_accessed_at`; never extends its expiry.
pub async fn validate(
    State(state): State<AppState>,
    Json(input): Json<ValidateRequest>,
) -> AppResult<Json<DataResponse<CurrentAdmin>>> {
    if input.session_token.trim().is_empty() {
        return Err(AppError::BadRequest("session_token must not be empty".into()));
    }

    let admin = session::validate_session(&state.pool, &input.session_token, Utc::now()).await?;

    Ok(Json(DataResponse { data: admin }))
}

/// POST /api/v1/auth/logout
///
/// Revoke the session. Returns 204 No Content whether or not the token
/// matched anything: logout is idempotent and never fails visibly.
pub async fn logout(
    State(state): State<AppState>,
    Json(input): Json<LogoutRequest>,
) -> AppResult<StatusCode> {
    if input.session_token.trim().is_empty() {
        return Err(AppError::BadRequest("session_token must not be empty".into()));
    }

    session::revoke_session(&state.pool, &input.session_token).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/auth/me
///
/// Return the authenticated admin's summary. This is the per-request
/// validation path every admin endpoint goes through via [`AuthAdmin`].
pub async fn me(AuthAdmin(admin): AuthAdmin) -> AppResult<Json<DataResponse<CurrentAdmin>>> {
    Ok(Json(DataResponse { data: admin }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Extract audit-only client metadata from request headers.
///
/// The origin IP is taken from the first `x-forwarded-for` hop when
/// present; both fields are optional and never influence auth decisions.
fn client_info(headers: &HeaderMap) -> ClientInfo {
    let ip_address = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    let user_agent = headers
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string())
        .filter(|v| !v.is_empty());

    ClientInfo {
        ip_address,
        user_agent,
    }
}
