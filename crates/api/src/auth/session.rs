//! Magic-link redemption and the session lifecycle.
//!
//! These functions are the single authentication path shared by the HTTP
//! handlers and the [`AuthAdmin`](crate::middleware::auth::AuthAdmin)
//! extractor. All state lives in the store; each operation is a function of
//! (inputs, pool) and is safe under arbitrary concurrent invocation --
//! the only cross-request synchronization point is the database itself.
//!
//! Callers read the clock once per request and pass `now` in, so every
//! expiry decision within one request agrees with itself.

use serde::Serialize;

use atelier_core::auth::{self, AuthError, LinkDecision, SessionDecision};
use atelier_core::types::{DbId, Timestamp};
use atelier_db::models::admin_user::AdminUser;
use atelier_db::models::session::CreateSession;
use atelier_db::repositories::{AdminUserRepo, MagicLinkRepo, SessionRepo};
use atelier_db::DbPool;

use crate::auth::token::{generate_session_token, hash_token};
use crate::error::AppResult;

/// Minimal admin summary returned with credentials and by validation.
#[derive(Debug, Clone, Serialize)]
pub struct CurrentAdmin {
    pub id: DbId,
    pub email: String,
    pub name: String,
    pub role: String,
}

impl From<&AdminUser> for CurrentAdmin {
    fn from(user: &AdminUser) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role.clone(),
        }
    }
}

/// Client metadata captured at session creation, audit only.
#[derive(Debug, Clone, Default)]
pub struct ClientInfo {
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

/// A freshly minted session credential.
#[derive(Debug)]
pub struct SessionCredential {
    /// Plaintext bearer token; shown to the client exactly once.
    pub token: String,
    pub expires_at: Timestamp,
    pub admin: CurrentAdmin,
}

/// Exchange a one-time magic-link token for a session credential.
///
/// Unknown, already-used, and malformed tokens all fail with
/// [`AuthError::InvalidToken`] -- callers cannot probe which case occurred.
/// An expired-but-unused link fails with the distinct
/// [`AuthError::ExpiredToken`], which reveals nothing its owner does not
/// already know.
pub async fn redeem_magic_link(
    pool: &DbPool,
    token: &str,
    client: ClientInfo,
    now: Timestamp,
) -> AppResult<SessionCredential> {
    // 1. Point lookup of an unused link by token digest.
    let link = match MagicLinkRepo::find_unused_by_token_hash(pool, &hash_token(token)).await? {
        Some(link) => link,
        None => {
            tracing::warn!("Magic link redemption failed: token unknown or already used");
            return Err(AuthError::InvalidToken.into());
        }
    };

    // 2. Reject expired links, even though they are unused.
    if let LinkDecision::Expired = auth::check_link(link.expires_at, now) {
        tracing::warn!(
            link_id = link.id,
            admin_user_id = link.admin_user_id,
            expires_at = %link.expires_at,
            "Magic link redemption failed: link expired"
        );
        return Err(AuthError::ExpiredToken.into());
    }

    // 3. Account Gate: the owner must exist and be active right now.
    let admin = AdminUserRepo::find_by_id(pool, link.admin_user_id).await?;
    let admin = match admin {
        Some(admin) if admin.is_active => admin,
        _ => {
            tracing::warn!(
                link_id = link.id,
                admin_user_id = link.admin_user_id,
                "Magic link redemption failed: account missing or deactivated"
            );
            return Err(AuthError::AccountInactive.into());
        }
    };

    // 4. Atomically consume the link. Under concurrent redemption of the
    //    same token exactly one caller wins this conditional update; the
    //    loser fails closed with the same error as a replayed token.
    if !MagicLinkRepo::consume(pool, link.id, now).await? {
        tracing::warn!(
            link_id = link.id,
            admin_user_id = link.admin_user_id,
            "Magic link redemption failed: lost consume race"
        );
        return Err(AuthError::InvalidToken.into());
    }

    // 5. Mint the session.
    let credential = create_session(pool, &admin, client, now).await?;

    // 6. Record the login timestamp. Best-effort: the login already
    //    succeeded, so a failure here is logged and swallowed.
    if let Err(err) = AdminUserRepo::record_login(pool, admin.id, now).await {
        tracing::warn!(
            admin_user_id = admin.id,
            error = %err,
            "Failed to record last login timestamp"
        );
    }

    tracing::info!(
        link_id = link.id,
        admin_user_id = admin.id,
        "Magic link redeemed"
    );

    Ok(credential)
}

/// Mint a new session for an admin user.
///
/// Expiry is fixed at `now + SESSION_TTL_HOURS` and never extended.
pub async fn create_session(
    pool: &DbPool,
    admin: &AdminUser,
    client: ClientInfo,
    now: Timestamp,
) -> AppResult<SessionCredential> {
    let (token, token_hash) = generate_session_token();
    let expires_at = auth::session_expiry(now);

    let input = CreateSession {
        admin_user_id: admin.id,
        token_hash,
        expires_at,
        ip_address: client.ip_address,
        user_agent: client.user_agent,
    };
    let session = SessionRepo::create(pool, &input).await?;

    tracing::info!(
        session_id = session.id,
        admin_user_id = admin.id,
        expires_at = %expires_at,
        "Session created"
    );

    Ok(SessionCredential {
        token,
        expires_at: session.expires_at,
        admin: admin.into(),
    })
}

/// Validate a bearer session token and return its admin summary.
///
/// Staleness discovered here (expiry, owner deactivated) is written back to
/// the store by flipping `is_active`, so stored state converges to inactive
/// instead of depending on the expiry check alone. A valid session gets its
/// `last_accessed_at` touched; expiry is never extended.
pub async fn validate_session(
    pool: &DbPool,
    token: &str,
    now: Timestamp,
) -> AppResult<CurrentAdmin> {
    // 1. Point lookup by digest, including revoked and expired rows.
    let session = match SessionRepo::find_by_token_hash(pool, &hash_token(token)).await? {
        Some(session) => session,
        None => {
            tracing::warn!("Session validation failed: token unknown");
            return Err(AuthError::InvalidSession.into());
        }
    };

    // 2. Account Gate: re-read the live owner row on every validation.
    //    An owner row that has vanished is treated as deactivated.
    let Some(owner) = AdminUserRepo::find_by_id(pool, session.admin_user_id).await? else {
        SessionRepo::deactivate(pool, session.id).await?;
        tracing::warn!(
            session_id = session.id,
            admin_user_id = session.admin_user_id,
            "Session validation failed: owner row missing"
        );
        return Err(AuthError::AccountInactive.into());
    };

    // 3. Evaluate, then persist any discovered staleness.
    match auth::check_session(session.is_active, session.expires_at, owner.is_active, now) {
        SessionDecision::Valid => {
            SessionRepo::touch(pool, session.id, now).await?;
            Ok(CurrentAdmin::from(&owner))
        }
        SessionDecision::Revoked => {
            tracing::warn!(
                session_id = session.id,
                admin_user_id = owner.id,
                "Session validation failed: session revoked"
            );
            Err(AuthError::InvalidSession.into())
        }
        SessionDecision::Expired => {
            SessionRepo::deactivate(pool, session.id).await?;
            tracing::warn!(
                session_id = session.id,
                admin_user_id = owner.id,
                expires_at = %session.expires_at,
                "Session validation failed: session expired"
            );
            Err(AuthError::SessionExpired.into())
        }
        SessionDecision::OwnerInactive => {
            SessionRepo::deactivate(pool, session.id).await?;
            tracing::warn!(
                session_id = session.id,
                admin_user_id = owner.id,
                "Session validation failed: account deactivated"
            );
            Err(AuthError::AccountInactive.into())
        }
    }
}

/// Revoke the session matching `token` (logout).
///
/// Idempotent and unconditional: revoking an already-inactive or unknown
/// session is still a success. Logout must never fail visibly.
pub async fn revoke_session(pool: &DbPool, token: &str) -> AppResult<()> {
    SessionRepo::revoke_by_token_hash(pool, &hash_token(token)).await?;
    tracing::info!("Session revoked");
    Ok(())
}
