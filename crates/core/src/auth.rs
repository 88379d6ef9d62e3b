//! Pure authentication policy for magic links and admin sessions.
//!
//! The `api` crate owns the store round-trips; this module only decides.
//! Every expiry comparison takes an explicit `now` argument so callers read
//! the clock once per request and tests can pin timestamps.

use chrono::Duration;

use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Fixed session lifetime in hours.
///
/// Sessions never slide: expiry is set once at creation and `Validate`
/// never extends it, so a leaked token has a hard upper bound on usefulness.
pub const SESSION_TTL_HOURS: i64 = 24;

/// Expiry timestamp for a session created at `now`.
pub fn session_expiry(now: Timestamp) -> Timestamp {
    now + Duration::hours(SESSION_TTL_HOURS)
}

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Authentication failure taxonomy.
///
/// Display messages are deliberately vague: a caller must not be able to
/// tell a never-issued token from an already-used one, or a deactivated
/// account from a revoked session. Operators get the precise reason from
/// server-side logs, not from these messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Magic link absent, already used, or malformed.
    #[error("Invalid login link")]
    InvalidToken,

    /// Magic link present and unused, but past its expiry.
    #[error("Login link has expired")]
    ExpiredToken,

    /// Session absent or no longer active.
    #[error("Session is not valid")]
    InvalidSession,

    /// Session present and active, but past its fixed expiry.
    #[error("Session has expired")]
    SessionExpired,

    /// The owning admin account is deactivated.
    #[error("Not authorized")]
    AccountInactive,
}

// ---------------------------------------------------------------------------
// Magic link policy
// ---------------------------------------------------------------------------

/// Outcome of checking a magic link that was found unused in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkDecision {
    /// Unexpired; redemption may proceed to the atomic consume step.
    Redeemable,
    /// Past expiry. Expired-but-unused links are rejected.
    Expired,
}

/// Decide whether an unused magic link may still be redeemed at `now`.
///
/// A link is expired from its expiry instant onward (`now >= expires_at`).
pub fn check_link(expires_at: Timestamp, now: Timestamp) -> LinkDecision {
    if now >= expires_at {
        LinkDecision::Expired
    } else {
        LinkDecision::Redeemable
    }
}

// ---------------------------------------------------------------------------
// Session policy
// ---------------------------------------------------------------------------

/// Outcome of checking a stored session row against its owner at `now`.
///
/// Checks are ordered: a revoked session reports `Revoked` even when it is
/// also past expiry, and expiry is reported before owner deactivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionDecision {
    /// Usable; the caller should touch `last_accessed_at`.
    Valid,
    /// `is_active` was already false (logout or an earlier stale-check).
    Revoked,
    /// Active but past expiry; the stored row must be flipped inactive.
    Expired,
    /// Active and unexpired, but the owning account is deactivated; the
    /// stored row must be flipped inactive.
    OwnerInactive,
}

impl SessionDecision {
    /// The caller-facing error for a non-valid decision.
    pub fn deny(self) -> Option<AuthError> {
        match self {
            Self::Valid => None,
            Self::Revoked => Some(AuthError::InvalidSession),
            Self::Expired => Some(AuthError::SessionExpired),
            Self::OwnerInactive => Some(AuthError::AccountInactive),
        }
    }
}

/// Evaluate a session row at `now`.
///
/// `owner_active` must be the live `admin_users.is_active` flag read in the
/// same request, never a value cached at session creation: deactivating an
/// administrator takes effect on their very next request.
pub fn check_session(
    is_active: bool,
    expires_at: Timestamp,
    owner_active: bool,
    now: Timestamp,
) -> SessionDecision {
    if !is_active {
        return SessionDecision::Revoked;
    }
    if now >= expires_at {
        return SessionDecision::Expired;
    }
    if !owner_active {
        return SessionDecision::OwnerInactive;
    }
    SessionDecision::Valid
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    /// Fixed reference instant used by every test.
    fn t0() -> Timestamp {
        chrono::Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_session_expiry_is_24_hours() {
        let now = t0();
        assert_eq!(session_expiry(now) - now, Duration::hours(24));
    }

    #[test]
    fn test_link_unexpired_is_redeemable() {
        let now = t0();
        let expires = now + Duration::minutes(10);
        assert_eq!(check_link(expires, now), LinkDecision::Redeemable);
    }

    #[test]
    fn test_link_expired_is_rejected() {
        let now = t0();
        let expires = now - Duration::seconds(1);
        assert_eq!(check_link(expires, now), LinkDecision::Expired);
    }

    #[test]
    fn test_link_expiry_boundary_is_expired() {
        // A link expiring exactly at `now` is already expired.
        let now = t0();
        assert_eq!(check_link(now, now), LinkDecision::Expired);
    }

    #[test]
    fn test_session_valid() {
        let now = t0();
        let expires = now + Duration::hours(12);
        let decision = check_session(true, expires, true, now);
        assert_eq!(decision, SessionDecision::Valid);
        assert_eq!(decision.deny(), None);
    }

    #[test]
    fn test_session_revoked_wins_over_expiry() {
        // A session that is both revoked and expired reports Revoked, so
        // callers keep returning the generic invalid-session error.
        let now = t0();
        let expires = now - Duration::hours(1);
        let decision = check_session(false, expires, true, now);
        assert_eq!(decision, SessionDecision::Revoked);
        assert_eq!(decision.deny(), Some(AuthError::InvalidSession));
    }

    #[test]
    fn test_session_expired() {
        let now = t0();
        let expires = now - Duration::seconds(1);
        let decision = check_session(true, expires, true, now);
        assert_eq!(decision, SessionDecision::Expired);
        assert_eq!(decision.deny(), Some(AuthError::SessionExpired));
    }

    #[test]
    fn test_session_expiry_boundary_is_expired() {
        let now = t0();
        let decision = check_session(true, now, true, now);
        assert_eq!(decision, SessionDecision::Expired);
    }

    #[test]
    fn test_session_owner_inactive() {
        let now = t0();
        let expires = now + Duration::hours(1);
        let decision = check_session(true, expires, false, now);
        assert_eq!(decision, SessionDecision::OwnerInactive);
        assert_eq!(decision.deny(), Some(AuthError::AccountInactive));
    }

    #[test]
    fn test_expiry_is_checked_before_owner_flag() {
        // Expired session of a deactivated owner reports Expired.
        let now = t0();
        let expires = now - Duration::hours(1);
        assert_eq!(
            check_session(true, expires, false, now),
            SessionDecision::Expired
        );
    }
}
