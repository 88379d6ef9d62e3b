//! Admin session model and DTOs.

use sqlx::FromRow;

use atelier_core::types::{DbId, Timestamp};

/// A session row from the `sessions` table.
///
/// Only the SHA-256 hex digest of the bearer token is stored. `expires_at`
/// is fixed at creation and never extended; `last_accessed_at` is touched
/// on every successful validation for the audit trail. Rows outlive logout.
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub id: DbId,
    pub admin_user_id: DbId,
    pub token_hash: String,
    pub expires_at: Timestamp,
    pub is_active: bool,
    pub last_accessed_at: Timestamp,
    /// Client origin IP captured at creation, audit only.
    pub ip_address: Option<String>,
    /// Client user agent captured at creation, audit only.
    pub user_agent: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new session.
#[derive(Debug)]
pub struct CreateSession {
    pub admin_user_id: DbId,
    pub token_hash: String,
    pub expires_at: Timestamp,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}
