//! Magic link entity model and DTOs.

use sqlx::FromRow;

use atelier_core::types::{DbId, Timestamp};

/// A magic link row from the `magic_links` table.
///
/// Only the SHA-256 hex digest of the token is stored -- a database leak
/// must not yield redeemable links. A row transitions `unused -> used`
/// exactly once and is never deleted (audit retention).
#[derive(Debug, Clone, FromRow)]
pub struct MagicLink {
    pub id: DbId,
    pub admin_user_id: DbId,
    pub token_hash: String,
    pub expires_at: Timestamp,
    pub used: bool,
    pub used_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// DTO for inserting a new magic link (issuance path).
#[derive(Debug)]
pub struct CreateMagicLink {
    pub admin_user_id: DbId,
    pub token_hash: String,
    pub expires_at: Timestamp,
}
