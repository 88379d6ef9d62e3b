//! Repository for the `sessions` table.

use sqlx::PgPool;

use atelier_core::types::{DbId, Timestamp};

use crate::models::session::{CreateSession, Session};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, admin_user_id, token_hash, expires_at, is_active, \
                        last_accessed_at, ip_address, user_agent, created_at, updated_at";

/// Provides operations for admin sessions.
pub struct SessionRepo;

impl SessionRepo {
    /// Insert a new active session, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSession) -> Result<Session, sqlx::Error> {
        let query = format!(
            "INSERT INTO sessions (admin_user_id, token_hash, expires_at, ip_address, user_agent)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(input.admin_user_id)
            .bind(&input.token_hash)
            .bind(input.expires_at)
            .bind(&input.ip_address)
            .bind(&input.user_agent)
            .fetch_one(pool)
            .await
    }

    /// Point lookup by token digest, with no state filters.
    ///
    /// Revoked and expired rows are returned too: validation distinguishes
    /// those cases itself and writes staleness back to the store.
    pub async fn find_by_token_hash(
        pool: &PgPool,
        token_hash: &str,
    ) -> Result<Option<Session>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sessions WHERE token_hash = $1");
        sqlx::query_as::<_, Session>(&query)
            .bind(token_hash)
            .fetch_optional(pool)
            .await
    }

    /// Mark a session inactive by ID.
    ///
    /// Used when validation discovers staleness (expiry, owner deactivated)
    /// so the stored state converges to inactive rather than relying on the
    /// expiry check alone.
    pub async fn deactivate(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE sessions SET is_active = false WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Unconditionally mark the matching session inactive (logout).
    ///
    /// Idempotent by construction: already-inactive and nonexistent rows
    /// leave the store in the same state as a live revocation.
    pub async fn revoke_by_token_hash(pool: &PgPool, token_hash: &str) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE sessions SET is_active = false WHERE token_hash = $1")
            .bind(token_hash)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Update `last_accessed_at` on a validated session.
    ///
    /// This is the audit "touch"; it never moves `expires_at`.
    pub async fn touch(pool: &PgPool, id: DbId, now: Timestamp) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE sessions SET last_accessed_at = $2 WHERE id = $1")
            .bind(id)
            .bind(now)
            .execute(pool)
            .await?;
        Ok(())
    }
}
