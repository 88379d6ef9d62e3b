//! Repository for the `magic_links` table.

use sqlx::PgPool;

use atelier_core::types::{DbId, Timestamp};

use crate::models::magic_link::{CreateMagicLink, MagicLink};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, admin_user_id, token_hash, expires_at, used, used_at, created_at";

/// Provides operations for one-time magic links.
pub struct MagicLinkRepo;

impl MagicLinkRepo {
    /// Insert a new magic link, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateMagicLink) -> Result<MagicLink, sqlx::Error> {
        let query = format!(
            "INSERT INTO magic_links (admin_user_id, token_hash, expires_at)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MagicLink>(&query)
            .bind(input.admin_user_id)
            .bind(&input.token_hash)
            .bind(input.expires_at)
            .fetch_one(pool)
            .await
    }

    /// Point lookup of an unused link by its token digest.
    ///
    /// Used, unknown, and malformed tokens are all absent from this query's
    /// result; the caller reports them as one indistinguishable failure.
    pub async fn find_unused_by_token_hash(
        pool: &PgPool,
        token_hash: &str,
    ) -> Result<Option<MagicLink>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM magic_links
             WHERE token_hash = $1 AND used = false"
        );
        sqlx::query_as::<_, MagicLink>(&query)
            .bind(token_hash)
            .fetch_optional(pool)
            .await
    }

    /// Atomically mark a link used, guarded on it still being unused.
    ///
    /// Returns `true` only for the caller that actually flipped the flag.
    /// Two concurrent redemptions of the same link race on this UPDATE and
    /// exactly one observes `rows_affected == 1`; the loser must fail
    /// closed. Never split this into a read followed by a write.
    pub async fn consume(pool: &PgPool, id: DbId, now: Timestamp) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE magic_links SET used = true, used_at = $2
             WHERE id = $1 AND used = false",
        )
        .bind(id)
        .bind(now)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
