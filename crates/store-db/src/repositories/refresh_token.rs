//! PostgreSQL implementation of RefreshTokenRepository
//!
//! The refresh_tokens table is keyed by customer_id, so the upsert here is
//! what enforces the one-live-token-per-customer invariant: rotating always
//! rewrites the existing row, and the previous opaque value stops matching
//! anything.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use store_core::entities::RefreshToken;
use store_core::traits::{RefreshTokenRepository, RepoResult};
use store_core::value_objects::CustomerId;

use crate::models::RefreshTokenModel;

use super::error::map_db_error;

/// PostgreSQL implementation of RefreshTokenRepository
#[derive(Clone)]
pub struct PgRefreshTokenRepository {
    pool: PgPool,
}

impl PgRefreshTokenRepository {
    /// Create a new PgRefreshTokenRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RefreshTokenRepository for PgRefreshTokenRepository {
    #[instrument(skip(self, token))]
    async fn find_by_token(&self, token: &str) -> RepoResult<Option<RefreshToken>> {
        let result = sqlx::query_as::<_, RefreshTokenModel>(
            r"
            SELECT customer_id, token, created_at, expires_at, revoked, modified_at, total_refreshes
            FROM refresh_tokens
            WHERE token = $1
            ",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(RefreshToken::from))
    }

    #[instrument(skip(self))]
    async fn find_by_customer(
        &self,
        customer_id: CustomerId,
    ) -> RepoResult<Option<RefreshToken>> {
        let result = sqlx::query_as::<_, RefreshTokenModel>(
            r"
            SELECT customer_id, token, created_at, expires_at, revoked, modified_at, total_refreshes
            FROM refresh_tokens
            WHERE customer_id = $1
            ",
        )
        .bind(customer_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(RefreshToken::from))
    }

    #[instrument(skip(self, token), fields(customer_id = %token.customer_id))]
    async fn upsert(&self, token: &RefreshToken) -> RepoResult<()> {
        // The insert path starts the rotation counter at zero; the conflict
        // path rewrites the row in place and advances the counter. Concurrent
        // upserts for the same customer are last-writer-wins by design.
        sqlx::query(
            r"
            INSERT INTO refresh_tokens
                (customer_id, token, created_at, expires_at, revoked, modified_at, total_refreshes)
            VALUES ($1, $2, $3, $4, FALSE, $5, 0)
            ON CONFLICT (customer_id) DO UPDATE
            SET token = EXCLUDED.token,
                created_at = EXCLUDED.created_at,
                expires_at = EXCLUDED.expires_at,
                revoked = FALSE,
                modified_at = EXCLUDED.modified_at,
                total_refreshes = refresh_tokens.total_refreshes + 1
            ",
        )
        .bind(token.customer_id.into_inner())
        .bind(&token.token)
        .bind(token.created_at)
        .bind(token.expires_at)
        .bind(token.modified_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, token))]
    async fn revoke(&self, token: &str) -> RepoResult<()> {
        // Zero rows affected means the value never existed or was already
        // rotated away; both are a successful no-op for the caller.
        sqlx::query(
            r"
            UPDATE refresh_tokens
            SET revoked = TRUE, modified_at = NOW()
            WHERE token = $1
            ",
        )
        .bind(token)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
