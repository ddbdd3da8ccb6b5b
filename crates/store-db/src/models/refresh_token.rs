//! Refresh token database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the refresh_tokens table
///
/// Keyed by customer_id: the upsert in the repository keeps at most one row
/// per customer alive.
#[derive(Debug, Clone, FromRow)]
pub struct RefreshTokenModel {
    pub customer_id: i64,
    pub token: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub revoked: bool,
    pub modified_at: DateTime<Utc>,
    pub total_refreshes: i32,
}

impl RefreshTokenModel {
    /// Check if token is expired
    #[inline]
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    /// Check if token is valid (not revoked and not expired)
    #[inline]
    pub fn is_valid(&self) -> bool {
        !self.revoked && !self.is_expired()
    }
}
