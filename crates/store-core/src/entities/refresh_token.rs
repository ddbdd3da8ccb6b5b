//! Refresh token entity - the single revocable session record per customer

use chrono::{DateTime, Duration, Utc};

use crate::value_objects::CustomerId;

/// Lifetime of a refresh token from issue or rotation
pub const REFRESH_TOKEN_TTL_DAYS: i64 = 7;

/// Server-side refresh token state
///
/// At most one row exists per customer; rotation replaces the value in
/// place and `total_refreshes` counts how many rotations the row has seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshToken {
    pub customer_id: CustomerId,
    pub token: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub revoked: bool,
    pub modified_at: DateTime<Utc>,
    pub total_refreshes: i32,
}

impl RefreshToken {
    /// Build a fresh token record for a customer from an opaque value.
    ///
    /// Expiry is seven days out; the rotation counter starts at zero and is
    /// advanced by the store on each in-place replacement.
    pub fn issue(customer_id: CustomerId, token: String) -> Self {
        let now = Utc::now();
        Self {
            customer_id,
            token,
            created_at: now,
            expires_at: now + Duration::days(REFRESH_TOKEN_TTL_DAYS),
            revoked: false,
            modified_at: now,
            total_refreshes: 0,
        }
    }

    /// Check if the token has passed its expiry
    #[inline]
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    /// Check if the token is still acceptable (not revoked, not expired)
    #[inline]
    pub fn is_valid(&self) -> bool {
        !self.revoked && !self.is_expired()
    }
}
