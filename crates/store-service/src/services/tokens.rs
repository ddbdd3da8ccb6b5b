//! Refresh token manager
//!
//! Generates, persists, rotates, and revokes the long-lived opaque tokens
//! that anchor a session server-side. Storing these in the database (rather
//! than trusting a stateless long-lived JWT) is what makes logout-revocation
//! immediate and rotation reuse detectable, at the cost of one round trip
//! per refresh.

use std::sync::Arc;

use tracing::{debug, instrument};

use store_common::auth::generate_refresh_token_value;
use store_common::AppError;
use store_core::entities::RefreshToken;
use store_core::traits::RefreshTokenRepository;
use store_core::value_objects::CustomerId;

use super::error::ServiceResult;

/// Manages the single live refresh token per customer
#[derive(Clone)]
pub struct RefreshTokenManager {
    repo: Arc<dyn RefreshTokenRepository>,
}

impl RefreshTokenManager {
    /// Create a new manager over a token repository
    pub fn new(repo: Arc<dyn RefreshTokenRepository>) -> Self {
        Self { repo }
    }

    /// Mint a fresh opaque value for the customer and persist it.
    ///
    /// First call for a customer inserts the row; subsequent calls rotate it
    /// in place, which permanently invalidates the previously issued value.
    #[instrument(skip(self))]
    pub async fn establish(&self, customer_id: CustomerId) -> ServiceResult<String> {
        let value = generate_refresh_token_value();
        let token = RefreshToken::issue(customer_id, value.clone());
        self.repo.upsert(&token).await?;

        debug!(customer_id = %customer_id, "Refresh token established");
        Ok(value)
    }

    /// Resolve an opaque value to its owning customer.
    ///
    /// Unknown, revoked, and expired values are indistinguishable to the
    /// caller; all map to the same rejection.
    #[instrument(skip(self, value))]
    pub async fn validate(&self, value: &str) -> ServiceResult<CustomerId> {
        let token = self
            .repo
            .find_by_token(value)
            .await?
            .ok_or(AppError::RefreshTokenInvalid)?;

        if !token.is_valid() {
            debug!(customer_id = %token.customer_id, revoked = token.revoked, "Refresh token rejected");
            return Err(AppError::RefreshTokenInvalid.into());
        }

        Ok(token.customer_id)
    }

    /// Revoke the row holding this value, if any.
    ///
    /// Idempotent: revoking twice, or revoking a value that never existed,
    /// succeeds without surfacing an error.
    #[instrument(skip(self, value))]
    pub async fn revoke(&self, value: &str) -> ServiceResult<()> {
        self.repo.revoke(value).await?;
        Ok(())
    }
}

impl std::fmt::Debug for RefreshTokenManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshTokenManager").finish_non_exhaustive()
    }
}
