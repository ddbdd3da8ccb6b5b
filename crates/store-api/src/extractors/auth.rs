//! Authentication extractors
//!
//! Extract and validate access tokens from the Authorization header. These
//! are the verification counterpart of the token issuer: signature, issuer,
//! audience, and expiry are all enforced before a handler sees the identity.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use store_core::{CustomerId, Role};

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated identity extracted from a bearer token
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Customer id from the token subject
    pub customer_id: CustomerId,
    /// Email claim
    pub email: String,
    /// Role claim
    pub role: Role,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Extract the Authorization header
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        // Get the app state to access the token issuer
        let app_state = AppState::from_ref(state);

        // Validate the token
        let claims = app_state.token_issuer().decode(bearer.token()).map_err(|e| {
            tracing::warn!(error = %e, "Invalid access token");
            ApiError::App(e)
        })?;

        // Extract the identity from the claims
        let customer_id = claims.customer_id().map_err(|e| {
            tracing::warn!(error = %e, "Invalid customer id in token");
            ApiError::InvalidAuthFormat
        })?;
        let role = claims.role();

        Ok(AuthUser {
            customer_id,
            email: claims.email,
            role,
        })
    }
}

/// Authenticated identity that must carry the Admin role
///
/// Rejects with 403 when a valid token belongs to a non-admin account.
#[derive(Debug, Clone)]
pub struct AdminUser(pub AuthUser);

#[async_trait]
impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;

        if !user.role.is_admin() {
            tracing::warn!(customer_id = %user.customer_id, "Admin endpoint rejected non-admin token");
            return Err(ApiError::App(store_common::AppError::InsufficientPermissions));
        }

        Ok(AdminUser(user))
    }
}
