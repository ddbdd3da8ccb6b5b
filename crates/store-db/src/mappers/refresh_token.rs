//! Refresh token entity <-> model mapper

use store_core::entities::RefreshToken;
use store_core::value_objects::CustomerId;

use crate::models::RefreshTokenModel;

/// Convert RefreshTokenModel to RefreshToken entity
impl From<RefreshTokenModel> for RefreshToken {
    fn from(model: RefreshTokenModel) -> Self {
        RefreshToken {
            customer_id: CustomerId::new(model.customer_id),
            token: model.token,
            created_at: model.created_at,
            expires_at: model.expires_at,
            revoked: model.revoked,
            modified_at: model.modified_at,
            total_refreshes: model.total_refreshes,
        }
    }
}
