//! Credential entity <-> model mapper

use store_core::entities::Credential;
use store_core::value_objects::{CustomerId, Role};

use crate::models::CredentialModel;

/// Convert CredentialModel to Credential entity
impl From<CredentialModel> for Credential {
    fn from(model: CredentialModel) -> Self {
        Credential {
            customer_id: CustomerId::new(model.customer_id),
            email: model.email,
            password_hash: model.password_hash,
            password_salt: model.password_salt,
            role: Role::from_stored(model.role),
            password_updated: model.password_updated,
        }
    }
}
