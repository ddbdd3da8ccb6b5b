//! Credential database model

use sqlx::FromRow;

/// Database model for the user_credentials table
#[derive(Debug, Clone, FromRow)]
pub struct CredentialModel {
    pub customer_id: i64,
    pub email: String,
    pub password_hash: String,
    pub password_salt: String,
    pub role: i16,
    pub password_updated: bool,
}
