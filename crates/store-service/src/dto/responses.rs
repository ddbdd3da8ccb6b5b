//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Customer ids are
//! serialized as strings for JavaScript compatibility; wire names are
//! camelCase.

use serde::Serialize;

use store_core::entities::Credential;
use store_core::value_objects::{CustomerId, Role};

// ============================================================================
// Auth Responses
// ============================================================================

/// Login/register response: confirmation message plus the access token
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub message: String,
    pub token: String,
}

impl TokenResponse {
    pub fn new(message: impl Into<String>, token: String) -> Self {
        Self {
            message: message.into(),
            token,
        }
    }
}

/// Refresh response: only the new access token
#[derive(Debug, Serialize)]
pub struct TokenOnlyResponse {
    pub token: String,
}

/// Plain confirmation message
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ============================================================================
// Identity Responses
// ============================================================================

/// The identity carried by a validated access token
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityResponse {
    pub customer_id: CustomerId,
    pub email: String,
    pub role: String,
}

impl IdentityResponse {
    pub fn new(customer_id: CustomerId, email: String, role: Role) -> Self {
        Self {
            customer_id,
            email,
            role: role.as_str().to_string(),
        }
    }
}

/// Admin view of a credential row; never exposes hash or salt
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialSummaryResponse {
    pub customer_id: CustomerId,
    pub email: String,
    pub role: String,
    pub password_updated: bool,
}

impl From<&Credential> for CredentialSummaryResponse {
    fn from(credential: &Credential) -> Self {
        Self {
            customer_id: credential.customer_id,
            email: credential.email.clone(),
            role: credential.role.as_str().to_string(),
            password_updated: credential.password_updated,
        }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Readiness response with dependency checks
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: &'static str,
}
