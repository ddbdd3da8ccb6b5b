//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests. Emails embed the
//! process id so repeated runs against a persistent database never collide.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> String {
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    format!("{}-{}", std::process::id(), n)
}

/// Registration request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            first_name: "Test".to_string(),
            last_name: format!("Customer{suffix}"),
            middle_name: None,
            email: format!("test{suffix}@example.com"),
            password: "Secret123!".to_string(),
            phone: None,
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }

    pub fn wrong_password(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: "Wrong456!".to_string(),
        }
    }
}

/// Password reset request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordResetRequest {
    pub email: String,
    pub new_password: String,
}

/// Login/register response body
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub message: String,
    pub token: String,
}

/// Refresh response body
#[derive(Debug, Deserialize)]
pub struct TokenOnlyResponse {
    pub token: String,
}

/// Message-only response body
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error body
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

/// Transitional password-update signal body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordUpdateResponse {
    pub requires_password_update: bool,
}

/// Identity response from /api/auth/me
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityResponse {
    pub customer_id: String,
    pub email: String,
    pub role: String,
}

/// Admin credential summary
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialSummary {
    pub customer_id: String,
    pub email: String,
    pub role: String,
    pub password_updated: bool,
}
