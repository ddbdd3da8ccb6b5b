//! Access token issuing and validation
//!
//! Short-lived bearer tokens signed with HMAC-SHA-512 via the `jsonwebtoken`
//! crate. Validity is fully determined by the signature and the temporal
//! claims; tokens are never looked up in storage.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use store_core::{CustomerId, Role};

use crate::config::JwtConfig;
use crate::error::AppError;

/// Clock-skew allowance when checking `exp` (seconds)
const EXPIRY_LEEWAY_SECS: u64 = 5;

/// Claims carried by an access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject (customer id, string-encoded)
    pub sub: String,
    /// Account email
    pub email: String,
    /// Account role ("Guest"/"User"/"Admin")
    pub role: String,
    /// Issuer
    pub iss: String,
    /// Audience
    pub aud: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl AccessClaims {
    /// Get the customer id the token was issued for
    ///
    /// # Errors
    /// Returns an error if the subject cannot be parsed
    pub fn customer_id(&self) -> Result<CustomerId, AppError> {
        self.sub.parse().map_err(|_| AppError::InvalidToken)
    }

    /// Get the role claim as a domain value
    #[must_use]
    pub fn role(&self) -> Role {
        Role::from_claim(&self.role)
    }

    /// Check if the token is expired
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// Issues and validates signed access tokens
///
/// Holds the symmetric key material loaded once at startup; immutable for
/// the process lifetime.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    audience: String,
    expiration_minutes: i64,
}

impl TokenIssuer {
    /// Create a new issuer from raw settings
    #[must_use]
    pub fn new(secret_key: &str, issuer: &str, audience: &str, expiration_minutes: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret_key.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret_key.as_bytes()),
            issuer: issuer.to_string(),
            audience: audience.to_string(),
            expiration_minutes,
        }
    }

    /// Create a new issuer from loaded configuration
    #[must_use]
    pub fn from_config(config: &JwtConfig) -> Self {
        Self::new(
            &config.secret_key,
            &config.issuer,
            &config.audience,
            config.expiration_minutes,
        )
    }

    /// Sign an access token for an authenticated customer
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue(
        &self,
        customer_id: CustomerId,
        email: &str,
        role: Role,
    ) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = AccessClaims {
            sub: customer_id.to_string(),
            email: email.to_string(),
            role: role.as_str().to_string(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::minutes(self.expiration_minutes)).timestamp(),
        };

        encode(&Header::new(Algorithm::HS512), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode access token")))
    }

    /// Decode and validate an access token
    ///
    /// Checks signature, issuer, audience, and expiry (with a small
    /// clock-skew allowance).
    ///
    /// # Errors
    /// Returns `TokenExpired` for elapsed tokens, `InvalidToken` otherwise
    pub fn decode(&self, token: &str) -> Result<AccessClaims, AppError> {
        let mut validation = Validation::new(Algorithm::HS512);
        validation.leeway = EXPIRY_LEEWAY_SECS;
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);

        let token_data =
            decode::<AccessClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                    _ => AppError::InvalidToken,
                }
            })?;

        Ok(token_data.claims)
    }
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("expiration_minutes", &self.expiration_minutes)
            .finish_non_exhaustive()
    }
}
