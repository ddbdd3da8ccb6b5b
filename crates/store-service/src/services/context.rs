//! Service context - dependency container for services
//!
//! Holds the repositories and auth primitives the session protocol needs.
//! Repositories are trait objects so service tests can run against
//! in-memory implementations without a database.

use std::sync::Arc;

use store_common::auth::TokenIssuer;
use store_core::traits::{CredentialRepository, CustomerRepository, RefreshTokenRepository};

use super::tokens::RefreshTokenManager;

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    customer_repo: Arc<dyn CustomerRepository>,
    credential_repo: Arc<dyn CredentialRepository>,
    refresh_tokens: RefreshTokenManager,
    token_issuer: Arc<TokenIssuer>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        customer_repo: Arc<dyn CustomerRepository>,
        credential_repo: Arc<dyn CredentialRepository>,
        refresh_token_repo: Arc<dyn RefreshTokenRepository>,
        token_issuer: Arc<TokenIssuer>,
    ) -> Self {
        Self {
            customer_repo,
            credential_repo,
            refresh_tokens: RefreshTokenManager::new(refresh_token_repo),
            token_issuer,
        }
    }

    /// Get the customer repository
    pub fn customer_repo(&self) -> &dyn CustomerRepository {
        self.customer_repo.as_ref()
    }

    /// Get the credential repository
    pub fn credential_repo(&self) -> &dyn CredentialRepository {
        self.credential_repo.as_ref()
    }

    /// Get the refresh token manager
    pub fn refresh_tokens(&self) -> &RefreshTokenManager {
        &self.refresh_tokens
    }

    /// Get the access token issuer
    pub fn token_issuer(&self) -> &TokenIssuer {
        self.token_issuer.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("token_issuer", &self.token_issuer)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    customer_repo: Option<Arc<dyn CustomerRepository>>,
    credential_repo: Option<Arc<dyn CredentialRepository>>,
    refresh_token_repo: Option<Arc<dyn RefreshTokenRepository>>,
    token_issuer: Option<Arc<TokenIssuer>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            customer_repo: None,
            credential_repo: None,
            refresh_token_repo: None,
            token_issuer: None,
        }
    }

    pub fn customer_repo(mut self, repo: Arc<dyn CustomerRepository>) -> Self {
        self.customer_repo = Some(repo);
        self
    }

    pub fn credential_repo(mut self, repo: Arc<dyn CredentialRepository>) -> Self {
        self.credential_repo = Some(repo);
        self
    }

    pub fn refresh_token_repo(mut self, repo: Arc<dyn RefreshTokenRepository>) -> Self {
        self.refresh_token_repo = Some(repo);
        self
    }

    pub fn token_issuer(mut self, issuer: Arc<TokenIssuer>) -> Self {
        self.token_issuer = Some(issuer);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.customer_repo
                .ok_or_else(|| super::error::ServiceError::validation("customer_repo is required"))?,
            self.credential_repo
                .ok_or_else(|| super::error::ServiceError::validation("credential_repo is required"))?,
            self.refresh_token_repo
                .ok_or_else(|| super::error::ServiceError::validation("refresh_token_repo is required"))?,
            self.token_issuer
                .ok_or_else(|| super::error::ServiceError::validation("token_issuer is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
