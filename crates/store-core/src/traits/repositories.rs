//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Credential, Customer, NewCustomer, RefreshToken};
use crate::error::DomainError;
use crate::value_objects::CustomerId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Customer Repository
// ============================================================================

/// Access to the customer profiles owned by the wider platform.
///
/// The auth subsystem only creates the owning row at registration and looks
/// profiles up by id; everything else about customers lives elsewhere.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Insert a new customer profile, returning the store-assigned id
    async fn create(&self, customer: &NewCustomer) -> RepoResult<CustomerId>;

    /// Find a customer by id
    async fn find_by_id(&self, id: CustomerId) -> RepoResult<Option<Customer>>;
}

// ============================================================================
// Credential Repository
// ============================================================================

#[async_trait]
pub trait CredentialRepository: Send + Sync {
    /// Find a credential by the unique email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Credential>>;

    /// Find a credential by the owning customer id
    async fn find_by_customer(&self, customer_id: CustomerId) -> RepoResult<Option<Credential>>;

    /// Check if an email is already registered
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new credential row
    async fn create(&self, credential: &Credential) -> RepoResult<()>;

    /// Replace the password hash and salt, marking the password as updated
    async fn update_password(
        &self,
        customer_id: CustomerId,
        password_hash: &str,
        password_salt: &str,
    ) -> RepoResult<()>;

    /// List every credential (admin surface)
    async fn list(&self) -> RepoResult<Vec<Credential>>;
}

// ============================================================================
// Refresh Token Repository
// ============================================================================

#[async_trait]
pub trait RefreshTokenRepository: Send + Sync {
    /// Find a token row by its opaque value
    async fn find_by_token(&self, token: &str) -> RepoResult<Option<RefreshToken>>;

    /// Find the single token row for a customer, if any
    async fn find_by_customer(&self, customer_id: CustomerId)
        -> RepoResult<Option<RefreshToken>>;

    /// Insert or rotate-in-place the customer's single token row.
    ///
    /// When a row already exists for the customer, the store replaces the
    /// token value and timestamps, clears the revoked flag, and increments
    /// the rotation counter; the counter carried by `token` is only used on
    /// the insert path.
    async fn upsert(&self, token: &RefreshToken) -> RepoResult<()>;

    /// Mark the row holding this value revoked.
    ///
    /// Revoking an unknown or already-revoked value is a no-op, not an error.
    async fn revoke(&self, token: &str) -> RepoResult<()>;
}
