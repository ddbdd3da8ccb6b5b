//! Account credential - per-customer login record

use crate::value_objects::{CustomerId, Role};

/// Login credential owned by a customer
///
/// `password_updated` stays false for accounts that still carry a password
/// set before the current hashing scheme; a failed login against such an
/// account signals the client to force a reset instead of rejecting outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub customer_id: CustomerId,
    pub email: String,
    pub password_hash: String,
    pub password_salt: String,
    pub role: Role,
    pub password_updated: bool,
}

impl Credential {
    /// Create a credential for a freshly registered account.
    ///
    /// New registrations never carry a legacy password, so they start with
    /// `password_updated` already set.
    pub fn new(
        customer_id: CustomerId,
        email: String,
        password_hash: String,
        password_salt: String,
        role: Role,
    ) -> Self {
        Self {
            customer_id,
            email,
            password_hash,
            password_salt,
            role,
            password_updated: true,
        }
    }

    /// Whether a failed password check should surface the reset-required
    /// signal rather than a hard authentication failure
    #[inline]
    pub fn requires_password_update(&self) -> bool {
        !self.password_updated
    }
}
