//! Account role - closed enumeration at the domain boundary
//!
//! Stored as SMALLINT (2 = User, 3 = Admin, anything else decodes Guest) and
//! carried as a string claim ("Guest"/"User"/"Admin") in access tokens. The
//! conversions live here so the wire representations never leak into the
//! domain logic.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role attached to an account credential
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Role {
    #[default]
    Guest,
    User,
    Admin,
}

impl Role {
    /// Decode from the stored small-integer representation.
    ///
    /// Unknown values fall back to Guest rather than failing, matching the
    /// store's historical contents.
    #[must_use]
    pub fn from_stored(value: i16) -> Self {
        match value {
            2 => Self::User,
            3 => Self::Admin,
            _ => Self::Guest,
        }
    }

    /// Encode to the stored small-integer representation
    #[must_use]
    pub fn as_stored(self) -> i16 {
        match self {
            Self::Guest => 1,
            Self::User => 2,
            Self::Admin => 3,
        }
    }

    /// Claim string carried in access tokens
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Guest => "Guest",
            Self::User => "User",
            Self::Admin => "Admin",
        }
    }

    /// Decode from a claim string; unknown strings decode Guest
    #[must_use]
    pub fn from_claim(value: &str) -> Self {
        match value {
            "User" => Self::User,
            "Admin" => Self::Admin,
            _ => Self::Guest,
        }
    }

    /// Check if this role grants access to admin-only endpoints
    #[inline]
    #[must_use]
    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
