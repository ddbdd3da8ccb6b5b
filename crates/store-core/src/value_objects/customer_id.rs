//! Customer ID - 64-bit identifier assigned by the database sequence
//!
//! Serialized as a string in JSON bodies and token claims (JavaScript
//! number-precision safety), stored as BIGINT in PostgreSQL.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Identifier of the customer owning a credential and refresh token
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CustomerId(i64);

impl CustomerId {
    /// Create a new CustomerId from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Check if the id is zero (not yet assigned by the store)
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Parse from string representation
    pub fn parse(s: &str) -> Result<Self, CustomerIdParseError> {
        s.parse::<i64>()
            .map(CustomerId)
            .map_err(|_| CustomerIdParseError::InvalidFormat)
    }
}

/// Error when parsing a CustomerId from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CustomerIdParseError {
    #[error("invalid customer id format")]
    InvalidFormat,
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for CustomerId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<CustomerId> for i64 {
    fn from(id: CustomerId) -> Self {
        id.0
    }
}

impl std::str::FromStr for CustomerId {
    type Err = CustomerIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CustomerId::parse(s)
    }
}

// Serialize as string for JSON (JavaScript BigInt safety)
impl Serialize for CustomerId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

// Deserialize from string or number
impl<'de> Deserialize<'de> for CustomerId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct CustomerIdVisitor;

        impl<'de> Visitor<'de> for CustomerIdVisitor {
            type Value = CustomerId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or integer representing a customer id")
            }

            fn visit_i64<E>(self, value: i64) -> Result<CustomerId, E>
            where
                E: de::Error,
            {
                Ok(CustomerId(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<CustomerId, E>
            where
                E: de::Error,
            {
                Ok(CustomerId(value as i64))
            }

            fn visit_str<E>(self, value: &str) -> Result<CustomerId, E>
            where
                E: de::Error,
            {
                value
                    .parse::<i64>()
                    .map(CustomerId)
                    .map_err(|_| de::Error::custom("invalid customer id string"))
            }
        }

        deserializer.deserialize_any(CustomerIdVisitor)
    }
}
