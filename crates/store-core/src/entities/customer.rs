//! Customer entity - the identity owning a credential
//!
//! The wider platform owns the full customer profile (addresses, orders,
//! carts); the auth subsystem only creates the row at registration and
//! reads the id back.

use chrono::{DateTime, Utc};

use crate::value_objects::CustomerId;

/// Customer profile as the auth subsystem sees it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Customer {
    /// Full display name, middle name included when present
    pub fn full_name(&self) -> String {
        match &self.middle_name {
            Some(middle) => format!("{} {} {}", self.first_name, middle, self.last_name),
            None => format!("{} {}", self.first_name, self.last_name),
        }
    }
}

/// Profile fields collected at registration; the store assigns the id
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
}
