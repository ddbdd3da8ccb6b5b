//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in store-core.
//! Each repository handles database operations for a specific domain entity.

mod credential;
mod customer;
mod error;
mod refresh_token;

pub use credential::PgCredentialRepository;
pub use customer::PgCustomerRepository;
pub use refresh_token::PgRefreshTokenRepository;
