//! Business logic services
//!
//! This module contains the service layer implementations that handle
//! the session protocol and orchestration of domain operations.

pub mod auth;
pub mod context;
pub mod error;
pub mod tokens;

// Re-export all services for convenience
pub use auth::{AuthService, AuthenticatedSession};
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use tokens::RefreshTokenManager;
