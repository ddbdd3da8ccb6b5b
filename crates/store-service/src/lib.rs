//! # store-service
//!
//! Application layer containing the session protocol, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    CredentialSummaryResponse, LoginRequest, MessageResponse, PasswordResetRequest,
    RegisterRequest, TokenOnlyResponse, TokenResponse,
};
pub use services::{
    AuthService, AuthenticatedSession, RefreshTokenManager, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult,
};
