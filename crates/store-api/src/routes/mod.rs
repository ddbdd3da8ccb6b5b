//! Route definitions
//!
//! Auth routes mounted under /api/auth, health probes at the root.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{auth, credentials, health};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/auth", auth_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/refresh", post(auth::refresh))
        .route("/logout", post(auth::logout))
        .route("/passwordreset", post(auth::password_reset))
        .route("/me", get(auth::me))
        .route("/credentials", get(credentials::list_credentials))
}
