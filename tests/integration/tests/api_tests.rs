//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, mark_password_not_updated,
    promote_to_admin, refresh_cookie_value, refresh_token_row, refresh_token_row_count,
    TestServer,
};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Register
// ============================================================================

#[tokio::test]
async fn test_register_returns_token_and_cookie() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/auth/register", &request).await.unwrap();
    let cookie = refresh_cookie_value(&response);
    let body: TokenResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(!body.token.is_empty());
    assert!(!body.message.is_empty());

    // Implicit login: the refresh cookie is already established
    let cookie = cookie.expect("register should set the refresh cookie");
    assert!(!cookie.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    // First registration
    server.post("/api/auth/register", &request).await.unwrap();

    // Second registration with same email
    let response = server.post("/api/auth/register", &request).await.unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(body.message, "Email is already registered");
}

#[tokio::test]
async fn test_register_rejects_invalid_body() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::unique();
    request.email = "not-an-email".to_string();

    let response = server.post("/api/auth/register", &request).await.unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert!(body.message.contains("email"));
}

// ============================================================================
// Login
// ============================================================================

#[tokio::test]
async fn test_login_success() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register = RegisterRequest::unique();
    server.post("/api/auth/register", &register).await.unwrap();

    let response = server
        .post("/api/auth/login", &LoginRequest::from_register(&register))
        .await
        .unwrap();
    let cookie = refresh_cookie_value(&response);
    let body: TokenResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(!body.token.is_empty());
    assert!(cookie.is_some());
}

#[tokio::test]
async fn test_login_unknown_email_is_generic() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post(
            "/api/auth/login",
            &LoginRequest {
                email: "nobody@example.com".to_string(),
                password: "Secret123!".to_string(),
            },
        )
        .await
        .unwrap();

    let body: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.message, "Invalid email or password");
}

#[tokio::test]
async fn test_login_wrong_password_on_updated_account() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register = RegisterRequest::unique();
    server.post("/api/auth/register", &register).await.unwrap();

    let response = server
        .post("/api/auth/login", &LoginRequest::wrong_password(&register))
        .await
        .unwrap();

    // Same generic message as the unknown-email case
    let body: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.message, "Invalid email or password");
}

#[tokio::test]
async fn test_login_wrong_password_on_legacy_account_signals_update() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register = RegisterRequest::unique();
    server.post("/api/auth/register", &register).await.unwrap();

    mark_password_not_updated(&server.db, &register.email)
        .await
        .unwrap();

    let response = server
        .post("/api/auth/login", &LoginRequest::wrong_password(&register))
        .await
        .unwrap();

    let body: PasswordUpdateResponse = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert!(body.requires_password_update);
}

#[tokio::test]
async fn test_repeated_logins_keep_single_refresh_row() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register = RegisterRequest::unique();
    server.post("/api/auth/register", &register).await.unwrap();

    let login = LoginRequest::from_register(&register);
    for _ in 0..3 {
        let response = server.post("/api/auth/login", &login).await.unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    // Register plus three logins: one row, counter at 3
    assert_eq!(
        refresh_token_row_count(&server.db, &register.email)
            .await
            .unwrap(),
        1
    );
    let (_, total_refreshes, revoked) = refresh_token_row(&server.db, &register.email)
        .await
        .unwrap()
        .expect("refresh row should exist");
    assert_eq!(total_refreshes, 3);
    assert!(!revoked);
}

// ============================================================================
// Refresh
// ============================================================================

#[tokio::test]
async fn test_refresh_without_cookie() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post_empty("/api/auth/refresh").await.unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.message, "Refresh token is missing");
}

#[tokio::test]
async fn test_refresh_rotates_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register = RegisterRequest::unique();
    let response = server.post("/api/auth/register", &register).await.unwrap();
    let original = refresh_cookie_value(&response).expect("register should set cookie");

    // Refresh succeeds and rotates the cookie
    let response = server
        .post_with_cookie("/api/auth/refresh", &original)
        .await
        .unwrap();
    let rotated = refresh_cookie_value(&response).expect("refresh should rotate cookie");
    let body: TokenOnlyResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(!body.token.is_empty());
    assert_ne!(original, rotated);

    // The pre-rotation value is single-use: replaying it fails
    let response = server
        .post_with_cookie("/api/auth/refresh", &original)
        .await
        .unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.message, "Refresh token is invalid or expired");

    // The rotated value still works
    let response = server
        .post_with_cookie("/api/auth/refresh", &rotated)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_refresh_with_revoked_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register = RegisterRequest::unique();
    let response = server.post("/api/auth/register", &register).await.unwrap();
    let cookie = refresh_cookie_value(&response).unwrap();

    // Logout revokes the token
    let response = server
        .post_with_cookie("/api/auth/logout", &cookie)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .post_with_cookie("/api/auth/refresh", &cookie)
        .await
        .unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.message, "Refresh token is invalid or expired");
}

#[tokio::test]
async fn test_access_token_from_refresh_is_valid() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register = RegisterRequest::unique();
    let response = server.post("/api/auth/register", &register).await.unwrap();
    let cookie = refresh_cookie_value(&response).unwrap();

    let response = server
        .post_with_cookie("/api/auth/refresh", &cookie)
        .await
        .unwrap();
    let body: TokenOnlyResponse = assert_json(response, StatusCode::OK).await.unwrap();

    // The freshly minted access token authenticates against /me
    let response = server.get_auth("/api/auth/me", &body.token).await.unwrap();
    let identity: IdentityResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(identity.email, register.email);
    assert_eq!(identity.role, "User");
}

// ============================================================================
// Logout
// ============================================================================

#[tokio::test]
async fn test_logout_is_idempotent() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register = RegisterRequest::unique();
    let response = server.post("/api/auth/register", &register).await.unwrap();
    let cookie = refresh_cookie_value(&response).unwrap();

    // First logout revokes; second is a no-op; both succeed
    let response = server
        .post_with_cookie("/api/auth/logout", &cookie)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .post_with_cookie("/api/auth/logout", &cookie)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Logout with no session at all also succeeds
    let response = server.post_empty("/api/auth/logout").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register = RegisterRequest::unique();
    let response = server.post("/api/auth/register", &register).await.unwrap();
    let cookie = refresh_cookie_value(&response).unwrap();

    let response = server
        .post_with_cookie("/api/auth/logout", &cookie)
        .await
        .unwrap();

    // The Set-Cookie on logout empties the value
    let cleared = refresh_cookie_value(&response).expect("logout should reset the cookie");
    assert!(cleared.is_empty());
}

// ============================================================================
// Password reset
// ============================================================================

#[tokio::test]
async fn test_password_reset_flow() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register = RegisterRequest::unique();
    server.post("/api/auth/register", &register).await.unwrap();
    mark_password_not_updated(&server.db, &register.email)
        .await
        .unwrap();

    // Reset exits the legacy state
    let response = server
        .post(
            "/api/auth/passwordreset",
            &PasswordResetRequest {
                email: register.email.clone(),
                new_password: "Fresh456!".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Old password now yields the plain unauthorized, not the 409 signal
    let response = server
        .post("/api/auth/login", &LoginRequest::from_register(&register))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    // New password logs in
    let response = server
        .post(
            "/api/auth/login",
            &LoginRequest {
                email: register.email.clone(),
                password: "Fresh456!".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_password_reset_unknown_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post(
            "/api/auth/passwordreset",
            &PasswordResetRequest {
                email: "nobody@example.com".to_string(),
                new_password: "Fresh456!".to_string(),
            },
        )
        .await
        .unwrap();

    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Protected endpoints
// ============================================================================

#[tokio::test]
async fn test_me_requires_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/auth/me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server.get_auth("/api/auth/me", "garbage.token").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_me_returns_claims_identity() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register = RegisterRequest::unique();
    let response = server.post("/api/auth/register", &register).await.unwrap();
    let body: TokenResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let response = server.get_auth("/api/auth/me", &body.token).await.unwrap();
    let identity: IdentityResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(identity.email, register.email);
    assert_eq!(identity.role, "User");
    assert!(identity.customer_id.parse::<i64>().is_ok());
}

#[tokio::test]
async fn test_credentials_listing_is_admin_only() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register = RegisterRequest::unique();
    let response = server.post("/api/auth/register", &register).await.unwrap();
    let body: TokenResponse = assert_json(response, StatusCode::OK).await.unwrap();

    // A plain user is refused
    let response = server
        .get_auth("/api/auth/credentials", &body.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // Promote and log in again so the new token carries the Admin role
    promote_to_admin(&server.db, &register.email).await.unwrap();
    let response = server
        .post("/api/auth/login", &LoginRequest::from_register(&register))
        .await
        .unwrap();
    let body: TokenResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let response = server
        .get_auth("/api/auth/credentials", &body.token)
        .await
        .unwrap();
    let summaries: Vec<CredentialSummary> = assert_json(response, StatusCode::OK).await.unwrap();

    let own = summaries
        .iter()
        .find(|s| s.email == register.email)
        .expect("own credential should be listed");
    assert_eq!(own.role, "Admin");
    assert!(own.password_updated);
}
