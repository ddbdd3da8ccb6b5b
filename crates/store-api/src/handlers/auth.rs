//! Authentication handlers
//!
//! Endpoints for registration, login, token refresh, logout, and password
//! reset. The access token travels in the JSON body; the refresh token only
//! ever travels in the HttpOnly session cookie.

use axum::{
    extract::State,
    http::{header::SET_COOKIE, HeaderMap},
    response::IntoResponse,
    Json,
};
use store_common::AppError;
use store_service::dto::IdentityResponse;
use store_service::{
    AuthService, LoginRequest, MessageResponse, PasswordResetRequest, RegisterRequest,
    TokenOnlyResponse, TokenResponse,
};

use crate::cookie::{clear_refresh_cookie, refresh_token_from_headers, set_refresh_cookie};
use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Register a new customer (auto-login on success)
///
/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<impl IntoResponse> {
    let service = AuthService::new(state.service_context());
    let session = service.register(request).await?;

    Ok((
        [(SET_COOKIE, set_refresh_cookie(&session.refresh_token))],
        Json(TokenResponse::new(
            "Registration successful",
            session.access_token,
        )),
    ))
}

/// Login with email and password
///
/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<impl IntoResponse> {
    let service = AuthService::new(state.service_context());
    let session = service.login(request).await?;

    Ok((
        [(SET_COOKIE, set_refresh_cookie(&session.refresh_token))],
        Json(TokenResponse::new("Login successful", session.access_token)),
    ))
}

/// Exchange the refresh token cookie for a new access token
///
/// POST /api/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<impl IntoResponse> {
    let refresh_token = refresh_token_from_headers(&headers)
        .ok_or(ApiError::App(AppError::RefreshTokenMissing))?;

    let service = AuthService::new(state.service_context());
    let session = service.refresh(refresh_token).await?;

    Ok((
        [(SET_COOKIE, set_refresh_cookie(&session.refresh_token))],
        Json(TokenOnlyResponse {
            token: session.access_token,
        }),
    ))
}

/// Logout: revoke the refresh token and delete the cookie
///
/// Always succeeds, even when no session existed.
///
/// POST /api/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<impl IntoResponse> {
    let service = AuthService::new(state.service_context());
    service
        .logout(refresh_token_from_headers(&headers))
        .await?;

    Ok((
        [(SET_COOKIE, clear_refresh_cookie())],
        Json(MessageResponse::new("Logout successful")),
    ))
}

/// Reset the password for an email
///
/// POST /api/auth/passwordreset
pub async fn password_reset(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<PasswordResetRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = AuthService::new(state.service_context());
    service.password_reset(request).await?;

    Ok(Json(MessageResponse::new(
        "Password has been changed successfully",
    )))
}

/// Return the identity carried by the presented access token
///
/// GET /api/auth/me
pub async fn me(user: AuthUser) -> Json<IdentityResponse> {
    Json(IdentityResponse::new(user.customer_id, user.email, user.role))
}
