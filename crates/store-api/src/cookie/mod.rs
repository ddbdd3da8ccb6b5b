//! Refresh token cookie handling
//!
//! The refresh token only ever travels in an HttpOnly cookie; it never
//! appears in a JSON body. SameSite=None (with Secure, which it requires)
//! lets the storefront frontends on their own origins send it along with
//! credentialed requests.

use axum::http::{header, HeaderMap};

use store_core::entities::REFRESH_TOKEN_TTL_DAYS;

/// Cookie name for the refresh token
pub const REFRESH_COOKIE_NAME: &str = "refreshToken";

/// Extract a cookie value from the Cookie header
pub fn get_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    let cookie_header = headers.get(header::COOKIE)?.to_str().ok()?;
    for part in cookie_header.split(';') {
        let part = part.trim();
        if let Some((key, value)) = part.split_once('=') {
            if key.trim() == name {
                return Some(value.trim());
            }
        }
    }
    None
}

/// Read the refresh token cookie, if present
pub fn refresh_token_from_headers(headers: &HeaderMap) -> Option<&str> {
    get_cookie(headers, REFRESH_COOKIE_NAME)
}

/// Build the Set-Cookie value carrying a refresh token
pub fn set_refresh_cookie(value: &str) -> String {
    let max_age = REFRESH_TOKEN_TTL_DAYS * 24 * 60 * 60;
    format!(
        "{REFRESH_COOKIE_NAME}={value}; HttpOnly; Secure; SameSite=None; Path=/; Max-Age={max_age}"
    )
}

/// Build the Set-Cookie value that deletes the refresh token cookie
pub fn clear_refresh_cookie() -> String {
    format!("{REFRESH_COOKIE_NAME}=; HttpOnly; Secure; SameSite=None; Path=/; Max-Age=0")
}
