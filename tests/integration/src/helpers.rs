//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers, making HTTP requests
//! (with manual cookie handling, since the refresh cookie is marked Secure
//! and clients would refuse to replay it over plain http), and reaching
//! into the database for fixtures.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use sqlx::PgPool;
use store_api::{create_app, create_app_state};
use store_common::{
    AppConfig, AppSettings, CorsConfig, DatabaseConfig, Environment, JwtConfig, RateLimitConfig,
    ServerConfig,
};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Signing secret shared by every test server
pub const TEST_JWT_SECRET: &str = "integration-test-secret-key-long-enough";

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub db: PgPool,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server against the database from DATABASE_URL
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        Self::start_with_config(config).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        // Create app state (runs migrations)
        let state = create_app_state(config).await?;
        let db = state.pool().clone();

        // Build application
        let app = create_app(state);

        // Bind an ephemeral port
        let listener = TcpListener::bind(("127.0.0.1", 0)).await?;
        let addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Wait for server to be ready
        tokio::time::sleep(Duration::from_millis(100)).await;

        // Create HTTP client; cookies are handled manually per request
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            db,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a GET request with a bearer token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }

    /// Make a bodyless POST request
    pub async fn post_empty(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).send().await?)
    }

    /// Make a bodyless POST request carrying the refresh cookie
    pub async fn post_with_cookie(&self, path: &str, refresh_token: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .post(&url)
            .header("Cookie", format!("refreshToken={}", refresh_token))
            .send()
            .await?)
    }
}

/// Create a test configuration from DATABASE_URL
///
/// The rate limiter is opened wide so parallel tests never trip it.
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set for integration tests"))?;

    Ok(AppConfig {
        app: AppSettings {
            name: "storefront-test".to_string(),
            env: Environment::Development,
        },
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: database_url,
            max_connections: 5,
            min_connections: 1,
        },
        jwt: JwtConfig {
            secret_key: TEST_JWT_SECRET.to_string(),
            issuer: "storefront-api".to_string(),
            audience: "storefront-clients".to_string(),
            expiration_minutes: 15,
        },
        rate_limit: RateLimitConfig {
            requests_per_second: 10_000,
            burst: 10_000,
        },
        cors: CorsConfig {
            allowed_origins: Vec::new(),
        },
    })
}

/// Helper to check if test environment is available
pub async fn check_test_env() -> bool {
    dotenvy::dotenv().ok();

    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    true
}

/// Extract the refreshToken value from a response's Set-Cookie headers
pub fn refresh_cookie_value(response: &Response) -> Option<String> {
    for header in response.headers().get_all("set-cookie") {
        let value = header.to_str().ok()?;
        if let Some(rest) = value.strip_prefix("refreshToken=") {
            let token = rest.split(';').next().unwrap_or("").to_string();
            return Some(token);
        }
    }
    None
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}

/// Flip an account back into the legacy-password state
pub async fn mark_password_not_updated(db: &PgPool, email: &str) -> Result<()> {
    sqlx::query("UPDATE user_credentials SET password_updated = FALSE WHERE email = $1")
        .bind(email)
        .execute(db)
        .await?;
    Ok(())
}

/// Promote an account to the Admin role
pub async fn promote_to_admin(db: &PgPool, email: &str) -> Result<()> {
    sqlx::query("UPDATE user_credentials SET role = 3 WHERE email = $1")
        .bind(email)
        .execute(db)
        .await?;
    Ok(())
}

/// Count refresh token rows for the credential registered under an email
pub async fn refresh_token_row(db: &PgPool, email: &str) -> Result<Option<(i64, i32, bool)>> {
    let row: Option<(i64, i32, bool)> = sqlx::query_as(
        r"
        SELECT rt.customer_id, rt.total_refreshes, rt.revoked
        FROM refresh_tokens rt
        JOIN user_credentials uc ON uc.customer_id = rt.customer_id
        WHERE uc.email = $1
        ",
    )
    .bind(email)
    .fetch_optional(db)
    .await?;
    Ok(row)
}

/// Number of refresh token rows held by the customer owning an email
pub async fn refresh_token_row_count(db: &PgPool, email: &str) -> Result<i64> {
    let count: i64 = sqlx::query_scalar(
        r"
        SELECT COUNT(*)
        FROM refresh_tokens rt
        JOIN user_credentials uc ON uc.customer_id = rt.customer_id
        WHERE uc.email = $1
        ",
    )
    .bind(email)
    .fetch_one(db)
    .await?;
    Ok(count)
}
