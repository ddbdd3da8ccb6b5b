//! Authentication service
//!
//! Orchestrates the session protocol: registration, login, token refresh,
//! logout, and password reset. Login and reset failures share one generic
//! message so the API never confirms whether an email is registered.

use tracing::{info, instrument, warn};

use store_common::auth::{generate_hash, generate_salt, validate_password_strength, verify_password};
use store_common::AppError;
use store_core::entities::{Credential, NewCustomer};
use store_core::value_objects::{CustomerId, Role};
use store_core::DomainError;

use crate::dto::{LoginRequest, PasswordResetRequest, RegisterRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Outcome of a successful login, registration, or refresh
///
/// The access token goes to the response body; the refresh token only ever
/// travels in the session cookie.
#[derive(Debug, Clone)]
pub struct AuthenticatedSession {
    pub access_token: String,
    pub refresh_token: String,
}

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new customer and log them in
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthenticatedSession> {
        // Validate password strength before touching the store
        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        // Check if the email is already registered
        if self.ctx.credential_repo().email_exists(&request.email).await? {
            return Err(AppError::EmailAlreadyRegistered.into());
        }

        // Create the owning customer profile
        let customer_id = self
            .ctx
            .customer_repo()
            .create(&NewCustomer {
                first_name: request.first_name,
                last_name: request.last_name,
                middle_name: request.middle_name,
                email: request.email.clone(),
                phone: request.phone,
            })
            .await?;

        // Hash the password with a fresh salt
        let salt = generate_salt();
        let hash = generate_hash(&request.password, &salt).map_err(ServiceError::from)?;

        let credential = Credential::new(customer_id, request.email, hash, salt, Role::User);

        // The unique index catches registrations racing past the early check
        self.ctx
            .credential_repo()
            .create(&credential)
            .await
            .map_err(|e| match e {
                DomainError::EmailAlreadyExists => AppError::EmailAlreadyRegistered.into(),
                other => ServiceError::from(other),
            })?;

        info!(customer_id = %customer_id, "Customer registered");

        // Implicit login: issue the access token and establish the session
        self.open_session(&credential).await
    }

    /// Login with email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthenticatedSession> {
        let credential = self
            .ctx
            .credential_repo()
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: unknown email");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let is_valid = verify_password(
            &request.password,
            &credential.password_hash,
            &credential.password_salt,
        )
        .map_err(ServiceError::from)?;

        if !is_valid {
            // Legacy accounts that never reset their password get the
            // transitional signal instead of a hard rejection
            if credential.requires_password_update() {
                warn!(customer_id = %credential.customer_id, "Login deferred: password update required");
                return Err(AppError::PasswordUpdateRequired.into());
            }

            warn!(customer_id = %credential.customer_id, "Login failed: invalid password");
            return Err(AppError::InvalidCredentials.into());
        }

        info!(customer_id = %credential.customer_id, "Customer logged in");

        self.open_session(&credential).await
    }

    /// Exchange a refresh token for a new access token, rotating the
    /// refresh token in the process
    #[instrument(skip(self, refresh_token))]
    pub async fn refresh(&self, refresh_token: &str) -> ServiceResult<AuthenticatedSession> {
        let customer_id = self.ctx.refresh_tokens().validate(refresh_token).await?;

        // Re-read the credential so the new access token carries the
        // current role and email
        let credential = self
            .ctx
            .credential_repo()
            .find_by_customer(customer_id)
            .await?
            .ok_or(ServiceError::App(AppError::RefreshTokenInvalid))?;

        info!(customer_id = %customer_id, "Session refreshed");

        self.open_session(&credential).await
    }

    /// Logout by revoking the refresh token, if one was presented.
    ///
    /// Always succeeds: logging out of a dead or absent session is a no-op.
    #[instrument(skip(self, refresh_token))]
    pub async fn logout(&self, refresh_token: Option<&str>) -> ServiceResult<()> {
        if let Some(token) = refresh_token {
            self.ctx.refresh_tokens().revoke(token).await?;
        }

        info!("Customer logged out");
        Ok(())
    }

    /// Reset the password for an email, exiting the legacy-password state
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn password_reset(&self, request: PasswordResetRequest) -> ServiceResult<()> {
        validate_password_strength(&request.new_password).map_err(ServiceError::from)?;

        let credential = self
            .ctx
            .credential_repo()
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!("Password reset failed: unknown email");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let salt = generate_salt();
        let hash = generate_hash(&request.new_password, &salt).map_err(ServiceError::from)?;

        self.ctx
            .credential_repo()
            .update_password(credential.customer_id, &hash, &salt)
            .await?;

        info!(customer_id = %credential.customer_id, "Password reset");
        Ok(())
    }

    /// List credential rows for the admin surface
    #[instrument(skip(self))]
    pub async fn list_credentials(&self) -> ServiceResult<Vec<Credential>> {
        Ok(self.ctx.credential_repo().list().await?)
    }

    /// Issue an access token and establish/rotate the refresh token
    async fn open_session(&self, credential: &Credential) -> ServiceResult<AuthenticatedSession> {
        let access_token = self
            .ctx
            .token_issuer()
            .issue(credential.customer_id, &credential.email, credential.role)
            .map_err(ServiceError::from)?;

        let refresh_token = self
            .ctx
            .refresh_tokens()
            .establish(credential.customer_id)
            .await?;

        Ok(AuthenticatedSession {
            access_token,
            refresh_token,
        })
    }
}
