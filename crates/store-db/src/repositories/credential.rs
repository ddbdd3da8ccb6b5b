//! PostgreSQL implementation of CredentialRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use store_core::entities::Credential;
use store_core::error::DomainError;
use store_core::traits::{CredentialRepository, RepoResult};
use store_core::value_objects::CustomerId;

use crate::models::CredentialModel;

use super::error::{credential_not_found, map_db_error, map_unique_violation};

/// PostgreSQL implementation of CredentialRepository
#[derive(Clone)]
pub struct PgCredentialRepository {
    pool: PgPool,
}

impl PgCredentialRepository {
    /// Create a new PgCredentialRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialRepository for PgCredentialRepository {
    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Credential>> {
        let result = sqlx::query_as::<_, CredentialModel>(
            r"
            SELECT customer_id, email, password_hash, password_salt, role, password_updated
            FROM user_credentials
            WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Credential::from))
    }

    #[instrument(skip(self))]
    async fn find_by_customer(&self, customer_id: CustomerId) -> RepoResult<Option<Credential>> {
        let result = sqlx::query_as::<_, CredentialModel>(
            r"
            SELECT customer_id, email, password_hash, password_salt, role, password_updated
            FROM user_credentials
            WHERE customer_id = $1
            ",
        )
        .bind(customer_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Credential::from))
    }

    #[instrument(skip(self))]
    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM user_credentials WHERE email = $1)
            ",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, credential), fields(customer_id = %credential.customer_id))]
    async fn create(&self, credential: &Credential) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO user_credentials (customer_id, email, password_hash, password_salt, role, password_updated)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(credential.customer_id.into_inner())
        .bind(&credential.email)
        .bind(&credential.password_hash)
        .bind(&credential.password_salt)
        .bind(credential.role.as_stored())
        .bind(credential.password_updated)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::EmailAlreadyExists))?;

        Ok(())
    }

    #[instrument(skip(self, password_hash, password_salt))]
    async fn update_password(
        &self,
        customer_id: CustomerId,
        password_hash: &str,
        password_salt: &str,
    ) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE user_credentials
            SET password_hash = $2, password_salt = $3, password_updated = TRUE
            WHERE customer_id = $1
            ",
        )
        .bind(customer_id.into_inner())
        .bind(password_hash)
        .bind(password_salt)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(credential_not_found(customer_id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Credential>> {
        let result = sqlx::query_as::<_, CredentialModel>(
            r"
            SELECT customer_id, email, password_hash, password_salt, role, password_updated
            FROM user_credentials
            ORDER BY customer_id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(Credential::from).collect())
    }
}
