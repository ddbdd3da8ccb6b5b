//! PostgreSQL implementation of CustomerRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use store_core::entities::{Customer, NewCustomer};
use store_core::traits::{CustomerRepository, RepoResult};
use store_core::value_objects::CustomerId;

use crate::models::CustomerModel;

use super::error::map_db_error;

/// PostgreSQL implementation of CustomerRepository
#[derive(Clone)]
pub struct PgCustomerRepository {
    pool: PgPool,
}

impl PgCustomerRepository {
    /// Create a new PgCustomerRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepository for PgCustomerRepository {
    #[instrument(skip(self, customer), fields(email = %customer.email))]
    async fn create(&self, customer: &NewCustomer) -> RepoResult<CustomerId> {
        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO customers (first_name, last_name, middle_name, email, phone)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            ",
        )
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(&customer.middle_name)
        .bind(&customer.email)
        .bind(&customer.phone)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(CustomerId::new(id))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: CustomerId) -> RepoResult<Option<Customer>> {
        let result = sqlx::query_as::<_, CustomerModel>(
            r"
            SELECT id, first_name, last_name, middle_name, email, phone, created_at
            FROM customers
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Customer::from))
    }
}
