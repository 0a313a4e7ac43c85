//! PostgreSQL implementation of the FoodPartner credential store

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use reelmate_core::{AccountRepository, DomainError, FoodPartner, RepoResult, Snowflake};

use crate::models::FoodPartnerModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of `AccountRepository<FoodPartner>`
#[derive(Clone)]
pub struct PgFoodPartnerRepository {
    pool: PgPool,
}

impl PgFoodPartnerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountRepository<FoodPartner> for PgFoodPartnerRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<FoodPartner>> {
        let result = sqlx::query_as::<_, FoodPartnerModel>(
            r"
            SELECT id, name, email, phone, address, contact_name, created_at, updated_at
            FROM food_partners
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(FoodPartner::from))
    }

    #[instrument(skip_all)]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<FoodPartner>> {
        let result = sqlx::query_as::<_, FoodPartnerModel>(
            r"
            SELECT id, name, email, phone, address, contact_name, created_at, updated_at
            FROM food_partners
            WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(FoodPartner::from))
    }

    #[instrument(skip_all)]
    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM food_partners WHERE email = $1)",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, partner, password_hash), fields(food_partner_id = %partner.id))]
    async fn create(&self, partner: &FoodPartner, password_hash: &str) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO food_partners
                (id, name, email, password_hash, phone, address, contact_name, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(partner.id.into_inner())
        .bind(&partner.name)
        .bind(&partner.email)
        .bind(password_hash)
        .bind(&partner.phone)
        .bind(&partner.address)
        .bind(&partner.contact_name)
        .bind(partner.created_at)
        .bind(partner.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::EmailAlreadyExists))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>> {
        sqlx::query_scalar::<_, String>("SELECT password_hash FROM food_partners WHERE id = $1")
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
