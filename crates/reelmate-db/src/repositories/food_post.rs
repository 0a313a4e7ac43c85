//! PostgreSQL implementation of FoodPostRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use reelmate_core::{DomainError, FoodPost, FoodPostRepository, RepoResult, Snowflake};

use crate::models::FoodPostModel;

use super::error::{map_db_error, map_foreign_key_violation};

/// PostgreSQL implementation of FoodPostRepository
#[derive(Clone)]
pub struct PgFoodPostRepository {
    pool: PgPool,
}

impl PgFoodPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FoodPostRepository for PgFoodPostRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<FoodPost>> {
        let result = sqlx::query_as::<_, FoodPostModel>(
            r"
            SELECT id, name, description, video_url, food_partner_id,
                   like_count, save_count, created_at
            FROM food_posts
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(FoodPost::from))
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<FoodPost>> {
        let results = sqlx::query_as::<_, FoodPostModel>(
            r"
            SELECT id, name, description, video_url, food_partner_id,
                   like_count, save_count, created_at
            FROM food_posts
            ORDER BY created_at DESC, id DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(FoodPost::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_partner(&self, food_partner_id: Snowflake) -> RepoResult<Vec<FoodPost>> {
        let results = sqlx::query_as::<_, FoodPostModel>(
            r"
            SELECT id, name, description, video_url, food_partner_id,
                   like_count, save_count, created_at
            FROM food_posts
            WHERE food_partner_id = $1
            ORDER BY created_at DESC, id DESC
            ",
        )
        .bind(food_partner_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(FoodPost::from).collect())
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    async fn find_by_ids(&self, ids: &[Snowflake]) -> RepoResult<Vec<FoodPost>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let raw: Vec<i64> = ids.iter().map(|id| id.into_inner()).collect();
        let results = sqlx::query_as::<_, FoodPostModel>(
            r"
            SELECT id, name, description, video_url, food_partner_id,
                   like_count, save_count, created_at
            FROM food_posts
            WHERE id = ANY($1)
            ORDER BY created_at DESC, id DESC
            ",
        )
        .bind(&raw)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(FoodPost::from).collect())
    }

    #[instrument(skip(self, post), fields(food_id = %post.id))]
    async fn create(&self, post: &FoodPost) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO food_posts
                (id, name, description, video_url, food_partner_id, like_count, save_count, created_at)
            VALUES ($1, $2, $3, $4, $5, 0, 0, $6)
            ",
        )
        .bind(post.id.into_inner())
        .bind(&post.name)
        .bind(&post.description)
        .bind(&post.video_url)
        .bind(post.food_partner_id.into_inner())
        .bind(post.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_foreign_key_violation(e, || DomainError::FoodPartnerNotFound(post.food_partner_id))
        })?;

        Ok(())
    }
}
