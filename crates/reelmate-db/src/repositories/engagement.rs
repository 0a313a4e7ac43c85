//! PostgreSQL implementation of EngagementRepository
//!
//! A toggle runs in a single transaction that first takes a row lock on the
//! target post. Concurrent toggles on the same post therefore queue up
//! behind each other, and the edge change plus the counter update commit
//! together or not at all.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use reelmate_core::{
    DomainError, EngagementKind, EngagementRepository, RepoResult, Snowflake, ToggleResult,
};

use crate::mappers::EngagementTable;

use super::error::{food_post_not_found, map_db_error, map_foreign_key_violation};

/// PostgreSQL implementation of EngagementRepository
#[derive(Clone)]
pub struct PgEngagementRepository {
    pool: PgPool,
}

impl PgEngagementRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EngagementRepository for PgEngagementRepository {
    #[instrument(skip(self), fields(kind = kind.as_str()))]
    async fn toggle(
        &self,
        kind: EngagementKind,
        user_id: Snowflake,
        food_id: Snowflake,
    ) -> RepoResult<ToggleResult> {
        let table = EngagementTable::from(kind);
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let locked = sqlx::query_scalar::<_, i64>("SELECT id FROM food_posts WHERE id = $1 FOR UPDATE")
            .bind(food_id.into_inner())
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_db_error)?;

        if locked.is_none() {
            // Dropping `tx` rolls back
            return Err(food_post_not_found(food_id));
        }

        let delete_edge = format!(
            "DELETE FROM {} WHERE user_id = $1 AND food_id = $2",
            table.edges
        );
        let removed = sqlx::query(&delete_edge)
            .bind(user_id.into_inner())
            .bind(food_id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?
            .rows_affected()
            > 0;

        let result = if removed {
            let decrement = format!(
                "UPDATE food_posts SET {c} = GREATEST({c} - 1, 0) WHERE id = $1 RETURNING {c}",
                c = table.counter
            );
            let count = sqlx::query_scalar::<_, i32>(&decrement)
                .bind(food_id.into_inner())
                .fetch_one(&mut *tx)
                .await
                .map_err(map_db_error)?;

            ToggleResult::removed(count)
        } else {
            let insert_edge = format!(
                "INSERT INTO {} (user_id, food_id, created_at) VALUES ($1, $2, NOW()) \
                 ON CONFLICT (user_id, food_id) DO NOTHING",
                table.edges
            );
            let inserted = sqlx::query(&insert_edge)
                .bind(user_id.into_inner())
                .bind(food_id.into_inner())
                .execute(&mut *tx)
                .await
                .map_err(|e| map_foreign_key_violation(e, || DomainError::UserNotFound(user_id)))?
                .rows_affected()
                > 0;

            // An edge that already exists leaves the counter alone
            let adjust = if inserted {
                format!(
                    "UPDATE food_posts SET {c} = {c} + 1 WHERE id = $1 RETURNING {c}",
                    c = table.counter
                )
            } else {
                format!("SELECT {} FROM food_posts WHERE id = $1", table.counter)
            };
            let count = sqlx::query_scalar::<_, i32>(&adjust)
                .bind(food_id.into_inner())
                .fetch_one(&mut *tx)
                .await
                .map_err(map_db_error)?;

            ToggleResult::added(count)
        };

        tx.commit().await.map_err(map_db_error)?;

        debug!(outcome = ?result.outcome, count = result.count, "Toggle committed");
        Ok(result)
    }

    #[instrument(skip(self), fields(kind = kind.as_str()))]
    async fn exists(
        &self,
        kind: EngagementKind,
        user_id: Snowflake,
        food_id: Snowflake,
    ) -> RepoResult<bool> {
        let table = EngagementTable::from(kind);
        let sql = format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE user_id = $1 AND food_id = $2)",
            table.edges
        );

        sqlx::query_scalar::<_, bool>(&sql)
            .bind(user_id.into_inner())
            .bind(food_id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self), fields(kind = kind.as_str()))]
    async fn find_food_ids_by_user(
        &self,
        kind: EngagementKind,
        user_id: Snowflake,
    ) -> RepoResult<Vec<Snowflake>> {
        let table = EngagementTable::from(kind);
        let sql = format!(
            "SELECT food_id FROM {} WHERE user_id = $1 ORDER BY created_at DESC, food_id DESC",
            table.edges
        );

        let ids = sqlx::query_scalar::<_, i64>(&sql)
            .bind(user_id.into_inner())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(ids.into_iter().map(Snowflake::new).collect())
    }
}
