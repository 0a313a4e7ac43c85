//! Like and save toggles

use reelmate_core::{EngagementKind, Snowflake, ToggleResult};
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct EngagementService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EngagementService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    pub async fn toggle_like(&self, user_id: Snowflake, food_id: Snowflake) -> ServiceResult<ToggleResult> {
        self.toggle(EngagementKind::Like, user_id, food_id).await
    }

    pub async fn toggle_save(&self, user_id: Snowflake, food_id: Snowflake) -> ServiceResult<ToggleResult> {
        self.toggle(EngagementKind::Save, user_id, food_id).await
    }

    /// Flip the (user, post) edge of `kind` and return the post's new counter
    #[instrument(skip(self), fields(kind = kind.as_str()))]
    pub async fn toggle(
        &self,
        kind: EngagementKind,
        user_id: Snowflake,
        food_id: Snowflake,
    ) -> ServiceResult<ToggleResult> {
        let result = self.ctx.engagement_repo().toggle(kind, user_id, food_id).await?;

        info!(outcome = ?result.outcome, count = result.count, "Engagement toggled");
        Ok(result)
    }
}
