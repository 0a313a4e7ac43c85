//! Food partner profile lookup

use reelmate_core::{DomainError, FoodPartner, FoodPost, Snowflake};
use tracing::instrument;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// A partner together with every post it owns
#[derive(Debug, Clone)]
pub struct FoodPartnerProfile {
    pub food_partner: FoodPartner,
    pub food_items: Vec<FoodPost>,
}

pub struct FoodPartnerService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FoodPartnerService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Fails with `FoodPartnerNotFound` before any posts are loaded
    #[instrument(skip(self))]
    pub async fn profile(&self, id: Snowflake) -> ServiceResult<FoodPartnerProfile> {
        let food_partner = self
            .ctx
            .food_partner_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::FoodPartnerNotFound(id))?;

        let food_items = self.ctx.food_post_repo().find_by_partner(id).await?;

        Ok(FoodPartnerProfile {
            food_partner,
            food_items,
        })
    }
}
