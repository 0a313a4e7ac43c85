//! Food post service
//!
//! Publishing posts (video bytes go to media storage, only the returned URL
//! is persisted), the public feed, and a user's saved posts.

use reelmate_core::{EngagementKind, FoodPartner, FoodPost, Snowflake};
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::dto::CreateFoodPostRequest;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// A post as submitted by a partner, before upload
#[derive(Debug, Clone)]
pub struct NewFoodPost {
    pub fields: CreateFoodPostRequest,
    pub video: Vec<u8>,
    /// Client-side file name, used only for its extension
    pub original_file_name: Option<String>,
}

pub struct FoodService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FoodService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self, partner, post), fields(food_partner_id = %partner.id, size = post.video.len()))]
    pub async fn create_post(&self, partner: &FoodPartner, post: NewFoodPost) -> ServiceResult<FoodPost> {
        let fields = post.fields.trimmed();
        fields
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        if post.video.is_empty() {
            return Err(ServiceError::validation("video is required"));
        }

        let file_name = stored_file_name(post.original_file_name.as_deref());
        let video_url = self.ctx.media_storage().upload(post.video, &file_name).await?;

        let food_post = FoodPost::new(
            self.ctx.generate_id(),
            fields.name,
            fields.description,
            video_url,
            partner.id,
        );
        self.ctx.food_post_repo().create(&food_post).await?;

        info!(food_id = %food_post.id, "Food post created");
        Ok(food_post)
    }

    /// Every post, newest first
    #[instrument(skip(self))]
    pub async fn list_posts(&self) -> ServiceResult<Vec<FoodPost>> {
        Ok(self.ctx.food_post_repo().list_all().await?)
    }

    /// Posts the user has saved
    #[instrument(skip(self))]
    pub async fn list_saved(&self, user_id: Snowflake) -> ServiceResult<Vec<FoodPost>> {
        let ids = self
            .ctx
            .engagement_repo()
            .find_food_ids_by_user(EngagementKind::Save, user_id)
            .await?;

        Ok(self.ctx.food_post_repo().find_by_ids(&ids).await?)
    }
}

/// Random storage name, keeping a short alphanumeric extension if the client sent one
fn stored_file_name(original: Option<&str>) -> String {
    let id = Uuid::new_v4();
    let extension = original
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .filter(|ext| !ext.is_empty() && ext.len() <= 8 && ext.chars().all(|c| c.is_ascii_alphanumeric()));

    match extension {
        Some(ext) => format!("{id}.{ext}"),
        None => id.to_string(),
    }
}
