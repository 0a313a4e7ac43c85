//! FoodPost entity <- model mapper

use reelmate_core::{FoodPost, Snowflake};

use crate::models::FoodPostModel;

impl From<FoodPostModel> for FoodPost {
    fn from(model: FoodPostModel) -> Self {
        FoodPost {
            id: Snowflake::new(model.id),
            name: model.name,
            description: model.description,
            video_url: model.video_url,
            food_partner_id: Snowflake::new(model.food_partner_id),
            like_count: model.like_count,
            save_count: model.save_count,
            created_at: model.created_at,
        }
    }
}
