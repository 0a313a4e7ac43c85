//! Food post entity - a short video published by a food partner

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodPost {
    pub id: Snowflake,
    pub name: String,
    pub description: String,
    pub video_url: String,
    pub food_partner_id: Snowflake,
    /// Always equals the number of like edges referencing this post
    pub like_count: i32,
    /// Always equals the number of save edges referencing this post
    pub save_count: i32,
    pub created_at: DateTime<Utc>,
}

impl FoodPost {
    /// Create a post with zeroed counters
    pub fn new(
        id: Snowflake,
        name: String,
        description: String,
        video_url: String,
        food_partner_id: Snowflake,
    ) -> Self {
        Self {
            id,
            name,
            description,
            video_url,
            food_partner_id,
            like_count: 0,
            save_count: 0,
            created_at: Utc::now(),
        }
    }
}
