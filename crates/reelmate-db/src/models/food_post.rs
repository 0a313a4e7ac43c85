//! Food post database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct FoodPostModel {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub video_url: String,
    pub food_partner_id: i64,
    pub like_count: i32,
    pub save_count: i32,
    pub created_at: DateTime<Utc>,
}
