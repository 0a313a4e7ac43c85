//! Food partner database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Row of the `food_partners` table (without the password hash)
#[derive(Debug, Clone, FromRow)]
pub struct FoodPartnerModel {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub contact_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
