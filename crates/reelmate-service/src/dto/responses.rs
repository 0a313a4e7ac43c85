//! Response DTOs for API endpoints
//!
//! Field names are camelCase. Snowflake ids serialize as strings.

use chrono::{DateTime, Utc};
use reelmate_core::Snowflake;
use serde::Serialize;

// ============================================================================
// Entity Views
// ============================================================================

/// Public fields of a user
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Snowflake,
    pub fullname: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Public fields of a food partner
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodPartnerResponse {
    pub id: Snowflake,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub contact_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodPostResponse {
    pub id: Snowflake,
    pub name: String,
    pub description: String,
    pub video_url: String,
    pub food_partner_id: Snowflake,
    pub like_count: i32,
    pub save_count: i32,
    pub created_at: DateTime<Utc>,
}

/// Partner fields merged with the partner's posts
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodPartnerProfileResponse {
    #[serde(flatten)]
    pub food_partner: FoodPartnerResponse,
    pub food_items: Vec<FoodPostResponse>,
}

// ============================================================================
// Auth Envelopes
// ============================================================================

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAuthResponse {
    pub message: String,
    pub access_token: String,
    pub user: UserResponse,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodPartnerAuthResponse {
    pub message: String,
    pub access_token: String,
    pub food_partner: FoodPartnerResponse,
}

#[derive(Debug, Serialize)]
pub struct UserMeResponse {
    pub message: String,
    pub user: UserResponse,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodPartnerMeResponse {
    pub message: String,
    pub food_partner: FoodPartnerResponse,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenResponse {
    pub access_token: String,
}

// ============================================================================
// Food Envelopes
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItemResponse {
    pub message: String,
    pub food_item: FoodPostResponse,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItemsResponse {
    pub message: String,
    pub food_items: Vec<FoodPostResponse>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedVideoResponse {
    pub message: String,
    pub saved_video: Vec<FoodPostResponse>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeResponse {
    pub message: String,
    pub like_count: i32,
    pub liked: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveResponse {
    pub message: String,
    pub save_count: i32,
    pub saved: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodPartnerProfileEnvelope {
    pub message: String,
    pub food_partner: FoodPartnerProfileResponse,
}

// ============================================================================
// Health
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: bool,
}
