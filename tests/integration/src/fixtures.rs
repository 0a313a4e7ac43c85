//! Test fixtures and data generators
//!
//! Emails carry a random suffix because the database outlives a test run.

use serde::{Deserialize, Serialize};

/// Get a unique suffix for test data
pub fn unique_suffix() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

pub const TEST_PASSWORD: &str = "TestPass123!";

/// User registration request
#[derive(Debug, Clone, Serialize)]
pub struct RegisterUserRequest {
    pub fullname: String,
    pub email: String,
    pub password: String,
}

impl RegisterUserRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            fullname: format!("Test User {}", &suffix[..8]),
            email: format!("user-{suffix}@example.com"),
            password: TEST_PASSWORD.to_string(),
        }
    }
}

/// Food partner registration request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterFoodPartnerRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub contact_name: Option<String>,
}

impl RegisterFoodPartnerRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test Kitchen {}", &suffix[..8]),
            email: format!("partner-{suffix}@example.com"),
            password: TEST_PASSWORD.to_string(),
            phone: Some("555-0100".to_string()),
            address: Some("1 Market St".to_string()),
            contact_name: Some("Sam".to_string()),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
        }
    }
}

/// Toggle request body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleRequest {
    pub food_id: String,
}

#[derive(Debug, Deserialize)]
pub struct UserBody {
    pub id: String,
    pub fullname: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodPartnerBody {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub contact_name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAuthResponse {
    pub message: String,
    pub access_token: String,
    pub user: UserBody,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodPartnerAuthResponse {
    pub message: String,
    pub access_token: String,
    pub food_partner: FoodPartnerBody,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenResponse {
    pub access_token: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodPostBody {
    pub id: String,
    pub name: String,
    pub description: String,
    pub video_url: String,
    pub food_partner_id: String,
    pub like_count: i32,
    pub save_count: i32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItemResponse {
    pub message: String,
    pub food_item: FoodPostBody,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItemsResponse {
    pub food_items: Vec<FoodPostBody>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedVideoResponse {
    pub saved_video: Vec<FoodPostBody>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeResponse {
    pub message: String,
    pub like_count: i32,
    pub liked: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveResponse {
    pub message: String,
    pub save_count: i32,
    pub saved: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodPartnerProfileBody {
    pub id: String,
    pub name: String,
    pub food_items: Vec<FoodPostBody>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodPartnerProfileResponse {
    pub message: String,
    pub food_partner: FoodPartnerProfileBody,
}
