//! Request DTOs for API endpoints
//!
//! All JSON request DTOs implement `Deserialize` and `Validate`. Email fields
//! are trimmed and lower-cased while deserializing, and display names are
//! trimmed, so validation and storage both see the canonical form.

use reelmate_core::Snowflake;
use serde::{Deserialize, Deserializer};
use validator::Validate;

/// Canonical form used for every email lookup and insert
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn deserialize_email<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(|s| normalize_email(&s))
}

fn deserialize_trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(|s| s.trim().to_string())
}

// ============================================================================
// Auth Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    #[serde(deserialize_with = "deserialize_trimmed")]
    #[validate(length(min = 1, max = 100, message = "fullname is required"))]
    pub fullname: String,

    #[serde(deserialize_with = "deserialize_email")]
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, max = 128, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterFoodPartnerRequest {
    #[serde(deserialize_with = "deserialize_trimmed")]
    #[validate(length(min = 1, max = 100, message = "name is required"))]
    pub name: String,

    #[serde(deserialize_with = "deserialize_email")]
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, max = 128, message = "password is required"))]
    pub password: String,

    #[validate(length(max = 32))]
    pub phone: Option<String>,

    #[validate(length(max = 255))]
    pub address: Option<String>,

    #[validate(length(max = 100))]
    pub contact_name: Option<String>,
}

/// Login request, shared by both principal kinds
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(deserialize_with = "deserialize_email")]
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

// ============================================================================
// Food Requests
// ============================================================================

/// Text fields of the multipart upload form
#[derive(Debug, Clone, Default, Validate)]
pub struct CreateFoodPostRequest {
    #[validate(length(min = 1, max = 100, message = "name is required"))]
    pub name: String,

    #[validate(length(min = 1, max = 2000, message = "description is required"))]
    pub description: String,
}

impl CreateFoodPostRequest {
    /// Both fields with surrounding whitespace removed
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
        }
    }
}

/// Body of the like and save toggles
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ToggleRequest {
    pub food_id: Snowflake,
}
