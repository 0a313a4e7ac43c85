//! Data transfer objects for API requests and responses
//!
//! - Request DTOs with validation for API inputs
//! - Response DTOs (camelCase) for API outputs
//! - Mappers from domain entities to response DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    normalize_email, CreateFoodPostRequest, LoginRequest, RegisterFoodPartnerRequest,
    RegisterUserRequest, ToggleRequest,
};

pub use responses::{
    AccessTokenResponse, FoodItemResponse, FoodItemsResponse, FoodPartnerAuthResponse,
    FoodPartnerMeResponse, FoodPartnerProfileEnvelope, FoodPartnerProfileResponse,
    FoodPartnerResponse, FoodPostResponse, HealthChecks, HealthResponse, LikeResponse,
    MessageResponse, ReadinessResponse, SaveResponse, SavedVideoResponse, UserAuthResponse,
    UserMeResponse, UserResponse,
};
