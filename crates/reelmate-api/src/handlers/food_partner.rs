//! Food partner profile handler

use axum::{extract::State, Json};
use reelmate_service::dto::{FoodPartnerProfileEnvelope, FoodPartnerProfileResponse};
use reelmate_service::FoodPartnerService;

use crate::extractors::{AuthUser, SnowflakePath};
use crate::response::ApiResult;
use crate::state::AppState;

/// A partner merged with all of its posts
///
/// GET /api/food-partner/:id
pub async fn get_food_partner(
    State(state): State<AppState>,
    _auth: AuthUser,
    SnowflakePath(id): SnowflakePath,
) -> ApiResult<Json<FoodPartnerProfileEnvelope>> {
    let profile = FoodPartnerService::new(state.service_context())
        .profile(id)
        .await?;

    Ok(Json(FoodPartnerProfileEnvelope {
        message: "Fetched Successfully".to_string(),
        food_partner: FoodPartnerProfileResponse::from(profile),
    }))
}
