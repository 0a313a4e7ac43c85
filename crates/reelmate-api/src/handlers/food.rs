//! Food post handlers
//!
//! Publishing (food partners), the feed, like and save toggles, and the
//! saved list (users).

use axum::{extract::State, Json};
use reelmate_service::dto::{
    FoodItemResponse, FoodItemsResponse, FoodPostResponse, LikeResponse, SaveResponse,
    SavedVideoResponse, ToggleRequest,
};
use reelmate_service::{EngagementService, FoodService};

use crate::extractors::{AuthFoodPartner, AuthUser, Authenticated, FoodPostForm, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Publish a food post from a multipart upload
///
/// POST /api/food
pub async fn create_food(
    State(state): State<AppState>,
    Authenticated(food_partner): AuthFoodPartner,
    FoodPostForm(post): FoodPostForm,
) -> ApiResult<Created<Json<FoodItemResponse>>> {
    let food_item = FoodService::new(state.service_context())
        .create_post(&food_partner, post)
        .await?;

    Ok(Created(Json(FoodItemResponse {
        message: "Food Item created successfully".to_string(),
        food_item: food_item.into(),
    })))
}

/// GET /api/food
pub async fn list_food(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<FoodItemsResponse>> {
    let posts = FoodService::new(state.service_context()).list_posts().await?;

    Ok(Json(FoodItemsResponse {
        message: "Food item fetched successfully".to_string(),
        food_items: posts.into_iter().map(FoodPostResponse::from).collect(),
    }))
}

/// POST /api/food/like
pub async fn like_food(
    State(state): State<AppState>,
    Authenticated(user): AuthUser,
    ValidatedJson(request): ValidatedJson<ToggleRequest>,
) -> ApiResult<Json<LikeResponse>> {
    let result = EngagementService::new(state.service_context())
        .toggle_like(user.id, request.food_id)
        .await?;

    let liked = result.outcome.is_added();
    let message = if liked {
        "Food liked successfully"
    } else {
        "Food disliked successfully"
    };

    Ok(Json(LikeResponse {
        message: message.to_string(),
        like_count: result.count,
        liked,
    }))
}

/// POST /api/food/save
pub async fn save_food(
    State(state): State<AppState>,
    Authenticated(user): AuthUser,
    ValidatedJson(request): ValidatedJson<ToggleRequest>,
) -> ApiResult<Json<SaveResponse>> {
    let result = EngagementService::new(state.service_context())
        .toggle_save(user.id, request.food_id)
        .await?;

    let saved = result.outcome.is_added();
    let message = if saved {
        "Video saved successfully"
    } else {
        "Video unsaved successfully"
    };

    Ok(Json(SaveResponse {
        message: message.to_string(),
        save_count: result.count,
        saved,
    }))
}

/// Posts the caller has saved
///
/// GET /api/food/saved-video
pub async fn saved_food(
    State(state): State<AppState>,
    Authenticated(user): AuthUser,
) -> ApiResult<Json<SavedVideoResponse>> {
    let posts = FoodService::new(state.service_context())
        .list_saved(user.id)
        .await?;

    Ok(Json(SavedVideoResponse {
        message: "Saved video fetched successfully".to_string(),
        saved_video: posts.into_iter().map(FoodPostResponse::from).collect(),
    }))
}
