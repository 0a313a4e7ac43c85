//! Authentication handlers
//!
//! Registration, login, logout, and self lookup for both principal kinds,
//! plus the shared access token refresh. Successful registration and login
//! set the `refreshToken` cookie; logout clears it.

use axum::{extract::State, Json};
use axum_extra::extract::cookie::CookieJar;
use reelmate_service::dto::{
    AccessTokenResponse, FoodPartnerAuthResponse, FoodPartnerMeResponse, FoodPartnerResponse,
    LoginRequest, MessageResponse, RegisterFoodPartnerRequest, RegisterUserRequest,
    UserAuthResponse, UserMeResponse, UserResponse,
};
use reelmate_core::{FoodPartner, User};
use reelmate_service::AuthService;

use crate::cookies::REFRESH_COOKIE;
use crate::extractors::{AuthFoodPartner, AuthUser, Authenticated, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

// ============================================================================
// User
// ============================================================================

/// POST /api/auth/user/register
pub async fn register_user(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(request): ValidatedJson<RegisterUserRequest>,
) -> ApiResult<(CookieJar, Created<Json<UserAuthResponse>>)> {
    let outcome = AuthService::new(state.service_context())
        .register_user(request)
        .await?;

    let jar = jar.add(state.refresh_cookie().issue(outcome.tokens.refresh_token));
    let body = UserAuthResponse {
        message: "User created successfully".to_string(),
        access_token: outcome.tokens.access_token,
        user: UserResponse::from(&outcome.principal),
    };
    Ok((jar, Created(Json(body))))
}

/// POST /api/auth/user/login
pub async fn login_user(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<(CookieJar, Json<UserAuthResponse>)> {
    let outcome = AuthService::new(state.service_context())
        .login::<User>(request)
        .await?;

    let jar = jar.add(state.refresh_cookie().issue(outcome.tokens.refresh_token));
    let body = UserAuthResponse {
        message: "User logged in successfully".to_string(),
        access_token: outcome.tokens.access_token,
        user: UserResponse::from(&outcome.principal),
    };
    Ok((jar, Json(body)))
}

/// GET /api/auth/user/logout
pub async fn logout_user(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<MessageResponse>) {
    (
        jar.add(state.refresh_cookie().removal()),
        Json(MessageResponse::new("User logged out successfully")),
    )
}

/// GET /api/auth/me/user
pub async fn me_user(Authenticated(user): AuthUser) -> Json<UserMeResponse> {
    Json(UserMeResponse {
        message: "Authenticated User".to_string(),
        user: UserResponse::from(&user),
    })
}

// ============================================================================
// Food partner
// ============================================================================

/// POST /api/auth/partner/register
pub async fn register_food_partner(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(request): ValidatedJson<RegisterFoodPartnerRequest>,
) -> ApiResult<(CookieJar, Created<Json<FoodPartnerAuthResponse>>)> {
    let outcome = AuthService::new(state.service_context())
        .register_food_partner(request)
        .await?;

    let jar = jar.add(state.refresh_cookie().issue(outcome.tokens.refresh_token));
    let body = FoodPartnerAuthResponse {
        message: "Food Partner registered successfully".to_string(),
        access_token: outcome.tokens.access_token,
        food_partner: FoodPartnerResponse::from(&outcome.principal),
    };
    Ok((jar, Created(Json(body))))
}

/// POST /api/auth/partner/login
pub async fn login_food_partner(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<(CookieJar, Json<FoodPartnerAuthResponse>)> {
    let outcome = AuthService::new(state.service_context())
        .login::<FoodPartner>(request)
        .await?;

    let jar = jar.add(state.refresh_cookie().issue(outcome.tokens.refresh_token));
    let body = FoodPartnerAuthResponse {
        message: "Food Partner logged in successfully".to_string(),
        access_token: outcome.tokens.access_token,
        food_partner: FoodPartnerResponse::from(&outcome.principal),
    };
    Ok((jar, Json(body)))
}

/// GET /api/auth/partner/logout
pub async fn logout_food_partner(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<MessageResponse>) {
    (
        jar.add(state.refresh_cookie().removal()),
        Json(MessageResponse::new("Food Partner logged out successfully")),
    )
}

/// GET /api/auth/me/partner
pub async fn me_food_partner(
    Authenticated(food_partner): AuthFoodPartner,
) -> Json<FoodPartnerMeResponse> {
    Json(FoodPartnerMeResponse {
        message: "Authenticated Food Partner".to_string(),
        food_partner: FoodPartnerResponse::from(&food_partner),
    })
}

// ============================================================================
// Refresh
// ============================================================================

/// Issue a new access token from the refresh cookie
///
/// POST /api/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    jar: CookieJar,
) -> ApiResult<Json<AccessTokenResponse>> {
    let refresh_token = jar
        .get(REFRESH_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|token| !token.is_empty())
        .ok_or_else(ApiError::unauthorized)?;

    let access_token = AuthService::new(state.service_context())
        .refresh(&refresh_token)
        .await?;

    Ok(Json(AccessTokenResponse { access_token }))
}
