//! Route definitions
//!
//! API routes are mounted under /api. Health checks live outside it so they
//! bypass rate limiting.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{auth, food, food_partner, health};
use crate::state::AppState;

/// Create the API router (excluding health and uploads)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(food_routes())
        .merge(food_partner_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/user/register", post(auth::register_user))
        .route("/auth/user/login", post(auth::login_user))
        .route("/auth/user/logout", get(auth::logout_user))
        .route("/auth/me/user", get(auth::me_user))
        .route("/auth/partner/register", post(auth::register_food_partner))
        .route("/auth/partner/login", post(auth::login_food_partner))
        .route("/auth/partner/logout", get(auth::logout_food_partner))
        .route("/auth/me/partner", get(auth::me_food_partner))
        .route("/auth/refresh", post(auth::refresh))
}

/// Food post and engagement routes
fn food_routes() -> Router<AppState> {
    Router::new()
        .route("/food", post(food::create_food).get(food::list_food))
        .route("/food/like", post(food::like_food))
        .route("/food/save", post(food::save_food))
        .route("/food/saved-video", get(food::saved_food))
}

/// Food partner routes
fn food_partner_routes() -> Router<AppState> {
    Router::new().route("/food-partner/:id", get(food_partner::get_food_partner))
}
