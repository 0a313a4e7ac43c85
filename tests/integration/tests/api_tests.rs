//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, error_code, fixtures::*, TestServer,
};
use reqwest::{
    multipart::{Form, Part},
    StatusCode,
};

async fn register_user(server: &TestServer) -> (RegisterUserRequest, UserAuthResponse) {
    let request = RegisterUserRequest::unique();
    let response = server
        .post("/api/auth/user/register", &request)
        .await
        .unwrap();
    let auth = assert_json(response, StatusCode::CREATED).await.unwrap();
    (request, auth)
}

async fn register_partner(
    server: &TestServer,
) -> (RegisterFoodPartnerRequest, FoodPartnerAuthResponse) {
    let request = RegisterFoodPartnerRequest::unique();
    let response = server
        .post("/api/auth/partner/register", &request)
        .await
        .unwrap();
    let auth = assert_json(response, StatusCode::CREATED).await.unwrap();
    (request, auth)
}

fn video_form(name: &str, bytes: &'static [u8]) -> Form {
    Form::new()
        .text("name", name.to_string())
        .text("description", "Made fresh daily")
        .part(
            "video",
            Part::bytes(bytes)
                .file_name("clip.mp4")
                .mime_str("video/mp4")
                .unwrap(),
        )
}

async fn create_post(server: &TestServer, partner_token: &str, name: &str) -> FoodPostBody {
    let response = server
        .post_multipart("/api/food", partner_token, video_form(name, b"fake-mp4-bytes"))
        .await
        .unwrap();
    let created: FoodItemResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    created.food_item
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_and_me() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, auth) = register_user(&server).await;

    assert_eq!(auth.message, "User created successfully");
    assert_eq!(auth.user.email, request.email);
    assert_eq!(auth.user.fullname, request.fullname);
    assert!(!auth.access_token.is_empty());

    let response = server
        .get_auth("/api/auth/me/user", &auth.access_token)
        .await
        .unwrap();
    let me: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me["user"]["id"], auth.user.id);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, _) = register_user(&server).await;

    let response = server
        .post("/api/auth/user/register", &request)
        .await
        .unwrap();
    let code = error_code(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "EMAIL_ALREADY_EXISTS");
}

#[tokio::test]
async fn test_concurrent_duplicate_registration() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterUserRequest::unique();

    let attempts = (0..4).map(|_| server.post("/api/auth/user/register", &request));
    let statuses: Vec<StatusCode> = futures::future::join_all(attempts)
        .await
        .into_iter()
        .map(|r| r.unwrap().status())
        .collect();

    let created = statuses.iter().filter(|s| **s == StatusCode::CREATED).count();
    let rejected = statuses
        .iter()
        .filter(|s| **s == StatusCode::BAD_REQUEST)
        .count();
    assert_eq!(created, 1);
    assert_eq!(rejected, 3);
}

#[tokio::test]
async fn test_login_roles_are_separate() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, _) = register_user(&server).await;

    let response = server
        .post(
            "/api/auth/user/login",
            &LoginRequest::new(&request.email.to_uppercase(), &request.password),
        )
        .await
        .unwrap();
    let auth: UserAuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(auth.message, "User logged in successfully");

    // A user's token does not open partner routes
    let response = server
        .get_auth("/api/auth/me/partner", &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    // The user's credentials do not log in a partner
    let response = server
        .post(
            "/api/auth/partner/login",
            &LoginRequest::new(&request.email, &request.password),
        )
        .await
        .unwrap();
    let code = error_code(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_refresh_and_logout() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    register_user(&server).await;

    // The client's cookie store carries refreshToken from registration
    let response = server.post_empty("/api/auth/refresh").await.unwrap();
    let refreshed: AccessTokenResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let response = server
        .get_auth("/api/auth/me/user", &refreshed.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get("/api/auth/user/logout").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.post_empty("/api/auth/refresh").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_protected_route_without_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/food").await.unwrap();
    let code = error_code(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "UNAUTHORIZED");
}

// ============================================================================
// Food Tests
// ============================================================================

#[tokio::test]
async fn test_create_post_and_serve_video() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, partner) = register_partner(&server).await;
    let (_, user) = register_user(&server).await;

    let post = create_post(&server, &partner.access_token, "Tacos").await;
    assert_eq!(post.food_partner_id, partner.food_partner.id);
    assert_eq!(post.like_count, 0);
    assert_eq!(post.save_count, 0);
    assert!(post.video_url.starts_with("/uploads/"));

    let response = server.get(&post.video_url).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.bytes().await.unwrap().as_ref(), b"fake-mp4-bytes");

    let response = server.get_auth("/api/food", &user.access_token).await.unwrap();
    let feed: FoodItemsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(feed.food_items.iter().any(|p| p.id == post.id));
}

#[tokio::test]
async fn test_like_roundtrip() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, partner) = register_partner(&server).await;
    let (_, user) = register_user(&server).await;
    let post = create_post(&server, &partner.access_token, "Ramen").await;
    let body = ToggleRequest {
        food_id: post.id.clone(),
    };

    let response = server
        .post_auth("/api/food/like", &user.access_token, &body)
        .await
        .unwrap();
    let liked: LikeResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(liked.liked);
    assert_eq!(liked.like_count, 1);

    let response = server
        .post_auth("/api/food/like", &user.access_token, &body)
        .await
        .unwrap();
    let unliked: LikeResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!unliked.liked);
    assert_eq!(unliked.like_count, 0);
}

#[tokio::test]
async fn test_concurrent_likes_follow_parity() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, partner) = register_partner(&server).await;
    let (_, user) = register_user(&server).await;
    let post = create_post(&server, &partner.access_token, "Pho").await;
    let body = ToggleRequest {
        food_id: post.id.clone(),
    };

    let toggles = (0..7).map(|_| server.post_auth("/api/food/like", &user.access_token, &body));
    for response in futures::future::join_all(toggles).await {
        assert_status(response.unwrap(), StatusCode::OK).await.unwrap();
    }

    // Seven toggles leave the edge in place; one more removes it
    let response = server
        .post_auth("/api/food/like", &user.access_token, &body)
        .await
        .unwrap();
    let last: LikeResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!last.liked);
    assert_eq!(last.like_count, 0);
}

#[tokio::test]
async fn test_save_and_saved_list() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, partner) = register_partner(&server).await;
    let (_, user) = register_user(&server).await;
    let kept = create_post(&server, &partner.access_token, "Kept").await;
    create_post(&server, &partner.access_token, "Skipped").await;

    let response = server
        .post_auth(
            "/api/food/save",
            &user.access_token,
            &ToggleRequest {
                food_id: kept.id.clone(),
            },
        )
        .await
        .unwrap();
    let saved: SaveResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(saved.saved);
    assert_eq!(saved.save_count, 1);

    let response = server
        .get_auth("/api/food/saved-video", &user.access_token)
        .await
        .unwrap();
    let list: SavedVideoResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.saved_video.len(), 1);
    assert_eq!(list.saved_video[0].id, kept.id);
}

#[tokio::test]
async fn test_toggle_unknown_post() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, user) = register_user(&server).await;

    let response = server
        .post_auth(
            "/api/food/like",
            &user.access_token,
            &ToggleRequest {
                food_id: "1".to_string(),
            },
        )
        .await
        .unwrap();
    let code = error_code(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_FOOD");
}

// ============================================================================
// Food Partner Tests
// ============================================================================

#[tokio::test]
async fn test_food_partner_profile() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, partner) = register_partner(&server).await;
    let (_, user) = register_user(&server).await;
    let post = create_post(&server, &partner.access_token, "Dumplings").await;

    let path = format!("/api/food-partner/{}", partner.food_partner.id);
    let response = server.get_auth(&path, &user.access_token).await.unwrap();
    let profile: FoodPartnerProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(profile.food_partner.id, partner.food_partner.id);
    assert_eq!(profile.food_partner.name, request.name);
    assert_eq!(profile.food_partner.food_items.len(), 1);
    assert_eq!(profile.food_partner.food_items[0].id, post.id);

    let response = server
        .get_auth("/api/food-partner/1", &user.access_token)
        .await
        .unwrap();
    let code = error_code(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_FOOD_PARTNER");
}
