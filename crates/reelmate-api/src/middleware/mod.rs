//! Middleware stack for the API server
//!
//! Request ids, tracing, timeouts, CORS with credentials for the refresh
//! cookie, body size limits for uploads, and rate limiting.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::DefaultBodyLimit,
    http::{header, HeaderName, HeaderValue, Method, Request, StatusCode},
    Router,
};
use reelmate_common::{AppError, CorsConfig, RateLimitConfig};
use tower_governor::{governor::GovernorConfigBuilder, key_extractor::GlobalKeyExtractor, GovernorLayer};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::state::AppState;

/// Header name for request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Layers shared by every route
///
/// Request -> RequestID -> Trace -> Timeout -> CORS -> Handler
pub fn apply_middleware(
    router: Router<AppState>,
    cors_config: &CorsConfig,
    is_production: bool,
) -> Router<AppState> {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    router
        .layer(create_cors_layer(cors_config, is_production))
        // Returns 503 Service Unavailable on timeout
        .layer(TimeoutLayer::with_status_code(
            StatusCode::SERVICE_UNAVAILABLE,
            REQUEST_TIMEOUT,
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = request
                        .headers()
                        .get(REQUEST_ID_HEADER)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("unknown");

                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = %request_id,
                    )
                })
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
}

/// Layers for the `/api` routes only: upload size limit and rate limiting
///
/// The limiter uses a global key, so every client shares one bucket. The
/// bucket holds `burst` requests and regains one every
/// `1 / requests_per_second` seconds.
pub fn apply_api_middleware(
    router: Router<AppState>,
    rate_limit_config: &RateLimitConfig,
    max_body_bytes: usize,
) -> Result<Router<AppState>, AppError> {
    let invalid = || {
        AppError::Config(format!(
            "Invalid rate limit: {} requests/s, burst {}",
            rate_limit_config.requests_per_second, rate_limit_config.burst
        ))
    };

    if rate_limit_config.requests_per_second == 0 {
        return Err(invalid());
    }
    let replenish_nanos = 1_000_000_000 / u64::from(rate_limit_config.requests_per_second);

    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_nanosecond(replenish_nanos.max(1))
            .burst_size(rate_limit_config.burst)
            .key_extractor(GlobalKeyExtractor)
            .finish()
            .ok_or_else(invalid)?,
    );

    Ok(router
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(GovernorLayer {
            config: governor_conf,
        }))
}

/// CORS for a browser frontend that sends the refresh cookie
///
/// Credentials rule out a wildcard origin. Configured origins are used as
/// given; with none configured, development mirrors the caller's origin and
/// production allows no cross-origin requests.
fn create_cors_layer(config: &CorsConfig, is_production: bool) -> CorsLayer {
    let base_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .expose_headers([
            HeaderName::from_static(REQUEST_ID_HEADER),
            HeaderName::from_static("x-ratelimit-limit"),
            HeaderName::from_static("x-ratelimit-remaining"),
            HeaderName::from_static("x-ratelimit-reset"),
        ])
        .allow_credentials(true);

    if !config.allowed_origins.is_empty() {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| {
                origin.parse::<HeaderValue>().ok().or_else(|| {
                    tracing::warn!("Invalid CORS origin: {}", origin);
                    None
                })
            })
            .collect();

        tracing::info!("CORS: Allowing {} configured origins", origins.len());
        base_layer.allow_origin(AllowOrigin::list(origins))
    } else if is_production {
        tracing::warn!(
            "CORS: No allowed origins configured in production mode. \
             Requests from browsers will be blocked."
        );
        base_layer.allow_origin(AllowOrigin::list(Vec::<HeaderValue>::new()))
    } else {
        tracing::warn!(
            "CORS: Mirroring the request origin (development mode). \
             Configure CORS_ALLOWED_ORIGINS for production."
        );
        base_layer.allow_origin(AllowOrigin::mirror_request())
    }
}
