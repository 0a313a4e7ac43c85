//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use reelmate_common::{AppConfig, AppError, TokenService};
use reelmate_core::SnowflakeGenerator;
use reelmate_db::{create_pool, ensure_schema, PoolConfig};
use reelmate_service::{LocalMediaStorage, ServiceContext};
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tracing::info;

use crate::middleware::{apply_api_middleware, apply_middleware};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Path the upload directory is served under
pub const UPLOADS_PATH: &str = "/uploads";

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();

    let api = apply_api_middleware(
        create_router(),
        &config.rate_limit,
        config.storage.max_file_size_bytes(),
    )?;

    let router = api
        .merge(health_routes())
        .nest_service(UPLOADS_PATH, ServeDir::new(&config.storage.upload_dir));

    let router = apply_middleware(router, &config.cors, config.app.env.is_production());

    Ok(router.with_state(state))
}

/// Connect to PostgreSQL, bootstrap the schema, and wire the service context
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&PoolConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    ensure_schema(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    tokio::fs::create_dir_all(&config.storage.upload_dir)
        .await
        .map_err(|e| {
            AppError::Config(format!(
                "Failed to create upload directory {}: {}",
                config.storage.upload_dir, e
            ))
        })?;

    let media_storage = Arc::new(LocalMediaStorage::from_config(&config.storage));
    let token_service = Arc::new(TokenService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
        config.jwt.refresh_token_expiry,
    ));
    let snowflake_generator = Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id));

    let service_context =
        ServiceContext::postgres(pool, media_storage, token_service, snowflake_generator);

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: &str) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    let local_addr: SocketAddr = listener
        .local_addr()
        .map_err(|e| AppError::Config(e.to_string()))?;
    info!("Server listening on http://{}", local_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    info!("Server stopped");
    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();

    let state = create_app_state(config).await?;
    let app = create_app(state)?;

    run_server(app, &addr).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
