//! ReelMate API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p reelmate-api
//! ```
//!
//! Configuration is loaded from environment variables and an optional `.env` file.

use reelmate_common::{try_init_tracing, AppConfig, ConfigError, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = AppConfig::from_env();

    let tracing_config = match &config {
        Ok(config) if config.app.env.is_production() => TracingConfig::production(),
        Ok(_) => TracingConfig::development(),
        Err(_) => TracingConfig::default(),
    };
    if let Err(e) = try_init_tracing(tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run(config).await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run(config: Result<AppConfig, ConfigError>) -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting ReelMate API Server...");

    let config = config.map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(
        env = ?config.app.env,
        address = %config.api.address(),
        "Configuration loaded"
    );

    reelmate_api::run(config).await?;

    Ok(())
}
