//! # reelmate-common
//!
//! Shared utilities including configuration, error handling, session tokens,
//! password hashing, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{hash_password, verify_password, Claims, TokenPair, TokenService, TokenType};
pub use config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment, JwtConfig,
    RateLimitConfig, ServerConfig, SnowflakeConfig, StorageConfig,
};
pub use error::AppError;
pub use telemetry::{init_tracing, try_init_tracing, TracingConfig, TracingError};
