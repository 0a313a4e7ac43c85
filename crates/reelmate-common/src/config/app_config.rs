//! Application configuration
//!
//! Loaded once at startup from environment variables (and a `.env` file when
//! present), then shared read-only by the token service, cookie policy, CORS
//! layer, and media storage.

use serde::Deserialize;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
    pub storage: StorageConfig,
    pub snowflake: SnowflakeConfig,
}

/// General application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
}

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Ok(Self::Production),
            "staging" => Ok(Self::Staging),
            "development" | "dev" => Ok(Self::Development),
            other => Err(format!("unknown environment '{other}'")),
        }
    }
}

/// HTTP listener configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Session token configuration (lifetimes in seconds)
#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry: i64,
    pub refresh_token_expiry: i64,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("access_token_expiry", &self.access_token_expiry)
            .field("refresh_token_expiry", &self.refresh_token_expiry)
            .finish()
    }
}

/// Rate limiting configuration
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub requests_per_second: u32,
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

/// Uploaded media configuration
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory uploaded videos are written to
    pub upload_dir: String,
    pub max_file_size_mb: u32,
    /// Public URL prefix under which `upload_dir` is served
    pub media_base_url: String,
}

impl StorageConfig {
    #[must_use]
    pub fn max_file_size_bytes(&self) -> usize {
        self.max_file_size_mb as usize * 1024 * 1024
    }
}

/// Snowflake ID generator configuration
#[derive(Debug, Clone, Default)]
pub struct SnowflakeConfig {
    pub worker_id: u16,
}

const DEFAULT_APP_NAME: &str = "reelmate";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_MAX_CONNECTIONS: u32 = 20;
const DEFAULT_MIN_CONNECTIONS: u32 = 5;
const DEFAULT_ACCESS_TOKEN_EXPIRY: i64 = 900; // 15 minutes
const DEFAULT_REFRESH_TOKEN_EXPIRY: i64 = 604_800; // 7 days
const DEFAULT_REQUESTS_PER_SECOND: u32 = 10;
const DEFAULT_BURST: u32 = 50;
const DEFAULT_UPLOAD_DIR: &str = "./uploads";
const DEFAULT_MAX_FILE_SIZE_MB: u32 = 100;
const DEFAULT_MEDIA_BASE_URL: &str = "/uploads";

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a required variable is missing or a value cannot be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    ///
    /// # Errors
    /// Returns an error if a required variable is missing or a value cannot be parsed
    pub fn from_source<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let source = Source(lookup);

        Ok(Self {
            app: AppSettings {
                name: source.string_or("APP_NAME", DEFAULT_APP_NAME),
                env: source.parse_or("APP_ENV", Environment::default())?,
            },
            api: ServerConfig {
                host: source.string_or("API_HOST", DEFAULT_HOST),
                port: source.required_parse("API_PORT")?,
            },
            database: DatabaseConfig {
                url: source.required("DATABASE_URL")?,
                max_connections: source.parse_or("DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
                min_connections: source.parse_or("DATABASE_MIN_CONNECTIONS", DEFAULT_MIN_CONNECTIONS)?,
            },
            jwt: JwtConfig {
                secret: source.required("JWT_SECRET")?,
                access_token_expiry: source
                    .parse_or("JWT_ACCESS_TOKEN_EXPIRY", DEFAULT_ACCESS_TOKEN_EXPIRY)?,
                refresh_token_expiry: source
                    .parse_or("JWT_REFRESH_TOKEN_EXPIRY", DEFAULT_REFRESH_TOKEN_EXPIRY)?,
            },
            rate_limit: RateLimitConfig {
                requests_per_second: source
                    .parse_or("RATE_LIMIT_REQUESTS_PER_SECOND", DEFAULT_REQUESTS_PER_SECOND)?,
                burst: source.parse_or("RATE_LIMIT_BURST", DEFAULT_BURST)?,
            },
            cors: CorsConfig {
                allowed_origins: source
                    .get("CORS_ALLOWED_ORIGINS")
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|o| !o.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
            storage: StorageConfig {
                upload_dir: source.string_or("UPLOAD_DIR", DEFAULT_UPLOAD_DIR),
                max_file_size_mb: source.parse_or("MAX_FILE_SIZE_MB", DEFAULT_MAX_FILE_SIZE_MB)?,
                media_base_url: source
                    .string_or("MEDIA_BASE_URL", DEFAULT_MEDIA_BASE_URL)
                    .trim_end_matches('/')
                    .to_string(),
            },
            snowflake: SnowflakeConfig {
                worker_id: source.parse_or("WORKER_ID", 0)?,
            },
        })
    }
}

struct Source<F>(F);

impl<F> Source<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, key: &str) -> Option<String> {
        (self.0)(key).filter(|v| !v.trim().is_empty())
    }

    fn string_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    fn required(&self, key: &'static str) -> Result<String, ConfigError> {
        self.get(key).ok_or(ConfigError::MissingVar(key))
    }

    fn required_parse<T: FromStr>(&self, key: &'static str) -> Result<T, ConfigError> {
        let raw = self.required(key)?;
        raw.trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key, raw))
    }

    fn parse_or<T: FromStr>(&self, key: &'static str, default: T) -> Result<T, ConfigError> {
        match self.get(key) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue(key, raw)),
            None => Ok(default),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
