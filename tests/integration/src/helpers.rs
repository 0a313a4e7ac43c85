//! Test helpers for integration tests
//!
//! Spawns a server on an ephemeral port and wraps the HTTP calls the tests
//! make against it.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use reelmate_api::{create_app, create_app_state};
use reelmate_common::{AppConfig, Environment};
use reqwest::{multipart::Form, Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    /// Client with a cookie store, so the refresh cookie round-trips
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        Self::start_with_config(config).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let state = create_app_state(config).await?;
        let app = create_app(state)?;

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// Make a GET request with auth token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self
            .client
            .get(self.url(path))
            .bearer_auth(token)
            .send()
            .await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    /// Make a POST request without a body (cookies still apply)
    pub async fn post_empty(&self, path: &str) -> Result<Response> {
        Ok(self.client.post(self.url(path)).send().await?)
    }

    /// Make a POST request with auth token
    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(self
            .client
            .post(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await?)
    }

    /// Make a multipart POST request with auth token
    pub async fn post_multipart(&self, path: &str, token: &str, form: Form) -> Result<Response> {
        Ok(self
            .client
            .post(self.url(path))
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await?)
    }
}

/// Configuration from the environment, with uploads in a scratch directory
/// and limits loose enough for bursts of test traffic
///
/// Only `DATABASE_URL` is required; the port and signing secret fall back
/// to test values.
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let mut config = AppConfig::from_source(|key| {
        std::env::var(key).ok().or_else(|| match key {
            "API_PORT" => Some("0".to_string()),
            "JWT_SECRET" => Some("integration-test-secret".to_string()),
            _ => None,
        })
    })
    .map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    config.app.env = Environment::Development;
    config.rate_limit.requests_per_second = 1000;
    config.rate_limit.burst = 1000;
    config.storage.upload_dir = std::env::temp_dir()
        .join(format!("reelmate-it-{}", uuid::Uuid::new_v4().simple()))
        .to_string_lossy()
        .into_owned();

    Ok(config)
}

/// Helper to check if test environment is available
pub async fn check_test_env() -> bool {
    dotenvy::dotenv().ok();

    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}

/// Error code of a `{"error": {...}}` body
pub async fn error_code(response: Response, expected_status: StatusCode) -> Result<String> {
    let body: serde_json::Value = assert_json(response, expected_status).await?;
    Ok(body["error"]["code"].as_str().unwrap_or_default().to_string())
}
