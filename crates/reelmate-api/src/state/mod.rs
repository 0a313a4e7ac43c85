//! Application state
//!
//! Holds the shared state for the Axum application: the service context,
//! the configuration, and the refresh cookie policy derived from it.

use std::sync::Arc;

use reelmate_common::AppConfig;
use reelmate_service::ServiceContext;

use crate::cookies::RefreshCookiePolicy;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    service_context: Arc<ServiceContext>,
    config: Arc<AppConfig>,
    refresh_cookie: RefreshCookiePolicy,
}

impl AppState {
    pub fn new(service_context: ServiceContext, config: AppConfig) -> Self {
        let refresh_cookie = RefreshCookiePolicy::from_config(&config);
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
            refresh_cookie,
        }
    }

    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Attributes every `refreshToken` cookie is set and cleared with
    pub fn refresh_cookie(&self) -> &RefreshCookiePolicy {
        &self.refresh_cookie
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &self.service_context)
            .field("env", &self.config.app.env)
            .field("refresh_cookie", &self.refresh_cookie)
            .finish()
    }
}
