//! Refresh token cookie
//!
//! The refresh token travels only in the `refreshToken` cookie. It is set
//! with one attribute set and cleared with exactly the same set, otherwise
//! browsers keep the old cookie around.

use axum_extra::extract::cookie::{Cookie, SameSite};
use reelmate_common::AppConfig;
use time::Duration;

/// Name of the cookie holding the refresh token
pub const REFRESH_COOKIE: &str = "refreshToken";

/// Environment-dependent attributes of the refresh cookie
///
/// Production cookies are `Secure; SameSite=None` so a frontend on another
/// origin can send them. Elsewhere they are `SameSite=Lax` and not secure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshCookiePolicy {
    secure: bool,
    max_age: Duration,
}

impl RefreshCookiePolicy {
    pub fn new(secure: bool, max_age_seconds: i64) -> Self {
        Self {
            secure,
            max_age: Duration::seconds(max_age_seconds),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.app.env.is_production(),
            config.jwt.refresh_token_expiry,
        )
    }

    /// Cookie carrying a freshly issued refresh token
    pub fn issue(&self, refresh_token: impl Into<String>) -> Cookie<'static> {
        let same_site = if self.secure {
            SameSite::None
        } else {
            SameSite::Lax
        };

        Cookie::build((REFRESH_COOKIE, refresh_token.into()))
            .http_only(true)
            .secure(self.secure)
            .same_site(same_site)
            .path("/")
            .max_age(self.max_age)
            .build()
    }

    /// Cookie that makes the browser drop the refresh token
    pub fn removal(&self) -> Cookie<'static> {
        let mut cookie = self.issue("");
        cookie.make_removal();
        cookie
    }
}
