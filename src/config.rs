//! Configuration for the Motion API client
//!
//! The API key and base URL are read once at startup and owned by the
//! client for its lifetime; no ambient/global state.

use anyhow::{bail, Result};

/// Production Motion API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.usemotion.com/v1";

/// Name of the required API key environment variable.
pub const API_KEY_ENV: &str = "MOTION_API_KEY";

/// Optional base URL override (staging, local mock).
pub const BASE_URL_ENV: &str = "MOTION_BASE_URL";

/// Client configuration
#[derive(Debug, Clone)]
pub struct MotionConfig {
    /// API key sent in the `X-API-Key` header on every request
    pub api_key: String,
    /// Base URL without a trailing slash, e.g. `https://api.usemotion.com/v1`
    pub base_url: String,
}

impl MotionConfig {
    /// Configuration with the production base URL.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the base URL (used by tests and staging setups).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Load configuration from the environment.
    ///
    /// `MOTION_API_KEY` is required; a missing or empty value is a fatal
    /// startup condition. `MOTION_BASE_URL` optionally overrides the
    /// production endpoint.
    pub fn from_env() -> Result<Self> {
        let api_key = match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => key,
            _ => bail!("{} environment variable is required", API_KEY_ENV),
        };

        let mut config = Self::new(api_key);
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            if !url.trim().is_empty() {
                config.base_url = url.trim_end_matches('/').to_string();
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let config = MotionConfig::new("test-key");
        assert_eq!(config.base_url, "https://api.usemotion.com/v1");
        assert_eq!(config.api_key, "test-key");
    }

    #[test]
    fn test_with_base_url() {
        let config = MotionConfig::new("k").with_base_url("http://localhost:9999/v1");
        assert_eq!(config.base_url, "http://localhost:9999/v1");
    }
}
