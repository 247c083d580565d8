//! Client configuration: upstream base address and network timeout.
//!
//! Values come from the process environment. Every variable is optional;
//! a missing one falls back to the default below, a malformed one is a
//! [`ApiError::Config`].

use std::time::Duration;

use crate::error::ApiError;

/// Production BigTime API root.
pub const DEFAULT_BASE_URL: &str = "https://iq.bigtime.net/BigtimeData/api/v2";

/// Applied to the whole request (connect, send, and body read).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const BASE_URL_VAR: &str = "BIGTIME_BASE_URL";
pub const TIMEOUT_VAR: &str = "BIGTIME_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Point the client at `base_url` with the default timeout.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ApiError> {
        let mut config = Self::default();

        if let Some(base_url) = lookup(BASE_URL_VAR).filter(|v| !v.trim().is_empty()) {
            config.base_url = base_url.trim().trim_end_matches('/').to_string();
        }

        if let Some(raw) = lookup(TIMEOUT_VAR).filter(|v| !v.trim().is_empty()) {
            let secs: u64 = raw
                .trim()
                .parse()
                .map_err(|_| ApiError::Config(format!("{TIMEOUT_VAR} must be a whole number of seconds, got {raw:?}")))?;
            if secs == 0 {
                return Err(ApiError::Config(format!("{TIMEOUT_VAR} must be greater than zero")));
            }
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}
