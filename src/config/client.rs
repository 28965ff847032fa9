//! # HTTP Client Configuration
//!
//! Backend location and transport settings loaded from environment variables.

use std::time::Duration;

use super::env_var_or_default;
use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};

/// HTTP client configuration
///
/// All settings have sensible defaults and can be overridden via environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base URL (`SALON_API_BASE_URL`)
    /// May carry a path prefix such as `/api`; request paths are appended to it
    pub base_url: String,
    /// Total request timeout in seconds (`SALON_API_TIMEOUT_SECS`)
    pub timeout_secs: u64,
    /// Connection timeout in seconds (`SALON_API_CONNECT_TIMEOUT_SECS`)
    pub connect_timeout_secs: u64,
    /// User agent header (`SALON_API_USER_AGENT`)
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            base_url: env_var_or_default("SALON_API_BASE_URL", DEFAULT_BASE_URL.to_string()),
            timeout_secs: env_var_or_default("SALON_API_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS),
            connect_timeout_secs: env_var_or_default(
                "SALON_API_CONNECT_TIMEOUT_SECS",
                DEFAULT_CONNECT_TIMEOUT_SECS,
            ),
            user_agent: env_var_or_default("SALON_API_USER_AGENT", DEFAULT_USER_AGENT.to_string()),
        }
    }

    /// Configuration pointing at a specific base URL, other settings default
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}
