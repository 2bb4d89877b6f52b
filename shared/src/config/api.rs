//! Auth backend API configuration

use serde::{Deserialize, Serialize};

/// Configuration for the auth backend API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the backend (no trailing slash)
    pub base_url: String,

    /// Path of the OTP verification endpoint
    #[serde(default = "default_verify_path")]
    pub verify_code_path: String,

    /// Path of the OTP (re)send endpoint
    #[serde(default = "default_send_path")]
    pub send_code_path: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from("http://localhost:8080"),
            verify_code_path: default_verify_path(),
            send_code_path: default_send_path(),
            request_timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// Create a new API configuration with a base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            ..Default::default()
        }
    }

    /// Set the request timeout in seconds
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    /// Create configuration from environment variables
    ///
    /// Reads `RELOOP_API_BASE_URL`, `RELOOP_API_TIMEOUT_SECS`; missing
    /// variables fall back to defaults.
    pub fn from_env() -> Self {
        let base_url = std::env::var("RELOOP_API_BASE_URL")
            .unwrap_or_else(|_| ApiConfig::default().base_url);
        let mut config = Self::new(base_url);
        config.request_timeout_secs = std::env::var("RELOOP_API_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_secs);
        config
    }

    /// Full URL of the OTP verification endpoint
    pub fn verify_code_url(&self) -> String {
        format!("{}{}", self.base_url, self.verify_code_path)
    }

    /// Full URL of the OTP (re)send endpoint
    pub fn send_code_url(&self) -> String {
        format!("{}{}", self.base_url, self.send_code_path)
    }
}

fn default_verify_path() -> String {
    String::from("/auth/verify-code")
}

fn default_send_path() -> String {
    String::from("/auth/send-code")
}

fn default_timeout_secs() -> u64 {
    30
}
