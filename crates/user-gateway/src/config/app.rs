//! Application configuration for the User Gateway server.

use std::time::Duration;

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// Environment variables are prefixed with `GATEWAY_`:
/// - `GATEWAY_HOST`: Server bind address (default: "0.0.0.0")
/// - `GATEWAY_PORT`: Server port (default: 3000)
/// - `GATEWAY_UPSTREAM_URL`: Base URL of the remote user service
/// - `GATEWAY_UPSTREAM_TIMEOUT_SECS`: Outbound request timeout (default: 30)
/// - `GATEWAY_BODY_LIMIT_BYTES`: Max body size buffered by `/process` (default: 2 MiB)
/// - `GATEWAY_CORS_ALLOWED_ORIGINS`: Comma-separated origins (default: any)
/// - `GATEWAY_LOG_JSON`: Emit logs as JSON lines (default: false)
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server bind address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Remote user service base URL
    #[serde(default = "default_upstream_url")]
    pub upstream_url: String,

    /// Outbound request timeout in seconds
    #[serde(default = "default_upstream_timeout_secs")]
    pub upstream_timeout_secs: u64,

    /// Body size limit for routes that buffer the request
    #[serde(default = "default_body_limit_bytes")]
    pub body_limit_bytes: usize,

    /// Allowed CORS origins, comma-separated
    #[serde(default)]
    pub cors_allowed_origins: Option<String>,

    /// Use the JSON log formatter
    #[serde(default)]
    pub log_json: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_upstream_url() -> String {
    "https://jsonplaceholder.typicode.com".to_string()
}

fn default_upstream_timeout_secs() -> u64 {
    30
}

fn default_body_limit_bytes() -> usize {
    2 * 1024 * 1024
}

impl AppConfig {
    const PREFIX: &'static str = "GATEWAY_";

    /// Load configuration from environment variables.
    ///
    /// Environment variables are prefixed with `GATEWAY_`.
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::prefixed(Self::PREFIX).from_env::<AppConfig>()
    }

    /// Load configuration from an explicit set of variables.
    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(Self::PREFIX).from_iter(vars)
    }

    /// Get the server bind address as a string suitable for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }

    /// Configured CORS origins, or `None` when any origin is allowed.
    pub fn cors_origins(&self) -> Option<Vec<String>> {
        let origins: Vec<String> = self
            .cors_allowed_origins
            .as_deref()?
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        if origins.is_empty() {
            None
        } else {
            Some(origins)
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            upstream_url: default_upstream_url(),
            upstream_timeout_secs: default_upstream_timeout_secs(),
            body_limit_bytes: default_body_limit_bytes(),
            cors_allowed_origins: None,
            log_json: false,
        }
    }
}
