//! Client configuration

use crate::{ClientError, ClientResult, GoodsApi, NetworkTransport};

/// Base URL of the goods service
pub const ENV_BASE_URL: &str = "GOODS_API_BASE_URL";
/// Bearer token, empty means none
pub const ENV_TOKEN: &str = "GOODS_API_TOKEN";
/// Request timeout in seconds
pub const ENV_TIMEOUT_SECS: &str = "GOODS_API_TIMEOUT_SECS";

/// Client configuration for connecting to the goods service
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8080")
    pub base_url: String,

    /// Bearer token for authentication
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: 30,
        }
    }

    /// Load configuration from the environment (and `.env`, if present)
    pub fn from_env() -> ClientResult<Self> {
        // A missing .env file is fine, the variables may come from the process
        let _ = dotenv::dotenv();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ClientResult<Self> {
        let base_url = lookup(ENV_BASE_URL)
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| ClientError::Config(format!("{ENV_BASE_URL} must be set")))?;

        let mut config = Self::new(base_url);

        if let Some(token) = lookup(ENV_TOKEN).filter(|s| !s.is_empty()) {
            config = config.with_token(token);
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let timeout = raw.trim().parse::<u64>().map_err(|_| {
                ClientError::Config(format!("{ENV_TIMEOUT_SECS} must be a number, got {raw:?}"))
            })?;
            config = config.with_timeout(timeout);
        }

        Ok(config)
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create a network transport from this configuration
    pub fn build_transport(&self) -> ClientResult<NetworkTransport> {
        NetworkTransport::new(self)
    }

    /// Create a goods API client over a network transport
    pub fn build_goods_api(&self) -> ClientResult<GoodsApi<NetworkTransport>> {
        Ok(GoodsApi::new(self.build_transport()?))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}
