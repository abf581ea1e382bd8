//! Client configuration and credentials
//!
//! The Confluent Cloud management API authenticates every request with a
//! Cloud API key/secret pair sent as HTTP Basic credentials. [`Credentials`]
//! holds that pair and [`ClientConfig`] carries everything else the client
//! needs (base URL, timeouts, retry and rate-limit settings).

use crate::http::RateLimiterConfig;
use crate::types::BackoffKind;
use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use std::time::Duration;

/// Default base URL for the Confluent Cloud management API
pub const DEFAULT_BASE_URL: &str = "https://api.confluent.cloud";

/// Environment variable holding the Cloud API key
pub const ENV_API_KEY: &str = "CONFLUENT_CLOUD_API_KEY";

/// Environment variable holding the Cloud API secret
pub const ENV_API_SECRET: &str = "CONFLUENT_CLOUD_API_SECRET";

/// Cloud API key/secret pair
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
    api_secret: String,
}

impl Credentials {
    /// Create credentials from an API key and secret
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        let api_secret = api_secret.into();
        if api_key.is_empty() {
            return Err(Error::credentials("API key must not be empty"));
        }
        if api_secret.is_empty() {
            return Err(Error::credentials("API secret must not be empty"));
        }
        Ok(Self {
            api_key,
            api_secret,
        })
    }

    /// Load credentials from `CONFLUENT_CLOUD_API_KEY` /
    /// `CONFLUENT_CLOUD_API_SECRET`
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(ENV_API_KEY)
            .map_err(|_| Error::credentials(format!("{ENV_API_KEY} is not set")))?;
        let api_secret = std::env::var(ENV_API_SECRET)
            .map_err(|_| Error::credentials(format!("{ENV_API_SECRET} is not set")))?;
        Self::new(api_key, api_secret)
    }

    /// The API key (safe to log)
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Value for the `Authorization` header
    pub fn authorization_header(&self) -> String {
        let raw = format!("{}:{}", self.api_key, self.api_secret);
        format!("Basic {}", BASE64.encode(raw))
    }
}

// The secret never appears in Debug output.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"***")
            .finish()
    }
}

/// Configuration for the Confluent Cloud client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for all requests
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Maximum number of retries
    pub max_retries: u32,
    /// Initial delay for backoff
    pub initial_backoff: Duration,
    /// Maximum delay for backoff
    pub max_backoff: Duration,
    /// Type of backoff strategy
    pub backoff: BackoffKind,
    /// Rate limiter configuration
    pub rate_limit: Option<RateLimiterConfig>,
    /// User agent string
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 3,
            initial_backoff: Duration::from_millis(100),
            max_backoff: Duration::from_secs(60),
            backoff: BackoffKind::Exponential,
            rate_limit: Some(RateLimiterConfig::default()),
            user_agent: format!("confluent-cloud-sdk/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for [`ClientConfig`]
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set max retries
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.config.max_retries = retries;
        self
    }

    /// Set backoff configuration
    pub fn backoff(mut self, kind: BackoffKind, initial: Duration, max: Duration) -> Self {
        self.config.backoff = kind;
        self.config.initial_backoff = initial;
        self.config.max_backoff = max;
        self
    }

    /// Set rate limiter
    pub fn rate_limit(mut self, config: RateLimiterConfig) -> Self {
        self.config.rate_limit = Some(config);
        self
    }

    /// Disable rate limiting
    pub fn no_rate_limit(mut self) -> Self {
        self.config.rate_limit = None;
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
