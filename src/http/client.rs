//! Confluent Cloud HTTP client
//!
//! Every API handle in this crate funnels through [`ConfluentClient`]:
//! - Cloud API key/secret applied as HTTP Basic credentials
//! - Automatic retries with configurable backoff
//! - Rate limiting to stay inside the management API quota
//! - Decoding of JSON bodies and the Confluent error envelope

use super::rate_limit::RateLimiter;
use crate::config::{ClientConfig, Credentials};
use crate::error::{Error, Result};
use crate::types::BackoffKind;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Configuration for a single request
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Query parameters
    pub query: Vec<(String, String)>,
    /// Request body (JSON)
    pub body: Option<Value>,
    /// Override timeout for this request
    pub timeout: Option<Duration>,
    /// Override max retries for this request
    pub max_retries: Option<u32>,
}

impl RequestOptions {
    /// Create empty request options
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Set JSON body
    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Set timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set max retries
    #[must_use]
    pub fn retries(mut self, retries: u32) -> Self {
        self.max_retries = Some(retries);
        self
    }
}

/// Client for the Confluent Cloud management API
///
/// Cheap to clone; clones share the connection pool and rate limiter.
#[derive(Clone)]
pub struct ConfluentClient {
    http: Client,
    config: ClientConfig,
    credentials: Credentials,
    rate_limiter: Option<RateLimiter>,
}

impl ConfluentClient {
    /// Create a client with default configuration
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(Error::Http)?;

        let rate_limiter = config.rate_limit.as_ref().map(RateLimiter::new);

        Ok(Self {
            http,
            config,
            credentials,
            rate_limiter,
        })
    }

    /// Create a client from `CONFLUENT_CLOUD_API_KEY` /
    /// `CONFLUENT_CLOUD_API_SECRET`
    pub fn from_env() -> Result<Self> {
        Self::new(Credentials::from_env()?)
    }

    /// Base URL requests are resolved against
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// The active client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Make a GET request and decode the JSON response
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request_json(Method::GET, path, RequestOptions::default())
            .await
    }

    /// Make a GET request with options and decode the JSON response
    pub async fn get_with<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T> {
        self.request_json(Method::GET, path, options).await
    }

    /// Make a POST request with a JSON body and decode the response
    pub async fn post<T: DeserializeOwned>(&self, path: &str, body: Value) -> Result<T> {
        self.request_json(Method::POST, path, RequestOptions::default().json(body))
            .await
    }

    /// Make a PATCH request with a JSON body and decode the response
    pub async fn patch<T: DeserializeOwned>(&self, path: &str, body: Value) -> Result<T> {
        self.request_json(Method::PATCH, path, RequestOptions::default().json(body))
            .await
    }

    /// Make a DELETE request, discarding the (usually empty) body
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.request(Method::DELETE, path, RequestOptions::default())
            .await?;
        Ok(())
    }

    /// Make a request and decode the JSON response
    pub async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> Result<T> {
        let response = self.request(method, path, options).await?;
        let json: T = response.json().await.map_err(Error::Http)?;
        Ok(json)
    }

    /// Make a generic request with retries, backoff, and auth applied
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> Result<Response> {
        let full_url = self.build_url(path);
        let max_retries = options.max_retries.unwrap_or(self.config.max_retries);
        let timeout = options.timeout.unwrap_or(self.config.timeout);

        let mut last_error = None;
        let mut attempt = 0;

        while attempt <= max_retries {
            if let Some(ref limiter) = self.rate_limiter {
                limiter.wait().await;
            }

            let mut req = self
                .http
                .request(method.clone(), &full_url)
                .header(AUTHORIZATION, self.credentials.authorization_header())
                .timeout(timeout);

            if !options.query.is_empty() {
                req = req.query(&options.query);
            }

            if let Some(ref body) = options.body {
                req = req.json(body);
            }

            match req.send().await {
                Ok(response) => {
                    let status = response.status();

                    if status == StatusCode::TOO_MANY_REQUESTS {
                        let retry_after = extract_retry_after(&response);
                        if attempt < max_retries {
                            warn!(
                                "Rate limited (429), attempt {}/{}, waiting {}s",
                                attempt + 1,
                                max_retries + 1,
                                retry_after
                            );
                            tokio::time::sleep(Duration::from_secs(retry_after)).await;
                            attempt += 1;
                            continue;
                        }
                        return Err(Error::RateLimited {
                            retry_after_seconds: retry_after,
                        });
                    }

                    if is_retryable_server_error(status) && attempt < max_retries {
                        let delay = self.calculate_backoff(attempt);
                        warn!(
                            "Request failed with {}, attempt {}/{}, retrying in {:?}",
                            status.as_u16(),
                            attempt + 1,
                            max_retries + 1,
                            delay
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        last_error = Some(Error::HttpStatus {
                            status: status.as_u16(),
                            body: String::new(),
                        });
                        continue;
                    }

                    if !status.is_success() {
                        let body = response.text().await.unwrap_or_default();
                        return Err(Error::from_response(status.as_u16(), &body));
                    }

                    debug!("Request succeeded: {} {}", method, full_url);
                    return Ok(response);
                }
                Err(e) => {
                    if e.is_timeout() {
                        if attempt < max_retries {
                            let delay = self.calculate_backoff(attempt);
                            warn!(
                                "Request timeout, attempt {}/{}, retrying in {:?}",
                                attempt + 1,
                                max_retries + 1,
                                delay
                            );
                            tokio::time::sleep(delay).await;
                            attempt += 1;
                            last_error = Some(Error::Timeout {
                                timeout_ms: timeout.as_millis() as u64,
                            });
                            continue;
                        }
                        return Err(Error::Timeout {
                            timeout_ms: timeout.as_millis() as u64,
                        });
                    }

                    if e.is_connect() && attempt < max_retries {
                        let delay = self.calculate_backoff(attempt);
                        warn!(
                            "Connection error, attempt {}/{}, retrying in {:?}",
                            attempt + 1,
                            max_retries + 1,
                            delay
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        last_error = Some(Error::Http(e));
                        continue;
                    }

                    return Err(Error::Http(e));
                }
            }
        }

        Err(last_error.unwrap_or(Error::MaxRetriesExceeded { max_retries }))
    }

    /// Resolve a path against the base URL; absolute URLs (pagination
    /// `metadata.next` links) pass through untouched.
    pub(crate) fn build_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        let base = self.config.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// Calculate backoff delay for a given attempt
    pub fn calculate_backoff(&self, attempt: u32) -> Duration {
        let delay = match self.config.backoff {
            BackoffKind::Constant => self.config.initial_backoff,
            BackoffKind::Linear => self.config.initial_backoff * (attempt + 1),
            BackoffKind::Exponential => {
                let factor = 2u32.saturating_pow(attempt);
                self.config.initial_backoff * factor
            }
        };

        std::cmp::min(delay, self.config.max_backoff)
    }

    /// Check if rate limiting is enabled
    pub fn has_rate_limiter(&self) -> bool {
        self.rate_limiter.is_some()
    }
}

impl std::fmt::Debug for ConfluentClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfluentClient")
            .field("config", &self.config)
            .field("credentials", &self.credentials)
            .field("has_rate_limiter", &self.rate_limiter.is_some())
            .finish_non_exhaustive()
    }
}

/// 5xx statuses worth retrying (429 is handled separately via Retry-After)
fn is_retryable_server_error(status: StatusCode) -> bool {
    matches!(status.as_u16(), 500 | 502 | 503 | 504 | 520 | 521 | 522)
}

/// Extract retry-after header value, defaulting to 60s
fn extract_retry_after(response: &Response) -> u64 {
    response
        .headers()
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse().ok())
        .unwrap_or(60)
}
