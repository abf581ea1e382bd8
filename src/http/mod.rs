//! HTTP layer for the Confluent Cloud management API
//!
//! # Features
//!
//! - **Basic Auth**: Cloud API key/secret on every request
//! - **Automatic Retries**: Configurable retry logic with backoff
//! - **Rate Limiting**: Token bucket rate limiter using governor
//! - **Error Mapping**: Confluent error envelope decoding

mod client;
mod rate_limit;

pub use client::{ConfluentClient, RequestOptions};
pub use rate_limit::{RateLimiter, RateLimiterConfig};

#[cfg(test)]
mod tests;
