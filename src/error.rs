//! Error types for the Confluent Cloud SDK
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use serde::Deserialize;
use thiserror::Error;

/// The main error type for the Confluent Cloud SDK
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Credential error: {message}")]
    Credentials { message: String },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A non-success response carrying a decoded Confluent error envelope.
    #[error("Confluent Cloud API returned HTTP {status}: {}", summarize(.errors))]
    Api {
        status: u16,
        errors: Vec<ApiErrorDetail>,
    },

    /// A non-success response whose body was not a Confluent error envelope.
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Rate limited, retry after {retry_after_seconds}s")]
    RateLimited { retry_after_seconds: u64 },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Max retries ({max_retries}) exceeded")]
    MaxRetriesExceeded { max_retries: u32 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

/// One entry of the Confluent error envelope
/// (`{"errors": [{"id", "status", "code", "detail", "source"}]}`).
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub id: Option<String>,
    /// HTTP status as reported inside the envelope (a string, e.g. "409").
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub source: Option<serde_json::Value>,
}

/// The Confluent error envelope wrapping one or more error details.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub errors: Vec<ApiErrorDetail>,
}

fn summarize(errors: &[ApiErrorDetail]) -> String {
    errors
        .iter()
        .map(|e| {
            e.detail
                .as_deref()
                .or(e.code.as_deref())
                .unwrap_or("unknown error")
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("; ")
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a credential error
    pub fn credentials(message: impl Into<String>) -> Self {
        Self::Credentials {
            message: message.into(),
        }
    }

    /// Build an API error from a response status and raw body.
    ///
    /// Decodes the Confluent error envelope when the body carries one and
    /// falls back to the raw body otherwise.
    pub fn from_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) if !envelope.errors.is_empty() => Self::Api {
                status,
                errors: envelope.errors,
            },
            _ => Self::HttpStatus {
                status,
                body: body.to_string(),
            },
        }
    }

    /// HTTP status carried by this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } | Error::HttpStatus { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            Error::RateLimited { .. } => Some(429),
            _ => None,
        }
    }

    /// True when the server reported the resource as missing (404)
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// True when the server reported a conflicting resource (409)
    pub fn is_conflict(&self) -> bool {
        self.status() == Some(409)
    }

    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(_) | Error::RateLimited { .. } | Error::Timeout { .. } => true,
            Error::Api { status, .. } | Error::HttpStatus { status, .. } => {
                is_retryable_status(*status)
            }
            _ => false,
        }
    }
}

/// Check if an HTTP status code is retryable
pub(crate) fn is_retryable_status(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504)
}

/// Result type alias for the Confluent Cloud SDK
pub type Result<T> = std::result::Result<T, Error>;
