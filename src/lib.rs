//! # Confluent Cloud SDK
//!
//! Client library for the Confluent Cloud management REST API.
//!
//! ## Features
//!
//! - **Authenticated client**: Cloud API key/secret applied as HTTP Basic
//!   credentials on every request
//! - **Retries and backoff**: transient failures retried with constant,
//!   linear, or exponential backoff; 429 honors `Retry-After`
//! - **Rate limiting**: token bucket pacing inside the API quota
//! - **IAM v2**: typed models and operations for service accounts and
//!   API keys
//! - **Pagination**: list endpoints followed across `metadata.next` links
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use confluent_cloud_sdk::{ConfluentClient, NewApiKey, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     // Credentials from CONFLUENT_CLOUD_API_KEY / CONFLUENT_CLOUD_API_SECRET
//!     let client = ConfluentClient::from_env()?;
//!
//!     let account = client
//!         .service_accounts()
//!         .create("ci-deployer", Some("Deploys from CI"))
//!         .await?;
//!
//!     let key = client
//!         .api_keys()
//!         .create(NewApiKey::new(&account.id, "lkc-12345"))
//!         .await?;
//!     println!("created key {} (store the secret now)", key.id);
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: finish field-level docs before 1.0

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the SDK
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration and credentials
pub mod config;

/// HTTP client with auth, retry, and rate limiting
pub mod http;

/// Shared wire types for API resources
pub mod models;

/// Pagination over list endpoints
pub mod pagination;

/// IAM v2 API surface (service accounts, API keys)
pub mod iam;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{ClientConfig, Credentials, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use http::{ConfluentClient, RequestOptions};
pub use iam::{ApiKey, NewApiKey, ServiceAccount};
pub use models::ObjectMeta;
pub use pagination::{ListMeta, Page};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
