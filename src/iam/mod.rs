//! IAM v2 API surface
//!
//! Covers the two IAM v2 resource families of the management API:
//! service accounts and API keys. Each family gets a lightweight API
//! handle borrowing the shared [`ConfluentClient`].

mod api_keys;
mod service_accounts;

pub use api_keys::{ApiKey, ApiKeySpec, ApiKeysApi, NewApiKey, ResourceRef, API_KEYS_PATH};
pub use service_accounts::{ServiceAccount, ServiceAccountsApi, SERVICE_ACCOUNTS_PATH};

use crate::http::ConfluentClient;

/// Base path of the IAM v2 API
pub const IAM_V2_PATH: &str = "/iam/v2";

impl ConfluentClient {
    /// Handle for the service accounts API
    pub fn service_accounts(&self) -> ServiceAccountsApi<'_> {
        ServiceAccountsApi::new(self)
    }

    /// Handle for the API keys API
    pub fn api_keys(&self) -> ApiKeysApi<'_> {
        ApiKeysApi::new(self)
    }
}

/// Title-case a phrase: first letter of every alphabetic run uppercased,
/// the rest lowercased. Used for defaulted descriptions.
pub(crate) fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_alpha = false;
    for ch in input.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}
