//! API keys (`/iam/v2/api-keys`)
//!
//! An API key belongs to an owner (service account or user) and grants
//! access to one resource (a Kafka cluster, cloud endpoint, ...). The
//! key secret is returned exactly once, in the creation response.

use super::title_case;
use crate::error::Result;
use crate::http::{ConfluentClient, RequestOptions};
use crate::models::ObjectMeta;
use crate::pagination::{collect_all, Page};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

/// Collection path for API keys
pub const API_KEYS_PATH: &str = "/iam/v2/api-keys";

/// Reference to an owner or resource inside an API key spec
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_name: Option<String>,
}

/// Spec block of an API key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiKeySpec {
    pub owner: ResourceRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<ResourceRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Only present in the creation response
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

/// A Confluent Cloud API key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiKey {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ObjectMeta>,
    pub spec: ApiKeySpec,
}

impl ApiKey {
    /// Id of the owning principal
    pub fn owner_id(&self) -> &str {
        &self.spec.owner.id
    }

    /// Id of the resource the key grants access to
    pub fn resource_id(&self) -> Option<&str> {
        self.spec.resource.as_ref().map(|r| r.id.as_str())
    }

    /// The one-time secret from the creation response
    pub fn secret(&self) -> Option<&str> {
        self.spec.secret.as_deref()
    }
}

/// Request to create an API key
#[derive(Debug, Clone)]
pub struct NewApiKey {
    owner_id: String,
    resource_id: String,
    display_name: Option<String>,
    description: Option<String>,
}

impl NewApiKey {
    /// New key for the given owner and resource
    pub fn new(owner_id: impl Into<String>, resource_id: impl Into<String>) -> Self {
        Self {
            owner_id: owner_id.into(),
            resource_id: resource_id.into(),
            display_name: None,
            description: None,
        }
    }

    /// Set an explicit display name
    #[must_use]
    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Set an explicit description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Wire payload, applying the defaulting rules: display name falls
    /// back to `owner::resource`, description to the display name with
    /// `::` spaced out and title-cased.
    pub(crate) fn to_payload(&self) -> Value {
        let display_name = self
            .display_name
            .clone()
            .unwrap_or_else(|| format!("{}::{}", self.owner_id, self.resource_id));
        let description = self
            .description
            .clone()
            .unwrap_or_else(|| title_case(&display_name.replace("::", " ")));

        json!({
            "spec": {
                "owner": { "id": self.owner_id },
                "resource": { "id": self.resource_id },
                "display_name": display_name,
                "description": description,
            }
        })
    }
}

/// API handle for API keys
#[derive(Debug, Clone, Copy)]
pub struct ApiKeysApi<'a> {
    client: &'a ConfluentClient,
}

impl<'a> ApiKeysApi<'a> {
    pub(crate) fn new(client: &'a ConfluentClient) -> Self {
        Self { client }
    }

    fn object_path(id: &str) -> String {
        format!("{API_KEYS_PATH}/{id}")
    }

    /// Create an API key. The returned key carries the secret; it cannot
    /// be retrieved again afterwards.
    pub async fn create(&self, new_key: NewApiKey) -> Result<ApiKey> {
        let key: ApiKey = self
            .client
            .post(API_KEYS_PATH, new_key.to_payload())
            .await?;
        debug!("Created API key {} for owner {}", key.id, key.owner_id());
        Ok(key)
    }

    /// Fetch an API key by id
    pub async fn get(&self, id: &str) -> Result<ApiKey> {
        self.client.get(&Self::object_path(id)).await
    }

    /// Fetch one page of API keys, optionally filtered by owner
    pub async fn list(&self, owner: Option<&str>, page_size: Option<u32>) -> Result<Page<ApiKey>> {
        self.client
            .get_with(API_KEYS_PATH, Self::list_options(owner, page_size))
            .await
    }

    /// Fetch every API key, optionally filtered by owner
    pub async fn list_all(&self, owner: Option<&str>) -> Result<Vec<ApiKey>> {
        collect_all(self.client, API_KEYS_PATH, Self::list_options(owner, None)).await
    }

    /// All keys owned by a service account
    pub async fn list_for_owner(&self, owner_id: &str) -> Result<Vec<ApiKey>> {
        self.list_all(Some(owner_id)).await
    }

    /// Update the description of an API key
    pub async fn update(&self, id: &str, description: &str) -> Result<ApiKey> {
        self.client
            .patch(&Self::object_path(id), json!({ "description": description }))
            .await
    }

    /// Delete an API key
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&Self::object_path(id)).await
    }

    fn list_options(owner: Option<&str>, page_size: Option<u32>) -> RequestOptions {
        let mut options = RequestOptions::new();
        if let Some(owner_id) = owner {
            options = options.query("spec.owner", owner_id);
        }
        if let Some(size) = page_size {
            options = options.query("page_size", size.to_string());
        }
        options
    }
}
