//! Service accounts (`/iam/v2/service-accounts`)

use super::title_case;
use crate::error::Result;
use crate::http::{ConfluentClient, RequestOptions};
use crate::models::ObjectMeta;
use crate::pagination::{collect_all, Page};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

/// Collection path for service accounts
pub const SERVICE_ACCOUNTS_PATH: &str = "/iam/v2/service-accounts";

/// A Confluent Cloud service account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceAccount {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub id: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ObjectMeta>,
}

impl ServiceAccount {
    /// Canonical HREF of this account, when the server returned one
    pub fn href(&self) -> Option<&str> {
        self.metadata.as_ref().map(|m| m.self_url.as_str())
    }
}

/// API handle for service accounts
#[derive(Debug, Clone, Copy)]
pub struct ServiceAccountsApi<'a> {
    client: &'a ConfluentClient,
}

impl<'a> ServiceAccountsApi<'a> {
    pub(crate) fn new(client: &'a ConfluentClient) -> Self {
        Self { client }
    }

    fn object_path(id: &str) -> String {
        format!("{SERVICE_ACCOUNTS_PATH}/{id}")
    }

    /// Create a service account.
    ///
    /// When no description is given it defaults to the title-cased
    /// display name.
    pub async fn create(
        &self,
        display_name: &str,
        description: Option<&str>,
    ) -> Result<ServiceAccount> {
        let description = match description {
            Some(text) => text.to_string(),
            None => title_case(display_name),
        };
        let payload = json!({
            "display_name": display_name,
            "description": description,
        });
        let account: ServiceAccount = self.client.post(SERVICE_ACCOUNTS_PATH, payload).await?;
        debug!("Created service account {}", account.id);
        Ok(account)
    }

    /// Fetch a service account by id
    pub async fn get(&self, id: &str) -> Result<ServiceAccount> {
        self.client.get(&Self::object_path(id)).await
    }

    /// Fetch one page of service accounts
    pub async fn list(&self, page_size: Option<u32>) -> Result<Page<ServiceAccount>> {
        let mut options = RequestOptions::new();
        if let Some(size) = page_size {
            options = options.query("page_size", size.to_string());
        }
        self.client.get_with(SERVICE_ACCOUNTS_PATH, options).await
    }

    /// Fetch every service account, following pagination links
    pub async fn list_all(&self) -> Result<Vec<ServiceAccount>> {
        collect_all(self.client, SERVICE_ACCOUNTS_PATH, RequestOptions::new()).await
    }

    /// Look a service account up by display name.
    ///
    /// Display names are not unique server-side; the first match wins.
    pub async fn find_by_name(&self, display_name: &str) -> Result<Option<ServiceAccount>> {
        let accounts = self.list_all().await?;
        Ok(accounts
            .into_iter()
            .find(|account| account.display_name == display_name))
    }

    /// Update the description of a service account
    pub async fn update(&self, id: &str, description: &str) -> Result<ServiceAccount> {
        self.client
            .patch(&Self::object_path(id), json!({ "description": description }))
            .await
    }

    /// Delete a service account
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&Self::object_path(id)).await
    }
}
