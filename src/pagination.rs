//! Pagination over Confluent Cloud list endpoints
//!
//! List responses carry a `metadata` block with absolute page URLs; the
//! `next` link embeds an opaque `page_token`. [`pages`] turns that into a
//! stream of typed pages and [`collect_all`] drains it into one Vec.

use crate::error::Result;
use crate::http::{ConfluentClient, RequestOptions};
use futures::stream::TryStreamExt;
use futures::Stream;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// List-level metadata with page links
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    /// Absolute URL of the next page; absent or empty on the last page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_size: Option<u64>,
}

/// One page of a Confluent Cloud list response
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub api_version: Option<String>,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub metadata: ListMeta,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

impl<T> Page<T> {
    /// URL of the next page, when there is one
    pub fn next_url(&self) -> Option<&str> {
        self.metadata.next.as_deref().filter(|url| !url.is_empty())
    }
}

enum Cursor {
    First {
        path: String,
        options: RequestOptions,
    },
    Next(String),
    Done,
}

/// Stream every page of a list endpoint, following `metadata.next`
pub fn pages<'a, T>(
    client: &'a ConfluentClient,
    path: &str,
    options: RequestOptions,
) -> impl Stream<Item = Result<Page<T>>> + 'a
where
    T: DeserializeOwned + 'a,
{
    let start = Cursor::First {
        path: path.to_string(),
        options,
    };

    futures::stream::try_unfold((client, start), |(client, cursor)| async move {
        let page: Page<T> = match cursor {
            Cursor::Done => return Ok(None),
            Cursor::First { path, options } => client.get_with(&path, options).await?,
            Cursor::Next(url) => client.get(&url).await?,
        };

        let next = match page.next_url() {
            Some(url) => Cursor::Next(url.to_string()),
            None => Cursor::Done,
        };

        Ok(Some((page, (client, next))))
    })
}

/// Fetch every item of a list endpoint across all pages
pub async fn collect_all<T>(
    client: &ConfluentClient,
    path: &str,
    options: RequestOptions,
) -> Result<Vec<T>>
where
    T: DeserializeOwned,
{
    let stream = pages::<T>(client, path, options);
    futures::pin_mut!(stream);

    let mut items = Vec::new();
    while let Some(page) = stream.try_next().await? {
        items.extend(page.data);
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_deserializes_list_response() {
        let page: Page<serde_json::Value> = serde_json::from_value(json!({
            "api_version": "iam/v2",
            "kind": "ServiceAccountList",
            "metadata": {
                "first": "https://api.confluent.cloud/iam/v2/service-accounts",
                "next": "https://api.confluent.cloud/iam/v2/service-accounts?page_token=abc",
                "total_size": 12
            },
            "data": [{"id": "sa-1"}, {"id": "sa-2"}]
        }))
        .unwrap();

        assert_eq!(page.kind.as_deref(), Some("ServiceAccountList"));
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.metadata.total_size, Some(12));
        assert!(page.next_url().unwrap().contains("page_token=abc"));
    }

    #[test]
    fn test_page_without_next_is_last() {
        let page: Page<serde_json::Value> = serde_json::from_value(json!({
            "metadata": {},
            "data": []
        }))
        .unwrap();
        assert!(page.next_url().is_none());
    }

    #[test]
    fn test_page_empty_next_is_last() {
        let page: Page<serde_json::Value> = serde_json::from_value(json!({
            "metadata": {"next": ""},
            "data": []
        }))
        .unwrap();
        assert!(page.next_url().is_none());
    }

    #[test]
    fn test_page_missing_metadata_defaults() {
        let page: Page<serde_json::Value> =
            serde_json::from_value(json!({"data": [{"id": "sa-1"}]})).unwrap();
        assert!(page.next_url().is_none());
        assert_eq!(page.data.len(), 1);
    }
}
