//! Shared wire types for Confluent Cloud API resources

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-object metadata returned with every Confluent Cloud resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMeta {
    /// Canonical HREF of the object
    #[serde(rename = "self")]
    pub self_url: String,
    /// Confluent Resource Name (CRN)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}
