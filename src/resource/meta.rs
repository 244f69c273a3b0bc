//! Meta block for directory resources.
//!
//! Every field here is server-owned. Incoming representations have their
//! `meta` stripped before decoding, and the synthesizer builds a fresh one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle metadata attached to every stored resource.
///
/// Timestamps serialize as RFC 3339.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub resource_type: String,
    pub created: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl Meta {
    /// Get the resource type.
    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    /// Get the location URI.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Get the version identifier, as a weak ETag.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}
