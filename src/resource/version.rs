//! Content-derived resource versions.
//!
//! A version is computed from the full serialized resource with SHA-256 and
//! rendered as a weak HTTP ETag (`W/"…"`). It lands in `meta.version` and in
//! the `ETag` response header. Versions are informational; requests are not
//! made conditional on them.
//!
//! ```rust
//! use scim_directory::resource::ResourceVersion;
//!
//! let version = ResourceVersion::from_content(br#"{"id":"123","userName":"john.doe"}"#);
//! assert!(version.to_etag().starts_with("W/\""));
//! ```

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use sha2::{Digest, Sha256};
use std::fmt;

/// Opaque version identifier for a resource representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceVersion {
    opaque: String,
}

impl ResourceVersion {
    /// Create a version from resource content.
    ///
    /// Deterministic: equal content always yields equal versions.
    pub fn from_content(content: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content);
        let hash = hasher.finalize();
        let encoded = BASE64.encode(&hash[..8]); // Use first 8 bytes for shorter ETags

        Self { opaque: encoded }
    }

    /// The raw opaque value, without ETag quoting.
    pub fn as_str(&self) -> &str {
        &self.opaque
    }

    /// Weak ETag form, e.g. `W/"abc123"`.
    pub fn to_etag(&self) -> String {
        format!("W/\"{}\"", self.opaque)
    }
}

impl fmt::Display for ResourceVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_etag())
    }
}
