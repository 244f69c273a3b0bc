//! Resource model for the directory.
//!
//! Two resource kinds are served, [`User`] and [`Group`], both shaped after
//! the SCIM 2.0 core schemas. Each carries a server-owned `id` and [`Meta`]
//! block that clients never get to set.
//!
//! - [`ResourceKind`] - which schema a resource belongs to, and how it is
//!   named in URLs, storage and metadata
//! - [`ScimResource`] - the seam the synthesizer, gateway and manager are
//!   generic over
//! - [`MetadataSynthesizer`] - stamps identity and lifecycle metadata

pub mod context;
pub mod group;
pub mod meta;
pub mod metadata;
pub mod user;
pub mod version;

pub use context::RequestContext;
pub use group::{Group, GroupMember};
pub use meta::Meta;
pub use metadata::MetadataSynthesizer;
pub use user::{
    Address, Email, GroupRef, InstantMessaging, Name, PhoneNumber, Photo, ResourceReference,
    TypedValue, User, X509Certificate,
};
pub use version::ResourceVersion;

use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
use std::fmt;

/// SCIM Core User schema URI
pub const SCHEMA_USER: &str = "urn:ietf:params:scim:schemas:core:2.0:User";

/// SCIM Core Group schema URI
pub const SCHEMA_GROUP: &str = "urn:ietf:params:scim:schemas:core:2.0:Group";

/// The kinds of resource served by the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    User,
    Group,
}

impl ResourceKind {
    /// Name used in `meta.resourceType`.
    pub fn resource_type(&self) -> &'static str {
        match self {
            ResourceKind::User => "User",
            ResourceKind::Group => "Group",
        }
    }

    /// URL path segment of the collection root.
    pub fn endpoint(&self) -> &'static str {
        match self {
            ResourceKind::User => "Users",
            ResourceKind::Group => "Groups",
        }
    }

    /// Storage collection holding this kind.
    pub fn collection(&self) -> &'static str {
        match self {
            ResourceKind::User => "users",
            ResourceKind::Group => "groups",
        }
    }

    /// Core schema URN for this kind.
    pub fn schema_uri(&self) -> &'static str {
        match self {
            ResourceKind::User => SCHEMA_USER,
            ResourceKind::Group => SCHEMA_GROUP,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.resource_type())
    }
}

/// Common shape of every directory resource.
pub trait ScimResource: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// The kind this type represents.
    const KIND: ResourceKind;

    /// Server-assigned identifier; empty until synthesized.
    fn id(&self) -> &str;

    fn set_id(&mut self, id: String);

    fn meta(&self) -> Option<&Meta>;

    fn set_meta(&mut self, meta: Option<Meta>);

    fn schemas_mut(&mut self) -> &mut Vec<String>;

    /// Structural checks beyond what decoding already enforces.
    fn validate(&self) -> ValidationResult<()> {
        Ok(())
    }
}

/// Multi-valued attribute entries that may be flagged primary.
pub(crate) trait PrimaryFlag {
    fn is_primary(&self) -> bool;
}

/// At most one entry of a multi-valued attribute may be primary.
pub(crate) fn ensure_single_primary<T: PrimaryFlag>(
    attribute: &str,
    values: &[T],
) -> ValidationResult<()> {
    if values.iter().filter(|v| v.is_primary()).count() > 1 {
        return Err(ValidationError::MultiplePrimaryValues {
            attribute: attribute.to_string(),
        });
    }
    Ok(())
}

/// Decode a multi-valued attribute, reading an explicit `null` as unassigned.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
