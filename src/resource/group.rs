//! Group resource.

use crate::resource::{Meta, ResourceKind, ResourceReference, ScimResource, null_as_empty};
use serde::{Deserialize, Serialize};

/// Entry of a group's `members`, referencing a User or Group by id.
pub type GroupMember = ResourceReference;

/// SCIM Group resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub schemas: Vec<String>,

    #[serde(default)]
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub members: Vec<GroupMember>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

impl ScimResource for Group {
    const KIND: ResourceKind = ResourceKind::Group;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }

    fn set_meta(&mut self, meta: Option<Meta>) {
        self.meta = meta;
    }

    fn schemas_mut(&mut self) -> &mut Vec<String> {
        &mut self.schemas
    }
}
