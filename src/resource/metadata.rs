//! Identity and metadata synthesis.
//!
//! Turns a raw client representation into a typed resource carrying
//! server-owned identity and lifecycle metadata:
//!
//! - `id`: the caller-supplied id on update, otherwise a fresh v4 UUID
//! - `meta.created`: now on create, carried over from the prior record on update
//! - `meta.lastModified`: now, and always after the prior value on update
//! - `meta.location`: `{scheme}://{host}:{port}/{version}/{Kind}s/{id}`
//! - `meta.resourceType` and `meta.version` (content hash)
//!
//! Any `id` or `meta` in the client body is discarded before decoding.
//! Synthesis is pure; it never touches the store.

use crate::error::{ScimError, ScimResult};
use crate::resource::{Meta, ResourceKind, ResourceVersion, ScimResource};
use crate::scim_server::ScimServerConfig;
use chrono::{DateTime, TimeDelta, Utc};
use log::trace;
use serde::de::DeserializeOwned;
use serde_json::Value;
use uuid::Uuid;

/// Stamps identity and metadata onto decoded resources.
#[derive(Debug, Clone)]
pub struct MetadataSynthesizer {
    config: ScimServerConfig,
}

impl MetadataSynthesizer {
    pub fn new(config: ScimServerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScimServerConfig {
        &self.config
    }

    /// Decode `raw` and stamp id and metadata onto it.
    ///
    /// `existing_id` is set on update; `prior_meta` is the stored record's
    /// metadata, whose `created` is preserved. Without `prior_meta` both
    /// timestamps are refreshed.
    ///
    /// # Errors
    ///
    /// [`ScimError::MalformedInput`] if the body is not a JSON object of the
    /// expected shape, [`ScimError::Validation`] if it breaks a structural rule.
    pub fn synthesize<R: ScimResource>(
        &self,
        existing_id: Option<&str>,
        prior_meta: Option<&Meta>,
        raw: &[u8],
    ) -> ScimResult<R> {
        let mut resource: R = decode_representation(R::KIND, raw)?;
        resource.validate()?;

        let id = match existing_id {
            Some(id) => id.to_string(),
            None => Uuid::new_v4().to_string(),
        };
        resource.set_id(id);

        if resource.schemas_mut().is_empty() {
            resource
                .schemas_mut()
                .push(R::KIND.schema_uri().to_string());
        }

        let mut meta = self.stamp(R::KIND, resource.id(), prior_meta, Utc::now());
        resource.set_meta(Some(meta.clone()));

        let content = serde_json::to_vec(&resource)
            .map_err(|e| ScimError::internal(format!("Failed to serialize resource: {}", e)))?;
        meta.version = Some(ResourceVersion::from_content(&content).to_etag());
        resource.set_meta(Some(meta));

        trace!("Synthesized {} '{}'", R::KIND, resource.id());
        Ok(resource)
    }

    fn stamp(
        &self,
        kind: ResourceKind,
        id: &str,
        prior_meta: Option<&Meta>,
        now: DateTime<Utc>,
    ) -> Meta {
        let (created, last_modified) = match prior_meta {
            Some(prior) if now > prior.last_modified => (prior.created, now),
            Some(prior) => (
                prior.created,
                prior.last_modified + TimeDelta::milliseconds(1),
            ),
            None => (now, now),
        };

        Meta {
            resource_type: kind.resource_type().to_string(),
            created,
            last_modified,
            location: self.config.location(kind, id),
            version: None,
        }
    }
}

fn decode_representation<R: DeserializeOwned>(kind: ResourceKind, raw: &[u8]) -> ScimResult<R> {
    let mut value: Value = serde_json::from_slice(raw)
        .map_err(|e| ScimError::malformed_input(format!("Invalid JSON body: {}", e)))?;

    let object = value.as_object_mut().ok_or_else(|| {
        ScimError::malformed_input(format!("{} representation must be a JSON object", kind))
    })?;
    object.remove("id");
    object.remove("meta");

    serde_json::from_value(value)
        .map_err(|e| ScimError::malformed_input(format!("Invalid {} representation: {}", kind, e)))
}
