//! Create, read, replace and delete for one resource kind.
//!
//! [`ResourceManager`] composes the [`MetadataSynthesizer`] with a typed
//! [`ResourceGateway`]. Every successful write is followed by a fresh read,
//! so callers always get back the record as it sits in the store.
//!
//! Concurrent writes to one id race at the store and the last write wins.
//! A record deleted between a create and its read-back is reported as an
//! internal error, never as NotFound.
//!
//! Payloads are logged by attribute name only; values such as `password`
//! never reach the log.
//!
//! # Example Usage
//!
//! ```rust
//! use scim_directory::providers::ResourceManager;
//! use scim_directory::resource::{RequestContext, User};
//! use scim_directory::storage::InMemoryStorage;
//! use scim_directory::ScimServerConfig;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let manager: ResourceManager<User, _> =
//!     ResourceManager::new(Arc::new(InMemoryStorage::new()), ScimServerConfig::default());
//! let context = RequestContext::with_generated_id();
//!
//! let user = manager.create(br#"{"userName": "alice"}"#, &context).await?;
//! let fetched = manager.read(&user.id, &context).await?;
//! assert_eq!(fetched.user_name.as_deref(), Some("alice"));
//! # Ok(())
//! # }
//! ```

use crate::error::{ScimError, ScimResult};
use crate::resource::{MetadataSynthesizer, RequestContext, ScimResource};
use crate::scim_server::ScimServerConfig;
use crate::storage::{ResourceGateway, StorageError, StorageProvider};
use log::{Level, debug, info, log_enabled, trace};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Lifecycle operations for resources of kind `R` stored in `S`.
pub struct ResourceManager<R, S> {
    gateway: ResourceGateway<R, S>,
    synthesizer: MetadataSynthesizer,
}

impl<R: ScimResource, S: StorageProvider> ResourceManager<R, S> {
    pub fn new(storage: Arc<S>, config: ScimServerConfig) -> Self {
        Self {
            gateway: ResourceGateway::new(storage),
            synthesizer: MetadataSynthesizer::new(config),
        }
    }

    /// Create a resource from a raw client representation.
    ///
    /// The id is always server-generated; any `id` or `meta` in `raw` is
    /// ignored.
    pub async fn create(&self, raw: &[u8], context: &RequestContext) -> ScimResult<R> {
        info!(
            "Creating {} resource (request: '{}')",
            R::KIND,
            context.request_id
        );
        if log_enabled!(Level::Trace) {
            trace!("Create attributes: [{}]", attribute_names(raw));
        }

        let resource: R = self.synthesizer.synthesize(None, None, raw)?;
        let id = resource.id().to_string();

        self.gateway
            .insert(&resource)
            .await
            .map_err(|e| Self::storage_error(&id, e))?;

        match self.gateway.find_by_id(&id).await {
            Ok(Some(stored)) => Ok(stored),
            Ok(None) => Err(ScimError::internal(format!(
                "{} '{}' was removed before it could be returned",
                R::KIND,
                id
            ))),
            Err(e) => Err(Self::storage_error(&id, e)),
        }
    }

    /// Fetch a resource by id.
    pub async fn read(&self, id: &str, context: &RequestContext) -> ScimResult<R> {
        debug!(
            "Getting {} resource with ID '{}' (request: '{}')",
            R::KIND,
            id,
            context.request_id
        );

        match self.gateway.find_by_id(id).await {
            Ok(Some(resource)) => {
                trace!("Resource found and returned");
                Ok(resource)
            }
            Ok(None) => {
                debug!("Resource not found");
                Err(ScimError::resource_not_found(R::KIND.resource_type(), id))
            }
            Err(e) => Err(Self::storage_error(id, e)),
        }
    }

    /// Replace a resource wholesale.
    ///
    /// The stored record's `created` timestamp survives; every other
    /// client-settable attribute comes from `raw`. Attributes absent from
    /// `raw` are cleared.
    pub async fn replace(&self, id: &str, raw: &[u8], context: &RequestContext) -> ScimResult<R> {
        info!(
            "Updating {} resource with ID '{}' (request: '{}')",
            R::KIND,
            id,
            context.request_id
        );
        if log_enabled!(Level::Trace) {
            trace!("Update attributes: [{}]", attribute_names(raw));
        }

        let existing = self.read(id, context).await?;
        let resource: R = self
            .synthesizer
            .synthesize(Some(id), existing.meta(), raw)?;

        self.gateway
            .update(id, &resource)
            .await
            .map_err(|e| Self::storage_error(id, e))?;

        self.read(id, context).await
    }

    /// Delete a resource by id.
    pub async fn delete(&self, id: &str, context: &RequestContext) -> ScimResult<()> {
        info!(
            "Deleting {} resource with ID '{}' (request: '{}')",
            R::KIND,
            id,
            context.request_id
        );

        self.gateway
            .remove(id)
            .await
            .map_err(|e| Self::storage_error(id, e))
    }

    fn storage_error(id: &str, error: StorageError) -> ScimError {
        if error.is_not_found() {
            ScimError::resource_not_found(R::KIND.resource_type(), id)
        } else {
            ScimError::from(error)
        }
    }
}

/// Top-level attribute names of a raw body, without their values.
fn attribute_names(raw: &[u8]) -> String {
    match serde_json::from_slice::<Map<String, Value>>(raw) {
        Ok(object) => object.keys().map(String::as_str).collect::<Vec<_>>().join(", "),
        Err(_) => format!("<{} bytes, not a JSON object>", raw.len()),
    }
}
