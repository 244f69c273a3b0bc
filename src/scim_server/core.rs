//! Core SCIM server structure and initialization.

use crate::providers::ResourceManager;
use crate::resource::{Group, User};
use crate::scim_server::builder::ScimServerConfig;
use crate::storage::StorageProvider;
use std::sync::Arc;

/// SCIM server for the User and Group resource kinds.
///
/// Both managers share one store; each keeps to its own collection.
///
/// # Examples
///
/// ```rust
/// use scim_directory::ScimServer;
/// use scim_directory::resource::RequestContext;
/// use scim_directory::storage::InMemoryStorage;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let server = ScimServer::new(InMemoryStorage::new());
/// let context = RequestContext::with_generated_id();
///
/// let group = server
///     .groups()
///     .create(br#"{"displayName": "Engineering"}"#, &context)
///     .await?;
/// assert!(group.meta.is_some());
/// # Ok(())
/// # }
/// ```
pub struct ScimServer<S> {
    storage: Arc<S>,
    users: ResourceManager<User, S>,
    groups: ResourceManager<Group, S>,
    config: ScimServerConfig,
}

impl<S: StorageProvider> ScimServer<S> {
    /// Creates a new SCIM server with default configuration.
    pub fn new(storage: S) -> Self {
        Self::with_config(storage, ScimServerConfig::default())
    }

    /// Creates a new SCIM server with the given configuration.
    ///
    /// The configuration is taken as is; use
    /// [`ScimServerBuilder`](crate::ScimServerBuilder) to have it validated.
    pub fn with_config(storage: S, config: ScimServerConfig) -> Self {
        let storage = Arc::new(storage);
        Self {
            users: ResourceManager::new(Arc::clone(&storage), config.clone()),
            groups: ResourceManager::new(Arc::clone(&storage), config.clone()),
            storage,
            config,
        }
    }

    pub fn users(&self) -> &ResourceManager<User, S> {
        &self.users
    }

    pub fn groups(&self) -> &ResourceManager<Group, S> {
        &self.groups
    }

    pub fn config(&self) -> &ScimServerConfig {
        &self.config
    }

    /// The store shared by both managers.
    pub fn storage(&self) -> &S {
        &self.storage
    }
}
