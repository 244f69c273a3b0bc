//! Storage abstraction layer for directory resources.
//!
//! The storage layer is a thin document store: JSON values keyed by
//! collection and resource id. It knows nothing about SCIM metadata, ids or
//! validation; those belong to the Resource Manager.
//!
//! Each resource kind lives in its own collection (`users`, `groups`), and
//! every operation touches exactly one record, so an abandoned operation can
//! never leave a partial multi-record write behind.
//!
//! # Example Usage
//!
//! ```rust
//! use scim_directory::storage::{StorageProvider, StorageKey, InMemoryStorage};
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let storage = InMemoryStorage::new();
//!
//! let key = StorageKey::new("users", "123");
//! storage.insert(key.clone(), json!({"id": "123", "userName": "john.doe"})).await?;
//!
//! let retrieved = storage.find_by_id(key.clone()).await?;
//! assert!(retrieved.is_some());
//!
//! storage.remove(key).await?;
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod gateway;
pub mod in_memory;


pub use errors::StorageError;
pub use gateway::ResourceGateway;
pub use in_memory::{InMemoryStorage, InMemoryStorageStats};

use serde_json::Value;
use std::fmt;
use std::future::Future;

/// Key identifying a single stored document: `collection` → `resource_id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageKey {
    collection: String,
    resource_id: String,
}

impl StorageKey {
    /// Create a new storage key.
    pub fn new(collection: impl Into<String>, resource_id: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            resource_id: resource_id.into(),
        }
    }

    /// Get the collection name.
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Get the resource ID.
    pub fn resource_id(&self) -> &str {
        &self.resource_id
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.collection, self.resource_id)
    }
}

/// Document store contract used by the Resource Manager.
///
/// Implementations must be safe to call from many concurrent requests
/// without external locking. Missing targets are reported as
/// [`StorageError::ResourceNotFound`] and connection failures as
/// [`StorageError::Unavailable`] so callers can tell them apart.
pub trait StorageProvider: Send + Sync {
    /// Insert a new document.
    ///
    /// Fails with [`StorageError::ResourceAlreadyExists`] if the key is taken.
    fn insert(
        &self,
        key: StorageKey,
        data: Value,
    ) -> impl Future<Output = Result<(), StorageError>> + Send;

    /// Look up a document by key, `None` if it does not exist.
    fn find_by_id(
        &self,
        key: StorageKey,
    ) -> impl Future<Output = Result<Option<Value>, StorageError>> + Send;

    /// Replace the full document stored at `key`.
    ///
    /// Fails with [`StorageError::ResourceNotFound`] if nothing is stored there.
    fn update(
        &self,
        key: StorageKey,
        data: Value,
    ) -> impl Future<Output = Result<(), StorageError>> + Send;

    /// Remove the document stored at `key`.
    ///
    /// Fails with [`StorageError::ResourceNotFound`] if nothing is stored there.
    fn remove(&self, key: StorageKey) -> impl Future<Output = Result<(), StorageError>> + Send;
}
