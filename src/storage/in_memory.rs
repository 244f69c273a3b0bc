//! In-memory storage implementation for directory resources.
//!
//! Thread-safe document store built on a nested `HashMap` behind a tokio
//! `RwLock`. Suitable for tests, development, and deployments that do not
//! need persistence.
//!
//! # Example Usage
//!
//! ```rust
//! use scim_directory::storage::{InMemoryStorage, StorageProvider, StorageKey};
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let storage = InMemoryStorage::new();
//!
//! let key = StorageKey::new("users", "user123");
//! storage.insert(key.clone(), json!({"id": "user123", "userName": "john.doe"})).await?;
//! storage.update(key.clone(), json!({"id": "user123", "userName": "jdoe"})).await?;
//!
//! let stored = storage.find_by_id(key).await?.unwrap();
//! assert_eq!(stored["userName"], "jdoe");
//! # Ok(())
//! # }
//! ```

use crate::storage::{StorageError, StorageKey, StorageProvider};
use log::trace;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Thread-safe in-memory storage.
///
/// Cloning yields another handle to the same underlying data, so one store
/// can be shared between the server and whoever constructed it.
#[derive(Clone)]
pub struct InMemoryStorage {
    // Structure: collection -> resource_id -> data
    data: Arc<RwLock<HashMap<String, HashMap<String, Value>>>>,
}

/// Statistics about in-memory storage usage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryStorageStats {
    pub collection_count: usize,
    pub total_resources: usize,
}

impl InMemoryStorage {
    /// Create a new empty in-memory storage instance.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Get storage statistics for debugging and monitoring.
    pub async fn stats(&self) -> InMemoryStorageStats {
        let data_guard = self.data.read().await;
        InMemoryStorageStats {
            collection_count: data_guard.values().filter(|c| !c.is_empty()).count(),
            total_resources: data_guard.values().map(HashMap::len).sum(),
        }
    }

    /// Number of documents in a single collection.
    pub async fn count(&self, collection: &str) -> usize {
        let data_guard = self.data.read().await;
        data_guard.get(collection).map(HashMap::len).unwrap_or(0)
    }

    /// Clear all data (useful for testing).
    pub async fn clear(&self) {
        let mut data_guard = self.data.write().await;
        data_guard.clear();
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageProvider for InMemoryStorage {
    async fn insert(&self, key: StorageKey, data: Value) -> Result<(), StorageError> {
        trace!("Inserting document at {}", key);
        let mut data_guard = self.data.write().await;

        let collection = data_guard
            .entry(key.collection().to_string())
            .or_insert_with(HashMap::new);

        if collection.contains_key(key.resource_id()) {
            return Err(StorageError::resource_already_exists(
                key.collection(),
                key.resource_id(),
            ));
        }

        collection.insert(key.resource_id().to_string(), data);
        Ok(())
    }

    async fn find_by_id(&self, key: StorageKey) -> Result<Option<Value>, StorageError> {
        trace!("Looking up document at {}", key);
        let data_guard = self.data.read().await;

        let result = data_guard
            .get(key.collection())
            .and_then(|collection| collection.get(key.resource_id()))
            .cloned();

        Ok(result)
    }

    async fn update(&self, key: StorageKey, data: Value) -> Result<(), StorageError> {
        trace!("Replacing document at {}", key);
        let mut data_guard = self.data.write().await;

        match data_guard
            .get_mut(key.collection())
            .and_then(|collection| collection.get_mut(key.resource_id()))
        {
            Some(existing) => {
                *existing = data;
                Ok(())
            }
            None => Err(StorageError::resource_not_found(
                key.collection(),
                key.resource_id(),
            )),
        }
    }

    async fn remove(&self, key: StorageKey) -> Result<(), StorageError> {
        trace!("Removing document at {}", key);
        let mut data_guard = self.data.write().await;

        let removed = data_guard
            .get_mut(key.collection())
            .and_then(|collection| collection.remove(key.resource_id()));

        match removed {
            Some(_) => Ok(()),
            None => Err(StorageError::resource_not_found(
                key.collection(),
                key.resource_id(),
            )),
        }
    }
}
