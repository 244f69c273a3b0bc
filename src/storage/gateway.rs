//! Typed store gateway.
//!
//! [`ResourceGateway`] binds a [`StorageProvider`] to one resource kind: it
//! picks the kind's collection and converts between typed resources and
//! stored JSON documents.

use crate::resource::ScimResource;
use crate::storage::{StorageError, StorageKey, StorageProvider};
use std::marker::PhantomData;
use std::sync::Arc;

/// Per-kind CRUD primitives over a shared document store.
pub struct ResourceGateway<R, S> {
    storage: Arc<S>,
    _resource: PhantomData<fn() -> R>,
}

impl<R: ScimResource, S: StorageProvider> ResourceGateway<R, S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self {
            storage,
            _resource: PhantomData,
        }
    }

    fn key(id: &str) -> StorageKey {
        StorageKey::new(R::KIND.collection(), id)
    }

    fn encode(resource: &R) -> Result<serde_json::Value, StorageError> {
        serde_json::to_value(resource).map_err(|e| {
            StorageError::serialization(format!("Failed to encode {}: {}", R::KIND, e))
        })
    }

    /// Store a new resource under its id.
    pub async fn insert(&self, resource: &R) -> Result<(), StorageError> {
        let data = Self::encode(resource)?;
        self.storage.insert(Self::key(resource.id()), data).await
    }

    /// Look up a resource, `None` if absent.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<R>, StorageError> {
        match self.storage.find_by_id(Self::key(id)).await? {
            Some(data) => serde_json::from_value(data)
                .map(Some)
                .map_err(|e| StorageError::data_corruption(R::KIND.collection(), id, e.to_string())),
            None => Ok(None),
        }
    }

    /// Replace the full stored record for `id`.
    pub async fn update(&self, id: &str, resource: &R) -> Result<(), StorageError> {
        let data = Self::encode(resource)?;
        self.storage.update(Self::key(id), data).await
    }

    pub async fn remove(&self, id: &str) -> Result<(), StorageError> {
        self.storage.remove(Self::key(id)).await
    }
}
