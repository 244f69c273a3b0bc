//! Storage test doubles.

use scim_directory::storage::{StorageError, StorageKey, StorageProvider};
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Store whose backend is never reachable.
///
/// Every call fails with [`StorageError::Unavailable`] carrying a message
/// that must never reach a client.
#[derive(Debug, Default)]
pub struct UnavailableStorage {
    calls: AtomicUsize,
}

pub const UNAVAILABLE_DETAIL: &str = "connection refused by 10.20.30.40:27017";

impl UnavailableStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail<T>(&self) -> Result<T, StorageError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(StorageError::unavailable(UNAVAILABLE_DETAIL))
    }
}

impl StorageProvider for UnavailableStorage {
    async fn insert(&self, _key: StorageKey, _data: Value) -> Result<(), StorageError> {
        self.fail()
    }

    async fn find_by_id(&self, _key: StorageKey) -> Result<Option<Value>, StorageError> {
        self.fail()
    }

    async fn update(&self, _key: StorageKey, _data: Value) -> Result<(), StorageError> {
        self.fail()
    }

    async fn remove(&self, _key: StorageKey) -> Result<(), StorageError> {
        self.fail()
    }
}
