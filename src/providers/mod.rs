//! Resource lifecycle providers.
//!
//! * [`ResourceManager`] - create, read, replace and delete for one resource
//!   kind over any [`StorageProvider`](crate::storage::StorageProvider)

pub mod resource_manager;

pub use resource_manager::ResourceManager;
