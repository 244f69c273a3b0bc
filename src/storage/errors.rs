//! Storage-specific error types for pure data operations.
//!
//! These errors describe persistence failures only, separate from SCIM
//! protocol errors. They are converted into [`crate::ScimError`] at the
//! Resource Manager boundary.

use std::fmt;

/// Errors that can occur during storage operations.
#[derive(Debug)]
pub enum StorageError {
    /// The requested document was not found.
    ResourceNotFound { collection: String, id: String },

    /// A document already exists under the key being inserted.
    ResourceAlreadyExists { collection: String, id: String },

    /// Storage backend is unreachable or refused the operation.
    Unavailable { message: String },

    /// A stored document could not be decoded into its resource shape.
    DataCorruption {
        collection: String,
        id: String,
        details: String,
    },

    /// A resource could not be encoded for storage.
    Serialization { message: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::ResourceNotFound { collection, id } => {
                write!(f, "Resource not found: {}/{}", collection, id)
            }
            StorageError::ResourceAlreadyExists { collection, id } => {
                write!(f, "Resource already exists: {}/{}", collection, id)
            }
            StorageError::Unavailable { message } => {
                write!(f, "Storage unavailable: {}", message)
            }
            StorageError::DataCorruption {
                collection,
                id,
                details,
            } => {
                write!(f, "Data corruption in {}/{}: {}", collection, id, details)
            }
            StorageError::Serialization { message } => {
                write!(f, "Serialization error: {}", message)
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl StorageError {
    /// Create a new ResourceNotFound error.
    pub fn resource_not_found(collection: impl Into<String>, id: impl Into<String>) -> Self {
        Self::ResourceNotFound {
            collection: collection.into(),
            id: id.into(),
        }
    }

    /// Create a new ResourceAlreadyExists error.
    pub fn resource_already_exists(collection: impl Into<String>, id: impl Into<String>) -> Self {
        Self::ResourceAlreadyExists {
            collection: collection.into(),
            id: id.into(),
        }
    }

    /// Create a new Unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Create a new DataCorruption error.
    pub fn data_corruption(
        collection: impl Into<String>,
        id: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self::DataCorruption {
            collection: collection.into(),
            id: id.into(),
            details: details.into(),
        }
    }

    /// Create a new Serialization error.
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::ResourceNotFound { .. })
    }

    /// Check if this error indicates a temporary failure that might succeed on retry.
    pub fn is_temporary(&self) -> bool {
        matches!(self, StorageError::Unavailable { .. })
    }
}
