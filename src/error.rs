//! Error types for SCIM directory operations.
//!
//! Every failure in the resource lifecycle is reported as a [`ScimError`].
//! The Resource Manager and the storage layer only ever return these typed
//! conditions; translation to an HTTP status and body happens once, in the
//! operation handler.

use http::StatusCode;

use crate::storage::StorageError;

/// Main error type for SCIM directory operations.
#[derive(Debug, thiserror::Error)]
pub enum ScimError {
    /// The request body could not be decoded into the expected resource shape
    #[error("Malformed input: {message}")]
    MalformedInput { message: String },

    /// The decoded resource violates a structural rule
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The targeted resource does not exist
    #[error("Resource not found: {resource_type} with ID {id}")]
    ResourceNotFound { resource_type: String, id: String },

    /// The resource store could not be reached or failed unexpectedly
    #[error("Resource store unavailable: {message}")]
    StoreUnavailable { message: String },

    /// The HTTP method is not supported on the matched path
    #[error("Method {method} not allowed on {path}")]
    MethodNotAllowed {
        method: String,
        path: String,
        /// Methods the path does accept, as an `Allow` header value
        allow: String,
    },

    /// The endpoint is recognised but carries no implementation
    #[error("Endpoint not implemented: {endpoint}")]
    NotImplemented { endpoint: String },

    /// No route matches the request path
    #[error("No resource endpoint at {path}")]
    NoRoute { path: String },

    /// Internal server errors
    #[error("Internal server error: {message}")]
    Internal { message: String },
}

/// Structural rule violations detected after a body decodes successfully.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// Multiple primary values in multi-valued attribute
    #[error("Attribute '{attribute}' cannot have multiple primary values")]
    MultiplePrimaryValues { attribute: String },
}

impl ScimError {
    /// Create a malformed input error
    pub fn malformed_input(message: impl Into<String>) -> Self {
        Self::MalformedInput {
            message: message.into(),
        }
    }

    /// Create a resource not found error
    pub fn resource_not_found(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::ResourceNotFound {
            resource_type: resource_type.into(),
            id: id.into(),
        }
    }

    /// Create a store unavailable error
    pub fn store_unavailable(message: impl Into<String>) -> Self {
        Self::StoreUnavailable {
            message: message.into(),
        }
    }

    /// Create an internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// The HTTP status code this condition maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ScimError::MalformedInput { .. } | ScimError::Validation(_) => StatusCode::BAD_REQUEST,
            ScimError::ResourceNotFound { .. } | ScimError::NoRoute { .. } => {
                StatusCode::NOT_FOUND
            }
            ScimError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            ScimError::NotImplemented { .. } => StatusCode::NOT_IMPLEMENTED,
            ScimError::StoreUnavailable { .. } | ScimError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message safe to hand back to a client.
    ///
    /// Store and internal failures are reduced to a generic sentence; their
    /// detail only goes to the log.
    pub fn public_message(&self) -> String {
        match self {
            ScimError::StoreUnavailable { .. } => "Resource store unavailable".to_string(),
            ScimError::Internal { .. } => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<StorageError> for ScimError {
    fn from(error: StorageError) -> Self {
        match error {
            StorageError::ResourceNotFound { collection, id } => Self::ResourceNotFound {
                resource_type: collection,
                id,
            },
            other if other.is_temporary() => Self::store_unavailable(other.to_string()),
            other => Self::internal(other.to_string()),
        }
    }
}

// Result type aliases for convenience
pub type ScimResult<T> = Result<T, ScimError>;
pub type ValidationResult<T> = Result<T, ValidationError>;
