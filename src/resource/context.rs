//! Request tracking for SCIM operations.

use uuid::Uuid;

/// Request context for SCIM operations.
///
/// Carries the request id through the manager and the store so that every
/// log line of one request can be correlated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// Unique identifier for this request
    pub request_id: String,
}

impl RequestContext {
    /// Create a new request context with a specific request ID.
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
        }
    }

    /// Create a new request context with a generated request ID.
    pub fn with_generated_id() -> Self {
        Self::new(Uuid::new_v4().to_string())
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::with_generated_id()
    }
}
