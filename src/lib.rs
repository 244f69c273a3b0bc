//! SCIM 2.0 User and Group directory core.
//!
//! Provisions, fetches, replaces and deletes User and Group resources over a
//! pluggable document store. The server owns every resource's identity and
//! lifecycle metadata; clients only supply attributes.
//!
//! # Core Components
//!
//! - [`ScimServer`] - owns the store and one [`ResourceManager`] per kind
//! - [`ScimOperationHandler`] - maps HTTP requests onto manager operations
//! - [`StorageProvider`](storage::StorageProvider) - trait for storage backends
//! - [`MetadataSynthesizer`](resource::MetadataSynthesizer) - stamps ids and
//!   `meta` onto client representations
//!
//! # Quick Start
//!
//! ```rust
//! use scim_directory::{ScimOperationHandler, ScimServerBuilder};
//! use scim_directory::storage::InMemoryStorage;
//! use http::{Request, StatusCode};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let server = ScimServerBuilder::new(InMemoryStorage::new())
//!     .with_host("scim.example.com")
//!     .with_port(443)
//!     .with_scheme("https")
//!     .build()?;
//! let handler = ScimOperationHandler::new(server);
//!
//! let response = handler
//!     .handle(Request::post("/v2/Users").body(br#"{"userName": "alice"}"#.to_vec())?)
//!     .await;
//! assert_eq!(response.status(), StatusCode::CREATED);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod operation_handler;
pub mod providers;
pub mod resource;
pub mod scim_server;
pub mod storage;

// Re-export commonly used types for convenience
pub use error::{ScimError, ScimResult, ValidationError};
pub use operation_handler::{ScimOperation, ScimOperationHandler, create_error_response};
pub use providers::ResourceManager;
pub use resource::{Group, RequestContext, ResourceKind, ScimResource, User};
pub use scim_server::{ScimServer, ScimServerBuilder, ScimServerConfig};
