//! Framework-agnostic SCIM request dispatcher.
//!
//! Maps HTTP requests onto Resource Manager operations and renders the
//! results as HTTP responses. Any server that can produce an
//! [`http::Request`] with a buffered body can mount it.
//!
//! # Key Types
//!
//! - [`ScimOperationHandler`] - entry point, one call per request
//! - [`ScimOperation`] - method and target mapped to a lifecycle operation
//! - [`ROUTES`] - path prefixes and what they lead to
//!
//! # Status mapping
//!
//! | Condition                          | Status |
//! |------------------------------------|--------|
//! | Create succeeded                   | 201    |
//! | Read, Replace, Delete succeeded    | 200    |
//! | Malformed body or validation error | 400    |
//! | Unknown id or unknown path         | 404    |
//! | Method not mapped on the path      | 405    |
//! | Store or internal failure          | 500    |
//! | Discovery or bulk endpoint         | 501    |

mod core;
mod errors;
mod handlers;
pub mod routes;

pub use core::{REQUEST_ID_HEADER, ScimOperation, ScimOperationHandler};
pub use errors::create_error_response;
pub use routes::{ROUTES, ResolvedRoute, RouteTarget, resolve_route};
