//! SCIM server assembly.
//!
//! * [`core`] - the [`ScimServer`] that owns the store and one manager per
//!   resource kind
//! * [`builder`] - configuration and the [`ScimServerBuilder`]

pub mod builder;
pub mod core;

pub use builder::{ScimServerBuilder, ScimServerConfig};
pub use core::ScimServer;
