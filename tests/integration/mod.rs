//! End-to-end tests for the SCIM directory.
//!
//! Every test builds its own handler over its own store, so tests never
//! observe each other's resources.

mod concurrency;
mod group_lifecycle;
mod property_tests;
