//! Operation handlers, one module per operation family.

pub mod crud;
