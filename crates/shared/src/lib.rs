//! Tenantctx Shared Types and Utilities
//!
//! This crate contains the types and errors shared by the tenant context
//! resolver and the services built on top of it.

pub mod error;
pub mod types;

pub use error::*;
pub use types::*;
