//! Tenantctx API Library
//!
//! Hostname-driven tenant context for multi-tenant deployments: the
//! resolver itself, its configuration, and the HTTP surface exposing it.

pub mod config;
pub mod error;
pub mod routes;
pub mod routing;
pub mod state;

pub use config::Config;
pub use error::{ApiError, ApiResult};
pub use routing::HostResolver;
pub use state::AppState;
