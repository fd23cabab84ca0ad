//! Error types for tenantctx

use thiserror::Error;

use crate::types::Environment;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TenantError {
    #[error("Invalid base domain for {environment}: {reason}")]
    InvalidBaseDomain {
        environment: Environment,
        reason: &'static str,
    },
}
