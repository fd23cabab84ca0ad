//! Common types used across tenantctx

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TenantError;

/// Base domain used while developing against a local server
pub const DEFAULT_DEV_BASE_DOMAIN: &str = "localhost";

/// Base domain of the production deployment
pub const DEFAULT_PROD_BASE_DOMAIN: &str = "oggyandolivia.cfd";

// =============================================================================
// Environment
// =============================================================================

/// Deployment environment, selected from the hostname of each evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Base Domains
// =============================================================================

/// Base domain per environment
///
/// Every environment has exactly one entry, so lookups never fail. Values are
/// validated on construction and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaseDomainConfig {
    development: String,
    production: String,
}

impl BaseDomainConfig {
    /// Build a validated mapping
    pub fn new(
        development: impl Into<String>,
        production: impl Into<String>,
    ) -> Result<Self, TenantError> {
        let development = development.into();
        let production = production.into();

        validate_base_domain(Environment::Development, &development)?;
        validate_base_domain(Environment::Production, &production)?;

        Ok(Self {
            development,
            production,
        })
    }

    /// Base domain configured for an environment
    pub fn base_domain(&self, environment: Environment) -> &str {
        match environment {
            Environment::Development => &self.development,
            Environment::Production => &self.production,
        }
    }
}

impl Default for BaseDomainConfig {
    fn default() -> Self {
        Self {
            development: DEFAULT_DEV_BASE_DOMAIN.to_string(),
            production: DEFAULT_PROD_BASE_DOMAIN.to_string(),
        }
    }
}

/// Reject base domains that could never match a hostname on label boundaries
pub fn validate_base_domain(environment: Environment, domain: &str) -> Result<(), TenantError> {
    let reason = if domain.is_empty() {
        "must not be empty"
    } else if domain.chars().any(char::is_whitespace) {
        "must not contain whitespace"
    } else if domain.split('.').any(str::is_empty) {
        "must not contain empty labels"
    } else {
        return Ok(());
    };

    Err(TenantError::InvalidBaseDomain {
        environment,
        reason,
    })
}

// =============================================================================
// Tenant Context
// =============================================================================

/// Everything derived from one hostname
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantContext {
    pub environment: Environment,
    pub base_domain: String,
    pub current_host: String,
    pub is_super_admin: bool,
    /// Tenant token with its original casing
    pub subdomain: Option<String>,
    /// Human-readable label for the console header
    pub display: String,
}

impl TenantContext {
    /// Tenant token, if the host is a tenant subdomain
    pub fn tenant(&self) -> Option<&str> {
        self.subdomain.as_deref()
    }
}
