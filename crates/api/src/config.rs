//! Application configuration

use std::env;
use std::net::SocketAddr;

use tenantctx_shared::{
    BaseDomainConfig, TenantError, DEFAULT_DEV_BASE_DOMAIN, DEFAULT_PROD_BASE_DOMAIN,
};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub bind_address: SocketAddr,

    // Tenancy
    pub base_domains: BaseDomainConfig, // e.g., "oggyandolivia.cfd" for *.oggyandolivia.cfd tenants
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([0, 0, 0, 0], 3000)),
            base_domains: BaseDomainConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_address =
            env::var("BIND_ADDRESS").unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());

        Ok(Self {
            // Server
            bind_address: bind_address
                .parse()
                .map_err(|_| ConfigError::InvalidBindAddress(bind_address))?,

            // Tenancy: fail at startup instead of resolving against a broken mapping
            base_domains: BaseDomainConfig::new(
                env::var("BASE_DOMAIN_DEV").unwrap_or_else(|_| DEFAULT_DEV_BASE_DOMAIN.to_string()),
                env::var("BASE_DOMAIN_PROD")
                    .unwrap_or_else(|_| DEFAULT_PROD_BASE_DOMAIN.to_string()),
            )?,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),
    #[error(transparent)]
    InvalidBaseDomain(#[from] TenantError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;
    use tenantctx_shared::Environment;

    /// Helper to clear env vars after tests
    fn cleanup_config() {
        env::remove_var("BIND_ADDRESS");
        env::remove_var("BASE_DOMAIN_DEV");
        env::remove_var("BASE_DOMAIN_PROD");
    }

    #[test]
    #[serial]
    fn test_defaults() {
        cleanup_config();

        let config = Config::from_env().unwrap();
        assert_eq!(config.bind_address.to_string(), "0.0.0.0:3000");
        assert_eq!(
            config.base_domains.base_domain(Environment::Development),
            "localhost"
        );
        assert_eq!(
            config.base_domains.base_domain(Environment::Production),
            "oggyandolivia.cfd"
        );
    }

    #[test]
    #[serial]
    fn test_overrides() {
        cleanup_config();
        env::set_var("BIND_ADDRESS", "127.0.0.1:8080");
        env::set_var("BASE_DOMAIN_DEV", "dev.localhost");
        env::set_var("BASE_DOMAIN_PROD", "example.com");

        let config = Config::from_env().unwrap();
        assert_eq!(config.bind_address.port(), 8080);
        assert_eq!(
            config.base_domains.base_domain(Environment::Development),
            "dev.localhost"
        );
        assert_eq!(
            config.base_domains.base_domain(Environment::Production),
            "example.com"
        );

        cleanup_config();
    }

    #[test]
    #[serial]
    fn test_invalid_base_domains_fail_fast() {
        cleanup_config();

        env::set_var("BASE_DOMAIN_PROD", "");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::InvalidBaseDomain(TenantError::InvalidBaseDomain {
                environment: Environment::Production,
                ..
            }))
        ));

        env::set_var("BASE_DOMAIN_PROD", "example..com");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::InvalidBaseDomain(_))
        ));

        env::remove_var("BASE_DOMAIN_PROD");
        env::set_var("BASE_DOMAIN_DEV", " ");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::InvalidBaseDomain(TenantError::InvalidBaseDomain {
                environment: Environment::Development,
                ..
            }))
        ));

        cleanup_config();
    }

    #[test]
    #[serial]
    fn test_invalid_bind_address() {
        cleanup_config();
        env::set_var("BIND_ADDRESS", "not-an-address");

        match Config::from_env() {
            Err(ConfigError::InvalidBindAddress(value)) => assert_eq!(value, "not-an-address"),
            other => panic!("Expected InvalidBindAddress, got: {:?}", other),
        }

        cleanup_config();
    }
}
