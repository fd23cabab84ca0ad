//! Host-to-Tenant Resolution
//!
//! Derives the tenant context of a request from its hostname.
//! Supports:
//! - Super admin hosts: 127.0.0.1, oggyandolivia.cfd -> admin console
//! - Tenant subdomains: acme.oggyandolivia.cfd -> tenant "acme"
//! - Anything else: unknown domain context
//!
//! Every function here is pure: hostname and base domain come in as
//! arguments, nothing is read from ambient state.

use tenantctx_shared::{BaseDomainConfig, Environment, TenantContext};

/// Loopback literal that always maps to the admin console
pub const LOOPBACK_HOST: &str = "127.0.0.1";

/// Label shown on the base domain and loopback
pub const SUPER_ADMIN_DISPLAY: &str = "SUPER ADMIN Console (Base Domain)";

/// Label shown for hosts outside the base domain
pub const UNKNOWN_DOMAIN_DISPLAY: &str = "Unknown Domain Context";

const TENANT_DISPLAY_PREFIX: &str = "Tenant: ";

/// Pick the environment for a hostname
///
/// Substring match, so `notlocalhost.com` is development as well.
pub fn select_environment(hostname: &str) -> Environment {
    if hostname == LOOPBACK_HOST || hostname.contains("localhost") {
        Environment::Development
    } else {
        Environment::Production
    }
}

/// Look up the base domain configured for an environment
pub fn resolve_base_domain(domains: &BaseDomainConfig, environment: Environment) -> &str {
    domains.base_domain(environment)
}

/// Check if the host is the base domain itself (or loopback)
pub fn is_super_admin_domain(hostname: &str, base_domain: &str) -> bool {
    hostname == LOOPBACK_HOST || eq_ignore_case(hostname, base_domain)
}

/// Human-readable label for the console header
pub fn tenant_display(hostname: &str, base_domain: &str) -> String {
    if is_super_admin_domain(hostname, base_domain) {
        return SUPER_ADMIN_DISPLAY.to_string();
    }

    match tenant_label(hostname, base_domain) {
        Some(label) => format!("{}{}", TENANT_DISPLAY_PREFIX, label.to_uppercase()),
        None => UNKNOWN_DOMAIN_DISPLAY.to_string(),
    }
}

/// Extract the tenant token (leftmost label, original case)
///
/// Returns None for the super admin hosts and for hosts outside the base domain.
pub fn subdomain<'a>(hostname: &'a str, base_domain: &str) -> Option<&'a str> {
    if is_super_admin_domain(hostname, base_domain) {
        return None;
    }

    tenant_label(hostname, base_domain)
}

/// Leftmost label of `hostname` if it strictly extends `base_domain`
///
/// Comparison runs on split labels, so `evilexample.com` never matches
/// `example.com`.
fn tenant_label<'a>(hostname: &'a str, base_domain: &str) -> Option<&'a str> {
    let labels: Vec<&str> = hostname.split('.').collect();
    let base_labels: Vec<&str> = base_domain.split('.').collect();

    if labels.len() <= base_labels.len() {
        return None;
    }

    let offset = labels.len() - base_labels.len();
    let matches_base = labels[offset..]
        .iter()
        .zip(&base_labels)
        .all(|(label, base)| eq_ignore_case(label, base));

    if matches_base {
        labels.first().copied()
    } else {
        None
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        a.eq_ignore_ascii_case(b)
    } else {
        a.to_lowercase() == b.to_lowercase()
    }
}

/// Turn a Host header value into a hostname
///
/// Drops surrounding whitespace and the port. Case is preserved.
pub fn host_from_header(value: &str) -> &str {
    let value = value.trim();

    // IPv6 literal: keep the brackets, drop the port
    if value.starts_with('[') {
        return match value.find(']') {
            Some(end) => &value[..=end],
            None => value,
        };
    }

    match value.rsplit_once(':') {
        Some((host, port)) if port.chars().all(|c| c.is_ascii_digit()) => host,
        _ => value,
    }
}

/// Host resolver bound to a set of base domains
#[derive(Debug, Clone, Default)]
pub struct HostResolver {
    domains: BaseDomainConfig,
}

impl HostResolver {
    /// Create a new host resolver
    pub fn new(domains: BaseDomainConfig) -> Self {
        Self { domains }
    }

    /// Base domains this resolver was built with
    pub fn domains(&self) -> &BaseDomainConfig {
        &self.domains
    }

    /// Resolve a hostname to its full tenant context
    pub fn resolve(&self, hostname: &str) -> TenantContext {
        let environment = select_environment(hostname);
        let base_domain = resolve_base_domain(&self.domains, environment);

        let context = TenantContext {
            environment,
            base_domain: base_domain.to_string(),
            current_host: hostname.to_string(),
            is_super_admin: is_super_admin_domain(hostname, base_domain),
            subdomain: subdomain(hostname, base_domain).map(str::to_string),
            display: tenant_display(hostname, base_domain),
        };

        tracing::debug!(
            environment = %context.environment,
            base_domain = %context.base_domain,
            host = %context.current_host,
            is_super_admin = context.is_super_admin,
            subdomain = ?context.subdomain,
            "Resolved tenant context"
        );

        context
    }
}
