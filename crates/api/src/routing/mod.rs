//! Host-based tenant routing
//!
//! This module derives the tenant context of a request from its hostname:
//! - Super admin console: the base domain itself, or 127.0.0.1
//! - Tenant subdomains: acme.oggyandolivia.cfd, acme.localhost

mod host_resolver;
mod middleware;

pub use host_resolver::{
    host_from_header, is_super_admin_domain, resolve_base_domain, select_environment, subdomain,
    tenant_display, HostResolver, LOOPBACK_HOST, SUPER_ADMIN_DISPLAY, UNKNOWN_DOMAIN_DISPLAY,
};
pub use middleware::{request_host, tenant_context_middleware};
