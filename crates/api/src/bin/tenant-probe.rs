#!/usr/bin/env cargo
//! Tenant context probe for tenantctx
//!
//! Resolves a hostname the same way the API does and prints the result,
//! handy for checking DNS/base domain setups before going live.
//!
//! Usage:
//!   cargo run --bin tenant-probe
//!   cargo run --bin tenant-probe acme.oggyandolivia.cfd
//!
//! Base domains come from BASE_DOMAIN_DEV / BASE_DOMAIN_PROD (or .env).
//!
//! Example output:
//!   {
//!     "environment": "production",
//!     "base_domain": "oggyandolivia.cfd",
//!     "current_host": "acme.oggyandolivia.cfd",
//!     "is_super_admin": false,
//!     "subdomain": "acme",
//!     "display": "Tenant: ACME"
//!   }

use std::env;
use std::io::{self, Write};

use tenantctx_api::{routing::host_from_header, Config, HostResolver};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let input = if let Some(host) = env::args().nth(1) {
        host
    } else {
        // Prompt on stderr so stdout stays pure JSON
        eprint!("Enter hostname: ");
        io::stderr().flush()?;

        let mut host = String::new();
        io::stdin().read_line(&mut host)?;
        host
    };

    let hostname = host_from_header(&input);
    if hostname.is_empty() {
        eprintln!("Error: Hostname cannot be empty");
        std::process::exit(1);
    }

    let config = Config::from_env()?;
    let resolver = HostResolver::new(config.base_domains);
    let context = resolver.resolve(hostname);

    println!("{}", serde_json::to_string_pretty(&context)?);

    Ok(())
}
