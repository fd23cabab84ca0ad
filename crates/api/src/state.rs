//! Shared application state

use std::sync::Arc;

use crate::{config::Config, routing::HostResolver};

/// State cloned into every handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub resolver: HostResolver,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let resolver = HostResolver::new(config.base_domains.clone());
        Self {
            config: Arc::new(config),
            resolver,
        }
    }
}
