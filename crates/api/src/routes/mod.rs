//! API routes

pub mod context;
pub mod health;

use axum::{middleware, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{routing::tenant_context_middleware, state::AppState};

/// Create all API routes
pub fn create_router(state: AppState) -> Router {
    // Health check routes (at root level for infrastructure monitoring)
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness));

    // Tenant context routes, each request resolved from its own Host
    let api_routes = Router::new()
        .route("/context", get(context::current_context))
        .route("/resolve", get(context::resolve_host))
        .layer(middleware::from_fn_with_state(
            state.resolver.clone(),
            tenant_context_middleware,
        ));

    // The console is served from tenant subdomains, so any origin may read
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);

    Router::new()
        .merge(health_routes)
        .nest("/api/v1", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(CompressionLayer::new()),
        )
        .with_state(state)
}
