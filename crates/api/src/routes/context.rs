//! Tenant context endpoints

use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;
use tenantctx_shared::TenantContext;

use crate::{
    error::{ApiError, ApiResult},
    routing::host_from_header,
    state::AppState,
};

/// Tenant context of the calling host
///
/// The context is attached by `tenant_context_middleware`; it is missing only
/// when the request carried no usable Host header.
pub async fn current_context(
    context: Option<Extension<TenantContext>>,
) -> ApiResult<Json<TenantContext>> {
    let Extension(context) = context
        .ok_or_else(|| ApiError::BadRequest("Missing or invalid Host header".to_string()))?;

    Ok(Json(context))
}

#[derive(Debug, Deserialize)]
pub struct ResolveQuery {
    pub host: String,
}

/// Tenant context of an arbitrary host, e.g. for previewing tenant URLs
pub async fn resolve_host(
    State(state): State<AppState>,
    Query(query): Query<ResolveQuery>,
) -> ApiResult<Json<TenantContext>> {
    let host = host_from_header(&query.host);
    if host.is_empty() {
        return Err(ApiError::BadRequest("host must not be empty".to_string()));
    }

    Ok(Json(state.resolver.resolve(host)))
}
