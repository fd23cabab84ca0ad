//! Tenant Context Middleware
//!
//! Resolves the host of every request once and stores the resulting
//! [`TenantContext`] in the request extensions. Requests are never rejected
//! here; handlers decide what a missing context means.

use axum::{
    extract::{Request, State},
    http::header::HOST,
    middleware::Next,
    response::Response,
};
use tenantctx_shared::TenantContext;

use super::host_resolver::{host_from_header, HostResolver};

/// Middleware that attaches a [`TenantContext`] to each request
pub async fn tenant_context_middleware(
    State(resolver): State<HostResolver>,
    mut request: Request,
    next: Next,
) -> Response {
    let context: Option<TenantContext> = request_host(&request).map(|host| resolver.resolve(host));

    match &context {
        Some(context) => match context.tenant() {
            Some(tenant) => {
                tracing::debug!(tenant, host = %context.current_host, "Setting tenant context")
            }
            None if context.is_super_admin => {
                tracing::debug!(host = %context.current_host, "Super admin context")
            }
            None => tracing::warn!(
                host = %context.current_host,
                base_domain = %context.base_domain,
                "Could not extract tenant from host"
            ),
        },
        None => tracing::warn!("Request has no usable Host header"),
    }

    if let Some(context) = context {
        request.extensions_mut().insert(context);
    }

    next.run(request).await
}

/// Hostname of a request
///
/// Reads the Host header, falling back to the URI authority (HTTP/2).
pub fn request_host(request: &Request) -> Option<&str> {
    request
        .headers()
        .get(HOST)
        .and_then(|value| value.to_str().ok())
        .or_else(|| request.uri().authority().map(|authority| authority.as_str()))
        .map(host_from_header)
        .filter(|host| !host.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        routing::get,
        Extension, Router,
    };
    use tenantctx_shared::BaseDomainConfig;
    use tower::ServiceExt;

    async fn tenant_handler(context: Option<Extension<TenantContext>>) -> String {
        match context {
            Some(Extension(context)) => context.tenant().unwrap_or("-").to_string(),
            None => "none".to_string(),
        }
    }

    async fn teapot_handler() -> StatusCode {
        StatusCode::IM_A_TEAPOT
    }

    fn app() -> Router {
        let resolver =
            HostResolver::new(BaseDomainConfig::new("localhost", "example.com").unwrap());

        Router::new()
            .route("/", get(tenant_handler))
            .route("/teapot", get(teapot_handler))
            .layer(axum::middleware::from_fn_with_state(
                resolver,
                tenant_context_middleware,
            ))
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_context_is_attached() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header("host", "Acme.example.com:443")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "Acme");
    }

    #[tokio::test]
    async fn test_unknown_host_still_passes() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header("host", "unrelated.org")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "-");
    }

    #[tokio::test]
    async fn test_missing_host_leaves_no_context() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "none");
    }

    #[tokio::test]
    async fn test_authority_fallback() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("http://globex.localhost:3000/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(body_string(response).await, "globex");
    }

    #[tokio::test]
    async fn test_status_is_untouched() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/teapot")
                    .header("host", "unrelated.org")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);
    }
}
