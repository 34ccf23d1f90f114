//! The main Swift HTTP service implementing hyper's `Service` trait.
//!
//! [`SwiftHttpService`] ties together routing, token checks, dispatch, and
//! response serialization. It handles:
//!
//! 1. Health check interception (`GET /healthz`)
//! 2. Request body collection (drained; container operations carry none)
//! 3. Swift request routing via [`SwiftRouter`]
//! 4. Optional auth-token presence check
//! 5. Operation dispatch to the [`SwiftHandler`]
//! 6. Common response headers (`Server`)
//! 7. Error response formatting

use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use http_body_util::BodyExt;
use hyper::body::Incoming;
use hyper::service::Service;
use tracing::{debug, info, warn};
use uuid::Uuid;

use swiftgate_model::error::{SwiftError, SwiftErrorCode};

use crate::body::SwiftResponseBody;
use crate::dispatch::{SwiftHandler, dispatch_operation};
use crate::response::error_to_response;
use crate::router::SwiftRouter;

/// Configuration for the Swift HTTP service.
#[derive(Debug, Clone)]
pub struct SwiftHttpConfig {
    /// Whether to accept requests without an `X-Auth-Token` header.
    pub skip_token_validation: bool,
}

impl Default for SwiftHttpConfig {
    fn default() -> Self {
        Self {
            skip_token_validation: true,
        }
    }
}

/// The Swift HTTP service that implements hyper's `Service` trait.
///
/// # Type Parameters
///
/// - `H`: The business logic handler implementing [`SwiftHandler`].
#[derive(Debug)]
pub struct SwiftHttpService<H: SwiftHandler> {
    handler: Arc<H>,
    router: SwiftRouter,
    config: Arc<SwiftHttpConfig>,
}

impl<H: SwiftHandler> SwiftHttpService<H> {
    /// Create a new Swift HTTP service with the given handler and
    /// configuration.
    #[must_use]
    pub fn new(handler: H, config: SwiftHttpConfig) -> Self {
        Self {
            handler: Arc::new(handler),
            router: SwiftRouter::new(),
            config: Arc::new(config),
        }
    }

    /// Create a new Swift HTTP service from an `Arc<H>` handler.
    #[must_use]
    pub fn from_shared(handler: Arc<H>, config: SwiftHttpConfig) -> Self {
        Self {
            handler,
            router: SwiftRouter::new(),
            config: Arc::new(config),
        }
    }
}

impl<H: SwiftHandler> Clone for SwiftHttpService<H> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
            router: self.router.clone(),
            config: Arc::clone(&self.config),
        }
    }
}

impl<H: SwiftHandler> Service<http::Request<Incoming>> for SwiftHttpService<H> {
    type Response = http::Response<SwiftResponseBody>;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn call(&self, req: http::Request<Incoming>) -> Self::Future {
        let handler = Arc::clone(&self.handler);
        let router = self.router.clone();
        let config = Arc::clone(&self.config);

        Box::pin(async move {
            let request_id = Uuid::new_v4().to_string();

            let response =
                process_request(req, handler.as_ref(), &router, &config, &request_id).await;

            Ok(add_common_headers(response))
        })
    }
}

/// Process an incoming HTTP request through the Swift pipeline.
async fn process_request<H: SwiftHandler>(
    req: http::Request<Incoming>,
    handler: &H,
    router: &SwiftRouter,
    config: &SwiftHttpConfig,
    request_id: &str,
) -> http::Response<SwiftResponseBody> {
    let method = req.method().clone();
    let uri = req.uri().clone();
    debug!(%method, %uri, request_id, "processing Swift request");

    // 1. Health check interception.
    if is_health_check(&method, uri.path()) {
        return health_check_response();
    }

    // 2. Route the request.
    let ctx = match router.resolve(&req) {
        Ok(ctx) => ctx,
        Err(err) => {
            warn!(%method, %uri, error = %err, request_id, "failed to route Swift request");
            return error_to_response(&err);
        }
    };

    info!(
        operation = %ctx.operation,
        account = %ctx.account,
        container = %ctx.container,
        request_id,
        "routed Swift request"
    );

    // 3. Drain the body; container operations carry none of interest.
    let (parts, incoming) = req.into_parts();
    if let Err(err) = incoming.collect().await {
        warn!(error = %err, request_id, "failed to read request body");
        let swift_err = SwiftError::internal_error("Failed to read request body");
        return error_to_response(&swift_err);
    }

    // 4. Token presence check. The token itself is opaque here; it is
    // forwarded to backend resolution by the handler.
    if !config.skip_token_validation && !parts.headers.contains_key("x-auth-token") {
        warn!(request_id, "request without auth token rejected");
        return error_to_response(&SwiftError::new(SwiftErrorCode::Unauthorized));
    }

    // 5. Dispatch to the handler.
    match dispatch_operation(handler, parts, ctx).await {
        Ok(response) => response,
        Err(err) => {
            debug!(error = %err, request_id, "Swift operation returned error");
            error_to_response(&err)
        }
    }
}

/// Check if the request is a health check probe.
fn is_health_check(method: &http::Method, path: &str) -> bool {
    *method == http::Method::GET && (path == "/healthz" || path == "/health")
}

/// Produce a health check response.
fn health_check_response() -> http::Response<SwiftResponseBody> {
    http::Response::builder()
        .status(http::StatusCode::OK)
        .header("Content-Type", "application/json")
        .body(SwiftResponseBody::from_string(
            r#"{"status":"running","service":"swift"}"#,
        ))
        .expect("static health response should be valid")
}

/// Add common response headers to every Swift response.
fn add_common_headers(
    mut response: http::Response<SwiftResponseBody>,
) -> http::Response<SwiftResponseBody> {
    response.headers_mut().insert(
        "Server",
        http::header::HeaderValue::from_static("SwiftGate"),
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_detect_health_check_paths() {
        assert!(is_health_check(&http::Method::GET, "/healthz"));
        assert!(is_health_check(&http::Method::GET, "/health"));
        assert!(!is_health_check(&http::Method::POST, "/healthz"));
        assert!(!is_health_check(&http::Method::GET, "/v1/AUTH_test/photos"));
    }

    #[test]
    fn test_should_produce_health_check_response() {
        let resp = health_check_response();
        assert_eq!(resp.status(), http::StatusCode::OK);
        assert_eq!(
            resp.headers()
                .get("Content-Type")
                .and_then(|v| v.to_str().ok()),
            Some("application/json"),
        );
    }

    #[test]
    fn test_should_add_server_header() {
        let resp = http::Response::builder()
            .status(http::StatusCode::OK)
            .body(SwiftResponseBody::empty())
            .expect("valid response");
        let resp = add_common_headers(resp);
        assert_eq!(
            resp.headers().get("Server").and_then(|v| v.to_str().ok()),
            Some("SwiftGate"),
        );
    }

    #[test]
    fn test_should_default_to_skipping_token_validation() {
        let config = SwiftHttpConfig::default();
        assert!(config.skip_token_validation);
    }
}
