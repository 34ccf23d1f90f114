//! Swift operation dispatch: routes a resolved operation to the handler.
//!
//! [`dispatch_operation`] bridges the routing layer with the business logic
//! handler. Given a [`RoutingContext`] and HTTP request parts, the handler:
//!
//! 1. Deserializes the request into the operation's typed Input struct
//!    (via [`FromSwiftRequest`](crate::request::FromSwiftRequest))
//! 2. Calls the appropriate provider method
//! 3. Serializes the Output struct into an HTTP response
//!    (via [`IntoSwiftResponse`](crate::response::IntoSwiftResponse))

use std::future::Future;
use std::pin::Pin;

use swiftgate_model::SwiftOperation;
use swiftgate_model::error::SwiftError;

use crate::body::SwiftResponseBody;
use crate::router::RoutingContext;

/// Trait that the business logic provider must implement.
///
/// This is the boundary between the HTTP layer and the container service.
/// The trait uses boxed futures so it can be used with `Arc<dyn SwiftHandler>`
/// for dynamic dispatch in the service layer.
pub trait SwiftHandler: Send + Sync + 'static {
    /// Handle a Swift operation and produce an HTTP response.
    fn handle_operation(
        &self,
        op: SwiftOperation,
        parts: http::request::Parts,
        ctx: RoutingContext,
    ) -> Pin<Box<dyn Future<Output = Result<http::Response<SwiftResponseBody>, SwiftError>> + Send>>;
}

/// Dispatch a routed Swift request to the handler.
pub async fn dispatch_operation<H: SwiftHandler>(
    handler: &H,
    parts: http::request::Parts,
    ctx: RoutingContext,
) -> Result<http::Response<SwiftResponseBody>, SwiftError> {
    let op = ctx.operation;
    tracing::debug!(
        operation = %op,
        account = %ctx.account,
        container = %ctx.container,
        "dispatching Swift operation"
    );
    handler.handle_operation(op, parts, ctx).await
}

/// A default handler implementation that returns NotImplemented for all
/// operations. Useful for testing the HTTP routing layer in isolation.
#[derive(Debug, Clone, Default)]
pub struct NotImplementedHandler;

impl SwiftHandler for NotImplementedHandler {
    fn handle_operation(
        &self,
        op: SwiftOperation,
        _parts: http::request::Parts,
        _ctx: RoutingContext,
    ) -> Pin<Box<dyn Future<Output = Result<http::Response<SwiftResponseBody>, SwiftError>> + Send>>
    {
        Box::pin(async move { Err(SwiftError::not_implemented(op.as_str())) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::RoutingContext;

    #[tokio::test]
    async fn test_should_return_not_implemented_for_default_handler() {
        let handler = NotImplementedHandler;
        let req = http::Request::builder()
            .method(http::Method::GET)
            .uri("/v1/AUTH_test/photos")
            .body(())
            .expect("valid request");
        let (parts, ()) = req.into_parts();
        let ctx = RoutingContext {
            account: "AUTH_test".to_owned(),
            container: "photos".to_owned(),
            operation: SwiftOperation::ListContainer,
            query_params: vec![],
        };

        let err = dispatch_operation(&handler, parts, ctx).await.unwrap_err();
        assert_eq!(
            err.code,
            swiftgate_model::error::SwiftErrorCode::NotImplemented
        );
    }
}
