//! Swift operation handler implementation for [`SwiftGate`].
//!
//! Bridges the HTTP layer (`swiftgate-http`) with the business logic
//! (`swiftgate-core`) by implementing the [`SwiftHandler`] trait. Each
//! operation is dispatched to the corresponding `handle_*` method on
//! [`SwiftGate`], with request deserialization via [`FromSwiftRequest`] and
//! response serialization via [`IntoSwiftResponse`].

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use swiftgate_core::{SwiftGate, SwiftServiceError};
use swiftgate_http::body::SwiftResponseBody;
use swiftgate_http::dispatch::SwiftHandler;
use swiftgate_http::request::FromSwiftRequest;
use swiftgate_http::response::IntoSwiftResponse;
use swiftgate_http::router::RoutingContext;
use swiftgate_model::SwiftOperation;
use swiftgate_model::error::SwiftError;

/// Wrapper that implements [`SwiftHandler`] by delegating to [`SwiftGate`]
/// handler methods.
#[derive(Debug, Clone)]
pub struct SwiftGateHandler(pub Arc<SwiftGate>);

impl SwiftHandler for SwiftGateHandler {
    fn handle_operation(
        &self,
        op: SwiftOperation,
        parts: http::request::Parts,
        ctx: RoutingContext,
    ) -> Pin<Box<dyn Future<Output = Result<http::Response<SwiftResponseBody>, SwiftError>> + Send>>
    {
        let provider = Arc::clone(&self.0);
        Box::pin(async move {
            match op {
                SwiftOperation::ListContainer => {
                    dispatch(&parts, &ctx, |input| async move {
                        provider.handle_list_container(input).await
                    })
                    .await
                }
                SwiftOperation::HeadContainer => {
                    dispatch(&parts, &ctx, |input| async move {
                        provider.handle_head_container(input).await
                    })
                    .await
                }
                SwiftOperation::CreateContainer => {
                    dispatch(&parts, &ctx, |input| async move {
                        provider.handle_create_container(input).await
                    })
                    .await
                }
                SwiftOperation::PostContainer => {
                    dispatch(&parts, &ctx, |input| async move {
                        provider.handle_post_container(input).await
                    })
                    .await
                }
                SwiftOperation::DeleteContainer => {
                    dispatch(&parts, &ctx, |input| async move {
                        provider.handle_delete_container(input).await
                    })
                    .await
                }
            }
        })
    }
}

/// Deserialize the input, invoke the provider, serialize the output.
async fn dispatch<I, O, F, Fut>(
    parts: &http::request::Parts,
    ctx: &RoutingContext,
    call: F,
) -> Result<http::Response<SwiftResponseBody>, SwiftError>
where
    I: FromSwiftRequest,
    O: IntoSwiftResponse,
    F: FnOnce(I) -> Fut,
    Fut: Future<Output = Result<O, SwiftServiceError>>,
{
    let input = I::from_swift_request(parts, ctx)?;
    let output = call(input)
        .await
        .map_err(SwiftServiceError::into_swift_error)?;
    output.into_swift_response()
}

#[cfg(test)]
mod tests {
    use http_body_util::BodyExt;
    use swiftgate_core::SwiftConfig;
    use swiftgate_model::SwiftErrorCode;

    use super::*;

    fn handler() -> SwiftGateHandler {
        SwiftGateHandler(Arc::new(SwiftGate::new(SwiftConfig::default())))
    }

    fn request_parts(method: http::Method, uri: &str) -> http::request::Parts {
        let (parts, ()) = http::Request::builder()
            .method(method)
            .uri(uri)
            .body(())
            .expect("valid request")
            .into_parts();
        parts
    }

    fn routing_ctx(container: &str, op: SwiftOperation, query: &str) -> RoutingContext {
        RoutingContext {
            account: "AUTH_test".to_owned(),
            container: container.to_owned(),
            operation: op,
            query_params: query
                .split('&')
                .filter(|s| !s.is_empty())
                .map(|pair| {
                    pair.find('=').map_or_else(
                        || (pair.to_owned(), String::new()),
                        |pos| (pair[..pos].to_owned(), pair[pos + 1..].to_owned()),
                    )
                })
                .collect(),
        }
    }

    async fn run(
        handler: &SwiftGateHandler,
        method: http::Method,
        op: SwiftOperation,
        container: &str,
        query: &str,
    ) -> Result<http::Response<SwiftResponseBody>, SwiftError> {
        let uri = format!("/v1/AUTH_test/{container}?{query}");
        let parts = request_parts(method, &uri);
        let ctx = routing_ctx(container, op, query);
        handler.handle_operation(op, parts, ctx).await
    }

    #[tokio::test]
    async fn test_should_serve_full_container_lifecycle() {
        let handler = handler();

        // PUT: create.
        let resp = run(
            &handler,
            http::Method::PUT,
            SwiftOperation::CreateContainer,
            "photos",
            "",
        )
        .await
        .expect("create");
        assert_eq!(resp.status(), http::StatusCode::CREATED);

        // PUT again: accepted no-op.
        let resp = run(
            &handler,
            http::Method::PUT,
            SwiftOperation::CreateContainer,
            "photos",
            "",
        )
        .await
        .expect("re-create");
        assert_eq!(resp.status(), http::StatusCode::ACCEPTED);

        // HEAD: present, zero objects.
        let resp = run(
            &handler,
            http::Method::HEAD,
            SwiftOperation::HeadContainer,
            "photos",
            "",
        )
        .await
        .expect("head");
        assert_eq!(resp.status(), http::StatusCode::NO_CONTENT);
        assert_eq!(
            resp.headers()
                .get("X-Container-Object-Count")
                .and_then(|v| v.to_str().ok()),
            Some("0")
        );

        // GET: empty plain listing.
        let resp = run(
            &handler,
            http::Method::GET,
            SwiftOperation::ListContainer,
            "photos",
            "",
        )
        .await
        .expect("list");
        assert_eq!(resp.status(), http::StatusCode::OK);
        let body = resp.into_body().collect().await.expect("body").to_bytes();
        assert!(body.is_empty());

        // DELETE: empty container goes away.
        let resp = run(
            &handler,
            http::Method::DELETE,
            SwiftOperation::DeleteContainer,
            "photos",
            "",
        )
        .await
        .expect("delete");
        assert_eq!(resp.status(), http::StatusCode::NO_CONTENT);

        // GET afterwards: gone.
        let err = run(
            &handler,
            http::Method::GET,
            SwiftOperation::ListContainer,
            "photos",
            "",
        )
        .await
        .unwrap_err();
        assert_eq!(err.code, SwiftErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_should_reject_bad_format_through_dispatch() {
        let handler = handler();
        run(
            &handler,
            http::Method::PUT,
            SwiftOperation::CreateContainer,
            "photos",
            "",
        )
        .await
        .expect("create");

        let err = run(
            &handler,
            http::Method::GET,
            SwiftOperation::ListContainer,
            "photos",
            "format=yaml",
        )
        .await
        .unwrap_err();
        assert_eq!(err.code, SwiftErrorCode::BadRequest);
    }
}
