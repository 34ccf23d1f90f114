//! Swift request routing: path resolution and operation identification.
//!
//! The [`SwiftRouter`] maps incoming HTTP requests onto container
//! operations by examining:
//!
//! - The URI path, which must follow `/v1/{account}/{container}` for
//!   container operations
//! - The HTTP method (GET, HEAD, PUT, POST, DELETE)
//!
//! Account-level paths (`/v1/{account}`) and object-level paths
//! (`/v1/{account}/{container}/{object...}`) are recognized and reported as
//! NotImplemented rather than misrouted; this slice serves the container
//! surface only.

use http::Method;
use percent_encoding::percent_decode_str;
use swiftgate_model::error::SwiftError;
use swiftgate_model::operations::SwiftOperation;

/// Configuration for Swift request routing.
#[derive(Debug, Clone, Default)]
pub struct SwiftRouter {}

/// The result of routing an HTTP request to a Swift operation.
#[derive(Debug, Clone)]
pub struct RoutingContext {
    /// The resolved account name.
    pub account: String,
    /// The resolved container name.
    pub container: String,
    /// The identified operation.
    pub operation: SwiftOperation,
    /// Parsed query parameters from the request URI.
    pub query_params: Vec<(String, String)>,
}

impl SwiftRouter {
    /// Create a new router.
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    /// Resolve an HTTP request to a routing context.
    ///
    /// # Errors
    ///
    /// Returns a `SwiftError` when the path is not a `/v1` resource
    /// (NotFound), when the path addresses an account or object resource
    /// (NotImplemented in this slice), or when the method is unsupported
    /// (MethodNotAllowed).
    pub fn resolve<B>(&self, req: &http::Request<B>) -> Result<RoutingContext, SwiftError> {
        let method = req.method();
        let uri = req.uri();

        let query_params = parse_query_params(uri.query().unwrap_or(""));

        let (account, container, object) = parse_path(uri.path())?;

        if object.is_some() {
            return Err(SwiftError::not_implemented("object operations"));
        }
        let Some(container) = container else {
            return Err(SwiftError::not_implemented("account operations"));
        };

        let operation = identify_operation(method)?;

        Ok(RoutingContext {
            account,
            container,
            operation,
            query_params,
        })
    }
}

/// Parse a `/v1/{account}[/{container}[/{object...}]]` path.
///
/// Returns the account plus optional container and object components.
fn parse_path(path: &str) -> Result<(String, Option<String>, Option<String>), SwiftError> {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let mut segments = trimmed.splitn(4, '/');

    let version = segments.next().unwrap_or("");
    if version != "v1" {
        return Err(SwiftError::with_message(
            swiftgate_model::SwiftErrorCode::NotFound,
            format!("Unknown resource: {path}"),
        ));
    }

    let account = match segments.next() {
        Some(a) if !a.is_empty() => decode_uri_component(a),
        _ => {
            return Err(SwiftError::with_message(
                swiftgate_model::SwiftErrorCode::NotFound,
                "Missing account in path",
            ));
        }
    };

    let container = segments
        .next()
        .filter(|c| !c.is_empty())
        .map(decode_uri_component);
    let object = segments
        .next()
        .filter(|o| !o.is_empty())
        .map(decode_uri_component);

    Ok((account, container, object))
}

/// Identify the container operation from the HTTP method.
fn identify_operation(method: &Method) -> Result<SwiftOperation, SwiftError> {
    match *method {
        Method::GET => Ok(SwiftOperation::ListContainer),
        Method::HEAD => Ok(SwiftOperation::HeadContainer),
        Method::PUT => Ok(SwiftOperation::CreateContainer),
        Method::POST => Ok(SwiftOperation::PostContainer),
        Method::DELETE => Ok(SwiftOperation::DeleteContainer),
        _ => Err(SwiftError::method_not_allowed(method.as_str())),
    }
}

/// Decode a percent-encoded URI component.
fn decode_uri_component(s: &str) -> String {
    percent_decode_str(s).decode_utf8_lossy().into_owned()
}

/// Parse a query string into key-value pairs.
pub(crate) fn parse_query_params(query: &str) -> Vec<(String, String)> {
    if query.is_empty() {
        return Vec::new();
    }

    query
        .split('&')
        .filter(|s| !s.is_empty())
        .map(|pair| {
            if let Some(pos) = pair.find('=') {
                let key = decode_uri_component(&pair[..pos]);
                let value = decode_uri_component(&pair[pos + 1..]);
                (key, value)
            } else {
                (decode_uri_component(pair), String::new())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use http::Request;
    use swiftgate_model::SwiftErrorCode;

    use super::*;

    fn request(method: Method, uri: &str) -> Request<()> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(())
            .expect("valid request")
    }

    #[test]
    fn test_should_route_list_container() {
        let req = request(Method::GET, "/v1/AUTH_test/photos?limit=10&prefix=dir%2F");
        let ctx = SwiftRouter::new().resolve(&req).expect("should resolve");
        assert_eq!(ctx.account, "AUTH_test");
        assert_eq!(ctx.container, "photos");
        assert_eq!(ctx.operation, SwiftOperation::ListContainer);
        assert_eq!(
            ctx.query_params,
            vec![
                ("limit".to_owned(), "10".to_owned()),
                ("prefix".to_owned(), "dir/".to_owned()),
            ]
        );
    }

    #[test]
    fn test_should_route_methods_to_operations() {
        let router = SwiftRouter::new();
        let cases = [
            (Method::HEAD, SwiftOperation::HeadContainer),
            (Method::PUT, SwiftOperation::CreateContainer),
            (Method::POST, SwiftOperation::PostContainer),
            (Method::DELETE, SwiftOperation::DeleteContainer),
        ];
        for (method, expected) in cases {
            let req = request(method, "/v1/AUTH_test/photos");
            let ctx = router.resolve(&req).expect("should resolve");
            assert_eq!(ctx.operation, expected);
        }
    }

    #[test]
    fn test_should_decode_percent_encoded_container() {
        let req = request(Method::GET, "/v1/AUTH_test/my%20photos");
        let ctx = SwiftRouter::new().resolve(&req).expect("should resolve");
        assert_eq!(ctx.container, "my photos");
    }

    #[test]
    fn test_should_reject_non_v1_paths() {
        let req = request(Method::GET, "/v2/AUTH_test/photos");
        let err = SwiftRouter::new().resolve(&req).unwrap_err();
        assert_eq!(err.code, SwiftErrorCode::NotFound);
    }

    #[test]
    fn test_should_report_account_paths_not_implemented() {
        let req = request(Method::GET, "/v1/AUTH_test");
        let err = SwiftRouter::new().resolve(&req).unwrap_err();
        assert_eq!(err.code, SwiftErrorCode::NotImplemented);
    }

    #[test]
    fn test_should_report_object_paths_not_implemented() {
        let req = request(Method::GET, "/v1/AUTH_test/photos/a/b.jpg");
        let err = SwiftRouter::new().resolve(&req).unwrap_err();
        assert_eq!(err.code, SwiftErrorCode::NotImplemented);
    }

    #[test]
    fn test_should_reject_unsupported_method() {
        let req = request(Method::PATCH, "/v1/AUTH_test/photos");
        let err = SwiftRouter::new().resolve(&req).unwrap_err();
        assert_eq!(err.code, SwiftErrorCode::MethodNotAllowed);
    }

    #[test]
    fn test_should_parse_query_params() {
        let params = parse_query_params("marker=a&end_marker=z&format=json&delimiter=%2F");
        assert_eq!(params.len(), 4);
        assert_eq!(params[3], ("delimiter".to_owned(), "/".to_owned()));
    }

    #[test]
    fn test_should_handle_key_only_query_params() {
        let params = parse_query_params("path");
        assert_eq!(params, vec![("path".to_owned(), String::new())]);
    }
}
