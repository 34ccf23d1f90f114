//! HTTP request to Swift Input struct deserialization.
//!
//! Provides the [`FromSwiftRequest`] trait and implementations for
//! converting raw HTTP request parts into the typed Input structs defined
//! in `swiftgate-model`. Field extraction follows the doc comments on the
//! input struct fields:
//!
//! - `HTTP header: X-...` - Extract from request headers
//! - `HTTP query: name` - Extract from query parameters
//! - `HTTP label (URI path)` - From the routed container name

use swiftgate_model::error::SwiftError;
use swiftgate_model::input::{
    CreateContainerInput, DeleteContainerInput, HeadContainerInput, ListContainerInput,
    PostContainerInput,
};

use crate::router::RoutingContext;

/// Trait for extracting a Swift input struct from HTTP request components.
pub trait FromSwiftRequest: Sized {
    /// Extract the input from HTTP request parts and the routing context.
    ///
    /// # Errors
    ///
    /// Returns a `SwiftError` when a field value cannot be parsed.
    fn from_swift_request(
        parts: &http::request::Parts,
        ctx: &RoutingContext,
    ) -> Result<Self, SwiftError>;
}

// ---------------------------------------------------------------------------
// Helper functions for extracting typed values from HTTP request parts
// ---------------------------------------------------------------------------

/// Extract a header value as a string.
pub fn header_str(parts: &http::request::Parts, name: &str) -> Option<String> {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToOwned::to_owned)
}

/// Extract a header value and parse it as a boolean.
///
/// Recognizes "true" (case-insensitive) as `true`, everything else as `false`.
pub fn header_bool(parts: &http::request::Parts, name: &str) -> bool {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|s| s.eq_ignore_ascii_case("true"))
}

/// Get a query parameter value by name.
#[must_use]
pub fn query_param(params: &[(String, String)], name: &str) -> Option<String> {
    params
        .iter()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.clone())
}

/// Get a query parameter and parse it, reporting a BadRequest on failure.
fn query_param_usize(
    params: &[(String, String)],
    name: &str,
) -> Result<Option<usize>, SwiftError> {
    match query_param(params, name) {
        None => Ok(None),
        Some(value) => value.parse::<usize>().map(Some).map_err(|_| {
            SwiftError::bad_request(format!("invalid {name} value: {value}"))
        }),
    }
}

// ---------------------------------------------------------------------------
// Implementations for all Input types
// ---------------------------------------------------------------------------

impl FromSwiftRequest for ListContainerInput {
    fn from_swift_request(
        parts: &http::request::Parts,
        ctx: &RoutingContext,
    ) -> Result<Self, SwiftError> {
        let params = &ctx.query_params;
        Ok(Self {
            container: ctx.container.clone(),
            auth_token: header_str(parts, "x-auth-token"),
            limit: query_param_usize(params, "limit")?,
            marker: query_param(params, "marker"),
            end_marker: query_param(params, "end_marker"),
            format: query_param(params, "format"),
            prefix: query_param(params, "prefix"),
            delimiter: query_param(params, "delimiter"),
            path: query_param(params, "path"),
            newest: header_bool(parts, "x-newest"),
            accept: header_str(parts, "accept"),
        })
    }
}

impl FromSwiftRequest for HeadContainerInput {
    fn from_swift_request(
        parts: &http::request::Parts,
        ctx: &RoutingContext,
    ) -> Result<Self, SwiftError> {
        Ok(Self {
            container: ctx.container.clone(),
            auth_token: header_str(parts, "x-auth-token"),
            newest: header_bool(parts, "x-newest"),
        })
    }
}

impl FromSwiftRequest for CreateContainerInput {
    fn from_swift_request(
        parts: &http::request::Parts,
        ctx: &RoutingContext,
    ) -> Result<Self, SwiftError> {
        Ok(Self {
            container: ctx.container.clone(),
            auth_token: header_str(parts, "x-auth-token"),
            read_acl: header_str(parts, "x-container-read"),
            write_acl: header_str(parts, "x-container-write"),
            sync_to: header_str(parts, "x-container-sync-to"),
            sync_key: header_str(parts, "x-container-sync-key"),
            versions_location: header_str(parts, "x-versions-location"),
            content_type: header_str(parts, "content-type"),
            detect_content_type: header_bool(parts, "x-detect-content-type"),
            if_none_match: header_str(parts, "if-none-match"),
        })
    }
}

impl FromSwiftRequest for PostContainerInput {
    fn from_swift_request(
        parts: &http::request::Parts,
        ctx: &RoutingContext,
    ) -> Result<Self, SwiftError> {
        Ok(Self {
            container: ctx.container.clone(),
            auth_token: header_str(parts, "x-auth-token"),
            read_acl: header_str(parts, "x-container-read"),
            write_acl: header_str(parts, "x-container-write"),
            sync_to: header_str(parts, "x-container-sync-to"),
            sync_key: header_str(parts, "x-container-sync-key"),
            versions_location: header_str(parts, "x-versions-location"),
            content_type: header_str(parts, "content-type"),
            detect_content_type: header_bool(parts, "x-detect-content-type"),
        })
    }
}

impl FromSwiftRequest for DeleteContainerInput {
    fn from_swift_request(
        parts: &http::request::Parts,
        ctx: &RoutingContext,
    ) -> Result<Self, SwiftError> {
        Ok(Self {
            container: ctx.container.clone(),
            auth_token: header_str(parts, "x-auth-token"),
        })
    }
}
