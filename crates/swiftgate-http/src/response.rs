//! Swift Output struct to HTTP response serialization.
//!
//! Provides the [`IntoSwiftResponse`] trait and implementations converting
//! the typed Output structs from `swiftgate-model` into HTTP responses with
//! the protocol status codes, derived headers, and negotiated bodies.
//!
//! Response categories:
//! - **Header-only**: PUT/POST/DELETE/HEAD container responses.
//! - **Listing body**: GET container renders plain text, JSON, or XML per
//!   the negotiated format.

use swiftgate_model::error::SwiftError;
use swiftgate_model::output::{
    CreateContainerOutput, DeleteContainerOutput, HeadContainerOutput, ListContainerOutput,
    PostContainerOutput, PLACEHOLDER_HEADER_VALUE,
};
use swiftgate_model::{ContainerListing, ListingFormat, SwiftErrorCode};

use crate::body::SwiftResponseBody;

/// Trait for converting a Swift output struct into an HTTP response.
pub trait IntoSwiftResponse {
    /// Convert this output into an HTTP response.
    ///
    /// # Errors
    ///
    /// Returns a `SwiftError` if the response cannot be constructed.
    fn into_swift_response(self) -> Result<http::Response<SwiftResponseBody>, SwiftError>;
}

// ---------------------------------------------------------------------------
// Helper functions for building responses
// ---------------------------------------------------------------------------

/// Add the sentinel timestamp and transaction-id headers plus
/// `Accept-Ranges`; placeholder values in this slice, not derived from
/// backend state.
fn with_placeholder_headers(builder: http::response::Builder) -> http::response::Builder {
    builder
        .header("X-Timestamp", PLACEHOLDER_HEADER_VALUE)
        .header("X-Trans-Id", PLACEHOLDER_HEADER_VALUE)
        .header("Accept-Ranges", "bytes")
}

/// Build a response from a builder, converting build errors to `SwiftError`.
fn build_response(
    builder: http::response::Builder,
    body: SwiftResponseBody,
) -> Result<http::Response<SwiftResponseBody>, SwiftError> {
    builder
        .body(body)
        .map_err(|e| SwiftError::internal_error(format!("failed to build HTTP response: {e}")))
}

/// Render a listing body per the negotiated format.
fn render_listing(
    listing: &ContainerListing,
    format: ListingFormat,
) -> Result<SwiftResponseBody, SwiftError> {
    match format {
        ListingFormat::Plain => {
            let mut text = String::new();
            for entry in &listing.object {
                text.push_str(&entry.name);
                text.push('\n');
            }
            Ok(SwiftResponseBody::from_string(text))
        }
        ListingFormat::Json => {
            let json = serde_json::to_vec(listing).map_err(|e| {
                SwiftError::internal_error(format!("failed to serialize listing JSON: {e}"))
            })?;
            Ok(SwiftResponseBody::from_bytes(json))
        }
        ListingFormat::Xml => {
            let xml = swiftgate_xml::to_xml(listing).map_err(|e| {
                SwiftError::internal_error(format!("failed to serialize listing XML: {e}"))
            })?;
            Ok(SwiftResponseBody::from_bytes(xml))
        }
    }
}

// ---------------------------------------------------------------------------
// Implementations
// ---------------------------------------------------------------------------

impl IntoSwiftResponse for ListContainerOutput {
    fn into_swift_response(self) -> Result<http::Response<SwiftResponseBody>, SwiftError> {
        let body = render_listing(&self.listing, self.format)?;

        let builder = http::Response::builder()
            .status(http::StatusCode::OK)
            .header("Content-Type", self.format.media_type())
            .header("X-Container-Object-Count", self.object_count)
            .header("X-Container-Bytes-Used", self.bytes_used);
        build_response(with_placeholder_headers(builder), body)
    }
}

impl IntoSwiftResponse for HeadContainerOutput {
    fn into_swift_response(self) -> Result<http::Response<SwiftResponseBody>, SwiftError> {
        let builder = http::Response::builder()
            .status(http::StatusCode::NO_CONTENT)
            .header("X-Container-Object-Count", self.object_count)
            .header("X-Container-Bytes-Used", self.bytes_used)
            .header("X-Versions-Location", self.versions_location);
        build_response(with_placeholder_headers(builder), SwiftResponseBody::empty())
    }
}

impl IntoSwiftResponse for CreateContainerOutput {
    fn into_swift_response(self) -> Result<http::Response<SwiftResponseBody>, SwiftError> {
        let status = if self.created {
            http::StatusCode::CREATED
        } else {
            http::StatusCode::ACCEPTED
        };
        build_response(
            http::Response::builder().status(status),
            SwiftResponseBody::empty(),
        )
    }
}

impl IntoSwiftResponse for PostContainerOutput {
    fn into_swift_response(self) -> Result<http::Response<SwiftResponseBody>, SwiftError> {
        build_response(
            http::Response::builder().status(http::StatusCode::NO_CONTENT),
            SwiftResponseBody::empty(),
        )
    }
}

impl IntoSwiftResponse for DeleteContainerOutput {
    fn into_swift_response(self) -> Result<http::Response<SwiftResponseBody>, SwiftError> {
        build_response(
            http::Response::builder().status(http::StatusCode::NO_CONTENT),
            SwiftResponseBody::empty(),
        )
    }
}

// ---------------------------------------------------------------------------
// Error responses
// ---------------------------------------------------------------------------

/// Convert a `SwiftError` into an HTTP error response.
///
/// Conflict responses carry the HTML body Swift clients expect; other
/// errors carry the plain-text message.
pub fn error_to_response(err: &SwiftError) -> http::Response<SwiftResponseBody> {
    let (content_type, body) = if err.code == SwiftErrorCode::Conflict {
        (
            "text/html; charset=utf-8",
            "<html><h1>Conflict</h1><p>There was a conflict when trying to complete your request.</p></html>"
                .to_owned(),
        )
    } else {
        ("text/plain; charset=utf-8", err.message.clone())
    };

    http::Response::builder()
        .status(err.status_code)
        .header("Content-Type", content_type)
        .body(SwiftResponseBody::from_string(body))
        .unwrap_or_else(|_| {
            let mut fallback = http::Response::new(SwiftResponseBody::empty());
            *fallback.status_mut() = http::StatusCode::INTERNAL_SERVER_ERROR;
            fallback
        })
}
