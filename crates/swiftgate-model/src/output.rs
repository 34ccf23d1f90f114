//! Typed outputs for Swift container operations.
//!
//! Outputs carry only data; status codes, headers, and body encodings are
//! decided by the HTTP response layer.

use crate::types::{ContainerListing, ListingFormat};

/// Sentinel value emitted for headers whose authoritative value this slice
/// does not compute (`X-Timestamp`, `X-Trans-Id`, and the object count when
/// the backend cannot provide one).
pub const PLACEHOLDER_HEADER_VALUE: i64 = -1;

/// Output of GET container.
#[derive(Debug, Clone)]
pub struct ListContainerOutput {
    /// The assembled listing, in backend order.
    pub listing: ContainerListing,
    /// The negotiated body encoding.
    pub format: ListingFormat,
    /// Number of entries in the final (filtered, truncated) listing.
    pub object_count: u64,
    /// Sum of entry sizes in the final listing; an approximation of the
    /// container total since entries are truncated by the limit.
    pub bytes_used: u64,
}

/// Output of HEAD container.
#[derive(Debug, Clone)]
pub struct HeadContainerOutput {
    /// Object count reported by the backend, or the `-1` sentinel when the
    /// backend kind cannot count.
    pub object_count: i64,
    /// Bytes-used placeholder; this slice has no authoritative source.
    pub bytes_used: u64,
    /// The `X-Versions-Location` value; empty in this slice.
    pub versions_location: String,
}

/// Output of PUT container.
#[derive(Debug, Clone)]
pub struct CreateContainerOutput {
    /// Whether the container was created by this request (`Created`) as
    /// opposed to already existing (`Accepted`).
    pub created: bool,
}

/// Output of POST container.
#[derive(Debug, Clone, Default)]
pub struct PostContainerOutput {}

/// Output of DELETE container.
#[derive(Debug, Clone, Default)]
pub struct DeleteContainerOutput {}
