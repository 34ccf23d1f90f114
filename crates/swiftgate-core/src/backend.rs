//! The blob-store backend contract.
//!
//! The core never talks to concrete storage; it consumes
//! [`BlobStoreBackend`], an injected capability interface covering exactly
//! the operations the container surface needs. Alternative backends are
//! substitutable without touching the listing engine or the operation
//! handlers.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::SwiftServiceError;

/// Whether a listed item is a stored blob or a synthetic grouping entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageObjectKind {
    /// A real stored object.
    Blob,
    /// A pseudo-directory: a common name prefix synthesized by
    /// delimiter-based grouping, not a stored object.
    PseudoDirectory,
}

/// Raw object metadata as the backend reports it.
///
/// Every field except the name is optional; the entry mapper applies the
/// protocol defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageObjectMetadata {
    /// Object name, unique within the container.
    pub name: String,
    /// Stored content type, if any.
    pub content_type: Option<String>,
    /// Object size in bytes, if known.
    pub size: Option<u64>,
    /// Backend etag, possibly surrounded by quote characters.
    pub etag: Option<String>,
    /// Last-modified timestamp, if known.
    pub last_modified: Option<DateTime<Utc>>,
    /// Blob or pseudo-directory.
    pub kind: StorageObjectKind,
}

/// Options for one backend listing call.
///
/// `marker` is the continuation cursor: the crawl engine advances it between
/// page fetches. At most one of `delimiter`-driven grouping and
/// `directory`-scoped listing is active at a time.
#[derive(Debug, Clone, Default)]
pub struct CrawlOptions {
    /// Exclusive lower bound: only names after this one are returned.
    pub marker: Option<String>,
    /// Restrict results to names with this prefix.
    pub prefix: Option<String>,
    /// Group names by their first occurrence of this delimiter after the
    /// prefix, synthesizing pseudo-directory entries.
    pub delimiter: Option<String>,
    /// List only the direct children of this directory.
    pub directory: Option<String>,
    /// Flattened listing: no grouping, no pseudo-directories.
    pub recursive: bool,
}

/// One page of a backend listing.
#[derive(Debug, Clone, Default)]
pub struct CrawlPage {
    /// Entries in lexicographic ascending name order.
    pub entries: Vec<StorageObjectMetadata>,
    /// The name to continue after, or `None` when the listing is exhausted.
    pub next_marker: Option<String>,
}

/// Capability interface for a provider-agnostic blob store.
///
/// All calls are blocking I/O from the core's perspective: the core issues
/// them sequentially and never retries. Faults propagate unmodified; a
/// [`SwiftServiceError::ContainerNotFound`] raised here reaches the client
/// as NotFound, anything else as a generic server error.
#[async_trait]
pub trait BlobStoreBackend: Send + Sync + 'static {
    /// Stable identifier of this backend implementation, used for logging.
    fn provider_id(&self) -> &'static str;

    /// Whether listed names are stored percent-encoded and must be decoded
    /// before they are surfaced to clients. A documented quirk of the
    /// transient backend, not a general rule.
    fn decodes_names(&self) -> bool {
        false
    }

    /// Whether the named container exists.
    async fn container_exists(&self, container: &str) -> Result<bool, SwiftServiceError>;

    /// Create the named container. Creating an existing container is a no-op.
    async fn create_container(&self, container: &str) -> Result<(), SwiftServiceError>;

    /// Delete the named container iff it holds no objects.
    ///
    /// Returns `true` when the container was deleted, `false` when it was
    /// left in place because it is not empty.
    async fn delete_container_if_empty(&self, container: &str) -> Result<bool, SwiftServiceError>;

    /// Count the blobs in the named container.
    ///
    /// Only defined for backend kinds that can count cheaply; others return
    /// `Ok(None)` and the object-count header falls back to its sentinel.
    async fn count_blobs(&self, container: &str) -> Result<Option<u64>, SwiftServiceError>;

    /// Fetch one page of ordered object metadata.
    ///
    /// The page honors `options.marker` as an exclusive lower bound and
    /// reports a `next_marker` iff more entries may follow. Backends must
    /// not be assumed to return the entire container in one call.
    async fn list_page(
        &self,
        container: &str,
        options: &CrawlOptions,
    ) -> Result<CrawlPage, SwiftServiceError>;
}

impl StorageObjectMetadata {
    /// A pseudo-directory entry carrying only a name.
    #[must_use]
    pub fn pseudo_directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content_type: None,
            size: None,
            etag: None,
            last_modified: None,
            kind: StorageObjectKind::PseudoDirectory,
        }
    }
}
