//! In-memory blob-store backend.
//!
//! The transient backend used by the server binary when no durable store is
//! configured, and by the test suite. Containers live in a [`DashMap`]; each
//! container keeps its blobs in a name-ordered [`BTreeMap`] behind a
//! [`parking_lot::RwLock`], so listings come back in lexicographic order for
//! free.
//!
//! Two quirks intentionally mirror the transient stores this backend stands
//! in for:
//!
//! - Blob names are stored percent-encoded, so [`decodes_names`] reports
//!   `true` and the entry mapper decodes listed names before they reach the
//!   client.
//! - Listing is genuinely paginated: at most [`page_size`](InMemoryBackend::with_page_size)
//!   entries per [`list_page`] call, with a continuation marker, so the
//!   crawl engine's page loop is exercised even against memory.
//!
//! [`decodes_names`]: BlobStoreBackend::decodes_names
//! [`list_page`]: BlobStoreBackend::list_page

use std::collections::{BTreeMap, HashSet};
use std::ops::Bound;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use md5::{Digest, Md5};
use parking_lot::RwLock;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use tracing::debug;

use crate::backend::{
    BlobStoreBackend, CrawlOptions, CrawlPage, StorageObjectKind, StorageObjectMetadata,
};
use crate::error::SwiftServiceError;

/// Characters percent-encoded in stored blob names.
const STORED_NAME_ENCODE_SET: &AsciiSet = &CONTROLS.add(b' ').add(b'%');

/// Default number of entries returned per listing page.
const DEFAULT_PAGE_SIZE: usize = 1000;

/// One stored blob's metadata. Body bytes are not retained; the container
/// surface only ever needs metadata.
#[derive(Debug, Clone)]
struct BlobRecord {
    content_type: Option<String>,
    size: u64,
    etag: String,
    last_modified: DateTime<Utc>,
}

/// Per-container state: blobs ordered by stored name.
#[derive(Debug, Default)]
struct ContainerState {
    objects: RwLock<BTreeMap<String, BlobRecord>>,
}

/// In-memory, paginated blob-store backend.
#[derive(Debug)]
pub struct InMemoryBackend {
    containers: DashMap<String, Arc<ContainerState>>,
    page_size: usize,
}

impl Default for InMemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryBackend {
    /// Create a backend with the default page size.
    #[must_use]
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    /// Create a backend returning at most `page_size` entries per listing
    /// page. Small page sizes are useful to exercise crawl continuation.
    #[must_use]
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            containers: DashMap::new(),
            page_size: page_size.max(1),
        }
    }

    /// Store a blob's metadata, computing an MD5 etag from `data`.
    ///
    /// The name is stored percent-encoded, matching the transient stores
    /// this backend emulates.
    pub fn put_blob(
        &self,
        container: &str,
        name: &str,
        data: &[u8],
        content_type: Option<&str>,
    ) -> Result<(), SwiftServiceError> {
        let state = self.container(container)?;
        let stored_name = utf8_percent_encode(name, STORED_NAME_ENCODE_SET).to_string();
        let record = BlobRecord {
            content_type: content_type.map(ToOwned::to_owned),
            size: data.len() as u64,
            etag: format!("\"{}\"", hex::encode(Md5::digest(data))),
            last_modified: Utc::now(),
        };
        state.objects.write().insert(stored_name, record);
        Ok(())
    }

    /// Remove a blob by its client-visible name.
    pub fn delete_blob(&self, container: &str, name: &str) -> Result<bool, SwiftServiceError> {
        let state = self.container(container)?;
        let stored_name = utf8_percent_encode(name, STORED_NAME_ENCODE_SET).to_string();
        Ok(state.objects.write().remove(&stored_name).is_some())
    }

    fn container(&self, name: &str) -> Result<Arc<ContainerState>, SwiftServiceError> {
        self.containers
            .get(name)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| SwiftServiceError::ContainerNotFound {
                container: name.to_owned(),
            })
    }
}

/// Resolve the prefix and delimiter a listing call actually filters with.
///
/// Directory-scoped listings are prefix+delimiter listings over the
/// directory path; explicit options pass through, with the delimiter
/// suppressed for recursive listings.
fn effective_filters(options: &CrawlOptions) -> (String, Option<String>) {
    if let Some(dir) = &options.directory {
        let mut prefix = dir.clone();
        if !prefix.ends_with('/') {
            prefix.push('/');
        }
        return (prefix, Some("/".to_owned()));
    }

    let prefix = options.prefix.clone().unwrap_or_default();
    let delimiter = if options.recursive {
        None
    } else {
        options.delimiter.clone().filter(|d| !d.is_empty())
    };
    (prefix, delimiter)
}

#[async_trait]
impl BlobStoreBackend for InMemoryBackend {
    fn provider_id(&self) -> &'static str {
        "transient"
    }

    fn decodes_names(&self) -> bool {
        true
    }

    async fn container_exists(&self, container: &str) -> Result<bool, SwiftServiceError> {
        Ok(self.containers.contains_key(container))
    }

    async fn create_container(&self, container: &str) -> Result<(), SwiftServiceError> {
        self.containers
            .entry(container.to_owned())
            .or_insert_with(Arc::default);
        debug!(container, "container ensured");
        Ok(())
    }

    async fn delete_container_if_empty(&self, container: &str) -> Result<bool, SwiftServiceError> {
        if !self.containers.contains_key(container) {
            return Err(SwiftServiceError::ContainerNotFound {
                container: container.to_owned(),
            });
        }
        let removed = self
            .containers
            .remove_if(container, |_, state| state.objects.read().is_empty());
        Ok(removed.is_some())
    }

    async fn count_blobs(&self, container: &str) -> Result<Option<u64>, SwiftServiceError> {
        let state = self.container(container)?;
        let count = state.objects.read().len() as u64;
        Ok(Some(count))
    }

    async fn list_page(
        &self,
        container: &str,
        options: &CrawlOptions,
    ) -> Result<CrawlPage, SwiftServiceError> {
        let state = self.container(container)?;
        let objects = state.objects.read();

        let (prefix, delimiter) = effective_filters(options);
        let marker = options.marker.as_deref().unwrap_or("");
        let lower = options.marker.as_deref().map_or(Bound::Unbounded, Bound::Excluded);

        let mut entries: Vec<StorageObjectMetadata> = Vec::new();
        let mut seen_prefixes: HashSet<String> = HashSet::new();
        let mut truncated = false;

        for (name, record) in objects.range::<str, _>((lower, Bound::Unbounded)) {
            if !prefix.is_empty() && !name.starts_with(prefix.as_str()) {
                if name.as_str() > prefix.as_str() {
                    // Names are sorted: nothing later can match the prefix.
                    break;
                }
                continue;
            }

            let entry = if let Some(delim) = &delimiter {
                let rest = &name[prefix.len()..];
                if let Some(pos) = rest.find(delim.as_str()) {
                    let group = format!("{prefix}{}{delim}", &rest[..pos]);
                    // A group emitted on an earlier page sorts at or before
                    // the continuation marker; skip its remaining members.
                    if group.as_str() <= marker {
                        continue;
                    }
                    if !seen_prefixes.insert(group.clone()) {
                        continue;
                    }
                    StorageObjectMetadata::pseudo_directory(group)
                } else {
                    blob_metadata(name, record)
                }
            } else {
                blob_metadata(name, record)
            };

            entries.push(entry);
            if entries.len() >= self.page_size {
                truncated = true;
                break;
            }
        }

        let next_marker = if truncated {
            entries.last().map(|e| e.name.clone())
        } else {
            None
        };

        Ok(CrawlPage {
            entries,
            next_marker,
        })
    }
}

fn blob_metadata(name: &str, record: &BlobRecord) -> StorageObjectMetadata {
    StorageObjectMetadata {
        name: name.to_owned(),
        content_type: record.content_type.clone(),
        size: Some(record.size),
        etag: Some(record.etag.clone()),
        last_modified: Some(record.last_modified),
        kind: StorageObjectKind::Blob,
    }
}
