//! The crawl engine.
//!
//! [`crawl`] turns a paginated backend into one logical, lazily-consumed,
//! ordered sequence of object metadata: each poll that exhausts the buffered
//! page triggers the next backend fetch, with the continuation marker
//! advanced to the name the previous page ended on. Consumers that stop
//! early (a satisfied limit) stop further fetches.
//!
//! The engine performs no re-ordering, no deduplication, and no caching —
//! it trusts backend ordering. A backend fault aborts the sequence
//! immediately; the sequence is restartable only by calling [`crawl`] again
//! with the same options.

use std::sync::Arc;

use futures::stream::{self, Stream, TryStreamExt};
use tracing::trace;

use crate::backend::{BlobStoreBackend, CrawlOptions, StorageObjectMetadata};
use crate::error::SwiftServiceError;

struct CrawlState {
    backend: Arc<dyn BlobStoreBackend>,
    container: String,
    options: CrawlOptions,
    exhausted: bool,
}

/// Stream all object metadata for `container` matching `options`,
/// transparently issuing as many backend page requests as needed.
pub fn crawl(
    backend: Arc<dyn BlobStoreBackend>,
    container: String,
    options: CrawlOptions,
) -> impl Stream<Item = Result<StorageObjectMetadata, SwiftServiceError>> {
    let state = CrawlState {
        backend,
        container,
        options,
        exhausted: false,
    };

    stream::try_unfold(state, |mut state| async move {
        if state.exhausted {
            return Ok::<_, SwiftServiceError>(None);
        }

        let page = state
            .backend
            .list_page(&state.container, &state.options)
            .await?;
        trace!(
            container = %state.container,
            entries = page.entries.len(),
            next_marker = ?page.next_marker,
            "fetched crawl page"
        );

        match page.next_marker.clone() {
            Some(marker) => state.options.marker = Some(marker),
            None => state.exhausted = true,
        }

        Ok(Some((page, state)))
    })
    .map_ok(|page| stream::iter(page.entries.into_iter().map(Ok::<_, SwiftServiceError>)))
    .try_flatten()
}
