//! Container listing handler.
//!
//! Ties the listing pipeline together: existence check, parameter
//! resolution, crawl, end-marker filtering, limit enforcement, entry
//! mapping, format negotiation, and the derived count/bytes aggregates.

use futures::future;
use futures::stream::{StreamExt, TryStreamExt};
use swiftgate_model::input::ListContainerInput;
use swiftgate_model::output::ListContainerOutput;
use swiftgate_model::{ContainerListing, ObjectEntry};
use tracing::debug;

use crate::crawl::crawl;
use crate::entry::{map_entry, within_end_marker};
use crate::error::SwiftServiceError;
use crate::format::negotiate;
use crate::provider::SwiftGate;
use crate::query::ListingQuery;

impl SwiftGate {
    /// List a container (GET).
    ///
    /// The final entry set is materialized before the count and bytes-used
    /// aggregates are computed; it is already truncated by the limit, so
    /// bytes-used approximates the container total rather than stating it.
    pub async fn handle_list_container(
        &self,
        input: ListContainerInput,
    ) -> Result<ListContainerOutput, SwiftServiceError> {
        let backend = self.backend(input.auth_token.as_deref());

        if !backend.container_exists(&input.container).await? {
            return Err(SwiftServiceError::ContainerNotFound {
                container: input.container,
            });
        }

        let query = ListingQuery::resolve(&input, &self.config);
        debug!(
            container = %input.container,
            marker = ?query.marker,
            prefix = ?query.prefix,
            delimiter = ?query.delimiter,
            limit = query.limit,
            recursive = query.recursive,
            newest = input.newest,
            "list_container resolved"
        );

        let decode_names = backend.decodes_names();
        let end_marker = query.end_marker.clone();
        let entries: Vec<ObjectEntry> = crawl(
            backend,
            input.container.clone(),
            query.crawl_options(),
        )
        .try_filter(move |meta| {
            future::ready(within_end_marker(&meta.name, end_marker.as_deref()))
        })
        .take(query.limit)
        .map_ok(|meta| map_entry(meta, decode_names))
        .try_collect()
        .await?;

        let format = negotiate(input.format.as_deref(), input.accept.as_deref())?;

        let listing = ContainerListing {
            name: input.container.clone(),
            object: entries,
        };
        let object_count = listing.object.len() as u64;
        let bytes_used = listing.bytes_used();

        debug!(
            container = %input.container,
            count = object_count,
            bytes_used,
            ?format,
            "list_container completed"
        );

        Ok(ListContainerOutput {
            listing,
            format,
            object_count,
            bytes_used,
        })
    }
}
