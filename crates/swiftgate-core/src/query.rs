//! Listing parameter resolution.
//!
//! Normalizes the raw query parameters of a GET-container request into a
//! validated [`ListingQuery`], and projects that query onto the backend's
//! [`CrawlOptions`].

use swiftgate_model::input::ListContainerInput;

use crate::backend::CrawlOptions;
use crate::config::SwiftConfig;

/// A validated container listing query.
///
/// At most one of delimiter-driven grouping and path-driven grouping is
/// active at a time; `path == "/"` has already been folded into
/// `prefix = "/", delimiter = "/"` by [`resolve`](Self::resolve).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    /// Exclusive lower bound on returned names.
    pub marker: Option<String>,
    /// Exclusive upper bound on returned names.
    pub end_marker: Option<String>,
    /// Name prefix filter.
    pub prefix: Option<String>,
    /// Grouping delimiter.
    pub delimiter: Option<String>,
    /// Directory whose direct children are listed (`path` other than `/`).
    pub directory: Option<String>,
    /// Maximum number of entries returned.
    pub limit: usize,
    /// Flattened listing: true iff neither delimiter nor path was given.
    pub recursive: bool,
}

impl ListingQuery {
    /// Resolve raw listing parameters against the configured defaults.
    #[must_use]
    pub fn resolve(input: &ListContainerInput, config: &SwiftConfig) -> Self {
        let marker = non_empty(input.marker.as_deref());
        let end_marker = non_empty(input.end_marker.as_deref());
        let mut prefix = non_empty(input.prefix.as_deref());
        let mut delimiter = non_empty(input.delimiter.as_deref());
        let mut directory = None;

        let recursive = delimiter.is_none() && input.path.is_none();

        match input.path.as_deref() {
            Some("/") => {
                prefix = Some("/".to_owned());
                delimiter = Some("/".to_owned());
            }
            Some(path) if !path.is_empty() => directory = Some(path.to_owned()),
            _ => {}
        }

        Self {
            marker,
            end_marker,
            prefix,
            delimiter,
            directory,
            limit: input.limit.unwrap_or(config.container_listing_limit),
            recursive,
        }
    }

    /// Project this query onto the options for the first backend crawl call.
    #[must_use]
    pub fn crawl_options(&self) -> CrawlOptions {
        CrawlOptions {
            marker: self.marker.clone(),
            prefix: self.prefix.clone(),
            delimiter: self.delimiter.clone(),
            directory: self.directory.clone(),
            recursive: self.recursive,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(ToOwned::to_owned)
}
