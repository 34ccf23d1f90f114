//! Swift container service implementation for swiftgate.
//!
//! This crate is the business-logic layer between the HTTP surface
//! (`swiftgate-http`) and a pluggable blob-store backend:
//!
//! - **Backend contract** ([`backend`]): the [`BlobStoreBackend`](backend::BlobStoreBackend)
//!   capability trait the core consumes — existence checks, creation,
//!   conditional deletion, optional blob counting, and paginated listing.
//! - **In-memory backend** ([`memory`]): the transient backend used by the
//!   server binary and the test suite.
//! - **Parameter resolution** ([`query`]): raw listing parameters into a
//!   validated [`ListingQuery`](query::ListingQuery).
//! - **Crawl engine** ([`crawl`]): one lazy, ordered metadata stream per
//!   listing request, transparently spanning backend pages.
//! - **Entry mapping** ([`entry`]): backend metadata into protocol entries,
//!   applying content-type inference and field defaults.
//! - **Format negotiation** ([`format`]): explicit `format` parameter over
//!   `Accept` header over the plain-text default.
//! - **Operations** ([`ops`], [`provider`]): the [`SwiftGate`](provider::SwiftGate)
//!   provider with one handler per container operation.
//!
//! Every request is handled statelessly: the core holds no locks and shares
//! no mutable state across requests. Backend page fetches within one listing
//! are sequential, and no snapshot isolation is assumed — a listing is
//! best-effort if the container mutates between pages.

pub mod backend;
pub mod config;
pub mod crawl;
pub mod entry;
pub mod error;
pub mod format;
pub mod memory;
pub mod ops;
pub mod provider;
pub mod query;

pub use backend::{BlobStoreBackend, CrawlOptions, CrawlPage, StorageObjectKind, StorageObjectMetadata};
pub use config::SwiftConfig;
pub use error::SwiftServiceError;
pub use memory::InMemoryBackend;
pub use provider::SwiftGate;
pub use query::ListingQuery;
