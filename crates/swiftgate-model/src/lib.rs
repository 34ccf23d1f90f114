//! Swift protocol model types for swiftgate.
//!
//! This crate defines the typed surface of the OpenStack Swift container API
//! as swiftgate implements it:
//!
//! - **Inputs** ([`input`]): one struct per operation, populated from HTTP
//!   query parameters, headers, and the routed container name.
//! - **Outputs** ([`output`]): one struct per operation, carrying the data
//!   the HTTP layer renders into status codes, headers, and bodies.
//! - **Listing types** ([`types`]): [`ObjectEntry`](types::ObjectEntry) and
//!   [`ContainerListing`](types::ContainerListing), the protocol-facing view
//!   of a container listing, plus the negotiated [`ListingFormat`](types::ListingFormat).
//! - **Errors** ([`error`]): [`SwiftError`](error::SwiftError) and
//!   [`SwiftErrorCode`](error::SwiftErrorCode), the wire-level error model.
//! - **Operations** ([`operations`]): the [`SwiftOperation`](operations::SwiftOperation)
//!   enum produced by request routing.
//!
//! All values are per-request and immutable once constructed; nothing in
//! this crate holds state across requests.

pub mod error;
pub mod input;
pub mod operations;
pub mod output;
pub mod types;

pub use error::{SwiftError, SwiftErrorCode};
pub use operations::SwiftOperation;
pub use types::{ContainerListing, ListingFormat, ObjectEntry};
