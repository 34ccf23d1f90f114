//! Swift HTTP routing, request parsing, response serialization, and hyper
//! service.
//!
//! This crate provides the HTTP layer for an OpenStack-Swift-compatible
//! container gateway. It handles:
//!
//! - **Routing** ([`router`]): Maps `/v1/{account}/{container}` requests to
//!   Swift container operations by method; recognizes account-level and
//!   object-level paths so they can be answered explicitly.
//!
//! - **Request deserialization** ([`request`]): Converts raw HTTP request
//!   parts into typed Input structs from `swiftgate-model`.
//!
//! - **Response serialization** ([`response`]): Converts typed Output
//!   structs into HTTP responses with the protocol status codes, listing
//!   bodies, and derived headers.
//!
//! - **Dispatch** ([`dispatch`]): Routes identified operations to the
//!   business logic handler via the [`SwiftHandler`](dispatch::SwiftHandler)
//!   trait.
//!
//! - **Service** ([`service`]): The [`SwiftHttpService`](service::SwiftHttpService)
//!   implementing hyper's `Service` trait, tying routing, token checks,
//!   dispatch, and common headers together.
//!
//! - **Body** ([`body`]): The [`SwiftResponseBody`](body::SwiftResponseBody)
//!   type supporting buffered and empty response modes.
//!
//! # Architecture
//!
//! ```text
//! HTTP Request
//!   -> SwiftHttpService (hyper Service)
//!     -> Health check interception
//!     -> SwiftRouter (path + operation identification)
//!     -> Body collection
//!     -> Token presence check (optional)
//!     -> dispatch_operation (SwiftHandler trait)
//!     -> Common response headers (Server)
//!   <- HTTP Response
//! ```

// SwiftError is the pervasive domain error carried in Result<T, SwiftError>;
// boxing it in every Result would add indirection on the hot path.
#![allow(clippy::result_large_err)]

pub mod body;
pub mod dispatch;
pub mod request;
pub mod response;
pub mod router;
pub mod service;

// Re-export key types for convenience.
pub use body::SwiftResponseBody;
pub use dispatch::{NotImplementedHandler, SwiftHandler};
pub use request::FromSwiftRequest;
pub use response::IntoSwiftResponse;
pub use router::{RoutingContext, SwiftRouter};
pub use service::{SwiftHttpConfig, SwiftHttpService};
