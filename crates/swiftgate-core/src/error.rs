//! Swift-specific domain error types.
//!
//! Defines [`SwiftServiceError`], the error enum the core operations and the
//! backend contract share. Converting to the wire-level
//! [`SwiftError`](swiftgate_model::SwiftError) via
//! [`into_swift_error`](SwiftServiceError::into_swift_error) attaches the
//! correct protocol code and status.
//!
//! Backend faults are carried unclassified in [`SwiftServiceError::Backend`]
//! and surface as a generic server error; the single exception is
//! [`SwiftServiceError::ContainerNotFound`], which backends raise when a
//! container disappears mid-operation and which maps to the protocol
//! NotFound.

use swiftgate_model::{SwiftError, SwiftErrorCode};

/// Swift service error type.
#[derive(Debug, thiserror::Error)]
pub enum SwiftServiceError {
    /// The specified container does not exist.
    #[error("container does not exist: {container}")]
    ContainerNotFound {
        /// The container name that was not found.
        container: String,
    },

    /// The container is not empty and cannot be deleted.
    #[error("container is not empty: {container}")]
    ContainerNotEmpty {
        /// The container name that is not empty.
        container: String,
    },

    /// The container name exceeds the configured maximum length.
    #[error("container name too long: {length} > {max}")]
    ContainerNameTooLong {
        /// Actual name length.
        length: usize,
        /// Configured maximum.
        max: usize,
    },

    /// The explicit `format` query value is not a recognized alias.
    #[error("invalid listing format: {format}")]
    InvalidFormat {
        /// The unrecognized format value.
        format: String,
    },

    /// An unclassified backend fault.
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

impl SwiftServiceError {
    /// Convert this domain error into the wire-level [`SwiftError`].
    #[must_use]
    pub fn into_swift_error(self) -> SwiftError {
        match self {
            Self::ContainerNotFound { container } => SwiftError::not_found(container),
            Self::ContainerNotEmpty { container } => SwiftError::conflict(container),
            Self::ContainerNameTooLong { .. } => SwiftError::bad_request("container name too long"),
            Self::InvalidFormat { format } => {
                SwiftError::bad_request(format!("invalid format: {format}"))
            }
            Self::Backend(err) => {
                SwiftError::with_message(SwiftErrorCode::InternalError, err.to_string())
            }
        }
    }
}
