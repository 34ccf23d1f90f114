//! Wire-level error model for the Swift container API.

use std::fmt;

/// Well-known Swift error conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum SwiftErrorCode {
    /// The requested container (or resource) does not exist.
    NotFound,
    /// The request conflicts with the current state of the resource
    /// (e.g. deleting a non-empty container).
    Conflict,
    /// The request is malformed: container name too long, unrecognized
    /// `format` value, unparseable parameter.
    BadRequest,
    /// The request lacks a valid auth token.
    Unauthorized,
    /// The HTTP method is not supported on this resource.
    MethodNotAllowed,
    /// The operation is recognized but not implemented in this slice.
    NotImplemented,
    /// An unclassified server-side failure, including backend faults.
    #[default]
    InternalError,
}

impl SwiftErrorCode {
    /// Returns the error code as a string.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "NotFound",
            Self::Conflict => "Conflict",
            Self::BadRequest => "BadRequest",
            Self::Unauthorized => "Unauthorized",
            Self::MethodNotAllowed => "MethodNotAllowed",
            Self::NotImplemented => "NotImplemented",
            Self::InternalError => "InternalError",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn status_code(self) -> http::StatusCode {
        match self {
            Self::NotFound => http::StatusCode::NOT_FOUND,
            Self::Conflict => http::StatusCode::CONFLICT,
            Self::BadRequest => http::StatusCode::BAD_REQUEST,
            Self::Unauthorized => http::StatusCode::UNAUTHORIZED,
            Self::MethodNotAllowed => http::StatusCode::METHOD_NOT_ALLOWED,
            Self::NotImplemented => http::StatusCode::NOT_IMPLEMENTED,
            Self::InternalError => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the default message for this error.
    #[must_use]
    pub fn default_message(self) -> &'static str {
        match self {
            Self::NotFound => "The resource could not be found",
            Self::Conflict => "There was a conflict when trying to complete your request",
            Self::BadRequest => "Bad Request",
            Self::Unauthorized => "This server could not verify your credentials",
            Self::MethodNotAllowed => "The method is not allowed for this resource",
            Self::NotImplemented => "The functionality is not implemented",
            Self::InternalError => "Internal server error",
        }
    }
}

impl fmt::Display for SwiftErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A Swift error response.
#[derive(Debug)]
pub struct SwiftError {
    /// The error code.
    pub code: SwiftErrorCode,
    /// A human-readable error message.
    pub message: String,
    /// The resource (container name) that caused the error, if known.
    pub resource: Option<String>,
    /// The HTTP status code.
    pub status_code: http::StatusCode,
    /// The underlying source error, if any.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for SwiftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SwiftError({}): {}", self.code, self.message)
    }
}

impl std::error::Error for SwiftError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl SwiftError {
    /// Create a new error from a code, with the code's default message.
    #[must_use]
    pub fn new(code: SwiftErrorCode) -> Self {
        Self {
            code,
            message: code.default_message().to_owned(),
            resource: None,
            status_code: code.status_code(),
            source: None,
        }
    }

    /// Create a new error with a custom message.
    #[must_use]
    pub fn with_message(code: SwiftErrorCode, message: impl Into<String>) -> Self {
        Self {
            status_code: code.status_code(),
            message: message.into(),
            code,
            resource: None,
            source: None,
        }
    }

    /// Set the resource that caused this error.
    #[must_use]
    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    /// Set the source error.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Create a NotFound error for a container.
    #[must_use]
    pub fn not_found(container: impl Into<String>) -> Self {
        Self::new(SwiftErrorCode::NotFound).with_resource(container)
    }

    /// Create a Conflict error for a container.
    #[must_use]
    pub fn conflict(container: impl Into<String>) -> Self {
        Self::new(SwiftErrorCode::Conflict).with_resource(container)
    }

    /// Create a BadRequest error with a message.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::with_message(SwiftErrorCode::BadRequest, message)
    }

    /// Create a MethodNotAllowed error for an HTTP method.
    #[must_use]
    pub fn method_not_allowed(method: &str) -> Self {
        Self::with_message(
            SwiftErrorCode::MethodNotAllowed,
            format!("Method not allowed: {method}"),
        )
    }

    /// Create a NotImplemented error for a named operation.
    #[must_use]
    pub fn not_implemented(operation: &str) -> Self {
        Self::with_message(
            SwiftErrorCode::NotImplemented,
            format!("Operation not implemented: {operation}"),
        )
    }

    /// Create an InternalError with a message.
    #[must_use]
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::with_message(SwiftErrorCode::InternalError, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_map_codes_to_status() {
        assert_eq!(
            SwiftErrorCode::NotFound.status_code(),
            http::StatusCode::NOT_FOUND
        );
        assert_eq!(
            SwiftErrorCode::Conflict.status_code(),
            http::StatusCode::CONFLICT
        );
        assert_eq!(
            SwiftErrorCode::BadRequest.status_code(),
            http::StatusCode::BAD_REQUEST
        );
        assert_eq!(
            SwiftErrorCode::InternalError.status_code(),
            http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_should_use_default_message_from_code() {
        let err = SwiftError::new(SwiftErrorCode::Conflict);
        assert_eq!(err.status_code, http::StatusCode::CONFLICT);
        assert_eq!(
            err.message,
            "There was a conflict when trying to complete your request"
        );
    }

    #[test]
    fn test_should_attach_resource() {
        let err = SwiftError::not_found("photos");
        assert_eq!(err.code, SwiftErrorCode::NotFound);
        assert_eq!(err.resource.as_deref(), Some("photos"));
    }

    #[test]
    fn test_should_format_display() {
        let err = SwiftError::bad_request("container name too long");
        assert_eq!(
            err.to_string(),
            "SwiftError(BadRequest): container name too long"
        );
    }
}
