//! Typed inputs for Swift container operations.
//!
//! Field doc comments record where each value comes from in the HTTP
//! request, mirroring the way the request-extraction layer populates them.

/// Input for GET container (listing).
#[derive(Debug, Clone, Default)]
pub struct ListContainerInput {
    /// HTTP label (URI path): the container name.
    pub container: String,
    /// HTTP header: `X-Auth-Token`.
    pub auth_token: Option<String>,
    /// HTTP query: `limit`.
    pub limit: Option<usize>,
    /// HTTP query: `marker`.
    pub marker: Option<String>,
    /// HTTP query: `end_marker`.
    pub end_marker: Option<String>,
    /// HTTP query: `format`.
    pub format: Option<String>,
    /// HTTP query: `prefix`.
    pub prefix: Option<String>,
    /// HTTP query: `delimiter`.
    pub delimiter: Option<String>,
    /// HTTP query: `path`.
    pub path: Option<String>,
    /// HTTP header: `X-Newest`. Accepted but not behaviorally wired.
    pub newest: bool,
    /// HTTP header: `Accept`.
    pub accept: Option<String>,
}

/// Input for HEAD container.
#[derive(Debug, Clone, Default)]
pub struct HeadContainerInput {
    /// HTTP label (URI path): the container name.
    pub container: String,
    /// HTTP header: `X-Auth-Token`.
    pub auth_token: Option<String>,
    /// HTTP header: `X-Newest`. Accepted but not behaviorally wired.
    pub newest: bool,
}

/// Input for PUT container (idempotent create).
///
/// The ACL, sync, and versioning headers are accepted for protocol
/// compatibility and not persisted in this slice.
#[derive(Debug, Clone, Default)]
pub struct CreateContainerInput {
    /// HTTP label (URI path): the container name.
    pub container: String,
    /// HTTP header: `X-Auth-Token`.
    pub auth_token: Option<String>,
    /// HTTP header: `X-Container-Read`.
    pub read_acl: Option<String>,
    /// HTTP header: `X-Container-Write`.
    pub write_acl: Option<String>,
    /// HTTP header: `X-Container-Sync-To`.
    pub sync_to: Option<String>,
    /// HTTP header: `X-Container-Sync-Key`.
    pub sync_key: Option<String>,
    /// HTTP header: `X-Versions-Location`.
    pub versions_location: Option<String>,
    /// HTTP header: `Content-Type`.
    pub content_type: Option<String>,
    /// HTTP header: `X-Detect-Content-Type`.
    pub detect_content_type: bool,
    /// HTTP header: `If-None-Match`.
    pub if_none_match: Option<String>,
}

/// Input for POST container (unconditional create/update).
///
/// Carries the same accepted-but-unpersisted metadata headers as
/// [`CreateContainerInput`].
#[derive(Debug, Clone, Default)]
pub struct PostContainerInput {
    /// HTTP label (URI path): the container name.
    pub container: String,
    /// HTTP header: `X-Auth-Token`.
    pub auth_token: Option<String>,
    /// HTTP header: `X-Container-Read`.
    pub read_acl: Option<String>,
    /// HTTP header: `X-Container-Write`.
    pub write_acl: Option<String>,
    /// HTTP header: `X-Container-Sync-To`.
    pub sync_to: Option<String>,
    /// HTTP header: `X-Container-Sync-Key`.
    pub sync_key: Option<String>,
    /// HTTP header: `X-Versions-Location`.
    pub versions_location: Option<String>,
    /// HTTP header: `Content-Type`.
    pub content_type: Option<String>,
    /// HTTP header: `X-Detect-Content-Type`.
    pub detect_content_type: bool,
}

/// Input for DELETE container.
#[derive(Debug, Clone, Default)]
pub struct DeleteContainerInput {
    /// HTTP label (URI path): the container name.
    pub container: String,
    /// HTTP header: `X-Auth-Token`.
    pub auth_token: Option<String>,
}
