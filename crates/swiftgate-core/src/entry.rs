//! Entry mapping: backend metadata into protocol-facing listing entries.
//!
//! Applies the content-type inference, etag normalization, and field
//! defaults that make every [`ObjectEntry`] field present, plus the
//! name-decoding quirk of transient backends.

use chrono::{DateTime, Utc};
use percent_encoding::percent_decode_str;
use swiftgate_model::types::{DIRECTORY_CONTENT_TYPE, OCTET_STREAM_CONTENT_TYPE};
use swiftgate_model::ObjectEntry;

use crate::backend::{StorageObjectKind, StorageObjectMetadata};

/// Map one backend metadata item to a protocol entry.
///
/// `decode_names` is set when the active backend stores names
/// percent-encoded ([`decodes_names`](crate::backend::BlobStoreBackend::decodes_names)).
#[must_use]
pub fn map_entry(meta: StorageObjectMetadata, decode_names: bool) -> ObjectEntry {
    let content_type = resolve_content_type(&meta);
    let hash = meta
        .etag
        .as_deref()
        .map(|etag| trim_etag(etag).to_owned())
        .unwrap_or_default();
    let name = if decode_names {
        percent_decode_str(&meta.name).decode_utf8_lossy().into_owned()
    } else {
        meta.name
    };

    ObjectEntry {
        name,
        hash,
        bytes: meta.size.unwrap_or(0),
        content_type,
        last_modified: meta.last_modified.unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
    }
}

/// Whether a name passes the exclusive `end_marker` upper bound.
#[must_use]
pub fn within_end_marker(name: &str, end_marker: Option<&str>) -> bool {
    end_marker.is_none_or(|end| name < end)
}

/// Resolve an entry's content type, in priority order: the explicit
/// non-empty stored value, `application/directory` for pseudo-directories
/// and names ending in the path separator, then the generic binary type.
fn resolve_content_type(meta: &StorageObjectMetadata) -> String {
    if let Some(stored) = meta.content_type.as_deref() {
        if !stored.is_empty() {
            return stored.to_owned();
        }
    }
    if meta.kind == StorageObjectKind::PseudoDirectory || meta.name.ends_with('/') {
        return DIRECTORY_CONTENT_TYPE.to_owned();
    }
    OCTET_STREAM_CONTENT_TYPE.to_owned()
}

/// Strip surrounding quote characters from a backend etag.
#[must_use]
pub fn trim_etag(etag: &str) -> &str {
    etag.trim_matches('"')
}
