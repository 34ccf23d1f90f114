//! Protocol-facing listing types.
//!
//! [`ObjectEntry`] is the Swift view of one listed object; [`ContainerListing`]
//! is the container element rendered into JSON and XML bodies. Both serialize
//! with the exact field names the protocol mandates (`name`, `hash`, `bytes`,
//! `content_type`, `last_modified`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Content type reported for pseudo-directories and names ending in `/`.
pub const DIRECTORY_CONTENT_TYPE: &str = "application/directory";

/// Fallback content type when the backend stored none.
pub const OCTET_STREAM_CONTENT_TYPE: &str = "application/octet-stream";

/// Timestamp layout used in listing bodies: UTC, microsecond precision,
/// no timezone suffix.
pub const LISTING_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// One entry in a container listing.
///
/// Every field is always present in serialized form; defaults are applied
/// by the entry mapper before an `ObjectEntry` is constructed (`hash` empty,
/// `bytes` zero, `last_modified` epoch).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectEntry {
    /// Object name, unique within the container.
    pub name: String,
    /// Normalized etag: surrounding quotes stripped, empty if the backend
    /// provided none.
    pub hash: String,
    /// Object size in bytes.
    pub bytes: u64,
    /// Resolved content type; never absent.
    pub content_type: String,
    /// Last-modified timestamp, UTC.
    #[serde(with = "listing_timestamp")]
    pub last_modified: DateTime<Utc>,
}

/// A complete container listing: the container name plus its entries, in
/// backend order (lexicographic ascending by name, never re-sorted here).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerListing {
    /// The container name.
    pub name: String,
    /// Listed entries, in backend order.
    pub object: Vec<ObjectEntry>,
}

impl ContainerListing {
    /// Sum of entry sizes.
    ///
    /// This is an approximation of the container total: entries are already
    /// truncated by the listing limit when this is computed.
    #[must_use]
    pub fn bytes_used(&self) -> u64 {
        self.object.iter().map(|e| e.bytes).sum()
    }
}

/// Negotiated output encoding for a container listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListingFormat {
    /// Newline-separated entry names.
    #[default]
    Plain,
    /// JSON container body.
    Json,
    /// XML container body.
    Xml,
}

impl ListingFormat {
    /// The media type reported in the response `Content-Type` header.
    #[must_use]
    pub fn media_type(self) -> &'static str {
        match self {
            Self::Plain => "text/plain; charset=utf-8",
            Self::Json => "application/json; charset=utf-8",
            Self::Xml => "application/xml; charset=utf-8",
        }
    }
}

/// Serde codec for the Swift listing timestamp layout.
pub mod listing_timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    use super::LISTING_TIMESTAMP_FORMAT;

    /// Serialize a timestamp as `yyyy-MM-ddThh:mm:ss.ffffff`.
    pub fn serialize<S: Serializer>(
        dt: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&dt.format(LISTING_TIMESTAMP_FORMAT).to_string())
    }

    /// Deserialize a timestamp, accepting any fractional-second precision.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| naive.and_utc())
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn entry(name: &str, bytes: u64) -> ObjectEntry {
        ObjectEntry {
            name: name.to_owned(),
            hash: "d41d8cd98f00b204e9800998ecf8427e".to_owned(),
            bytes,
            content_type: OCTET_STREAM_CONTENT_TYPE.to_owned(),
            last_modified: Utc.with_ymd_and_hms(2016, 3, 4, 14, 10, 59).unwrap(),
        }
    }

    #[test]
    fn test_should_sum_bytes_used() {
        let listing = ContainerListing {
            name: "photos".to_owned(),
            object: vec![entry("a.jpg", 10), entry("b.jpg", 32)],
        };
        assert_eq!(listing.bytes_used(), 42);
    }

    #[test]
    fn test_should_serialize_timestamp_with_microseconds() {
        let json = serde_json::to_value(entry("a.jpg", 1)).expect("serialize entry");
        assert_eq!(json["last_modified"], "2016-03-04T14:10:59.000000");
    }

    #[test]
    fn test_should_round_trip_entry_through_json() {
        let original = entry("dir/b.jpg", 7);
        let json = serde_json::to_string(&original).expect("serialize entry");
        let parsed: ObjectEntry = serde_json::from_str(&json).expect("parse entry");
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_should_parse_timestamp_with_reduced_precision() {
        let json = r#"{"name":"a","hash":"","bytes":0,"content_type":"text/plain","last_modified":"2016-03-04T14:10:59.1"}"#;
        let parsed: ObjectEntry = serde_json::from_str(json).expect("parse entry");
        assert_eq!(
            parsed.last_modified,
            Utc.with_ymd_and_hms(2016, 3, 4, 14, 10, 59).unwrap()
                + chrono::Duration::milliseconds(100)
        );
    }

    #[test]
    fn test_should_report_media_types() {
        assert!(ListingFormat::Plain.media_type().starts_with("text/plain"));
        assert!(
            ListingFormat::Json
                .media_type()
                .starts_with("application/json")
        );
        assert!(
            ListingFormat::Xml
                .media_type()
                .starts_with("application/xml")
        );
    }
}
