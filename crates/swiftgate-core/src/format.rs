//! Listing output-format negotiation.
//!
//! Resolution order: an explicit `format` query parameter (fixed alias
//! table, unrecognized values are a client error), then the `Accept` header
//! taken verbatim as a media type, then the plain-text default.

use swiftgate_model::ListingFormat;

use crate::error::SwiftServiceError;

/// Negotiate the listing body encoding.
pub fn negotiate(
    format: Option<&str>,
    accept: Option<&str>,
) -> Result<ListingFormat, SwiftServiceError> {
    if let Some(alias) = format {
        return match alias {
            "plain" => Ok(ListingFormat::Plain),
            "json" => Ok(ListingFormat::Json),
            "xml" => Ok(ListingFormat::Xml),
            other => Err(SwiftServiceError::InvalidFormat {
                format: other.to_owned(),
            }),
        };
    }

    if let Some(value) = accept {
        return Ok(from_media_type(value));
    }

    Ok(ListingFormat::Plain)
}

/// Map a media type to a listing format; anything unrecognized falls back
/// to plain text.
fn from_media_type(value: &str) -> ListingFormat {
    match value.parse::<mime::Mime>() {
        Ok(media) if media.type_() == mime::APPLICATION && media.subtype() == mime::JSON => {
            ListingFormat::Json
        }
        Ok(media) if media.subtype() == mime::XML => ListingFormat::Xml,
        _ => ListingFormat::Plain,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_default_to_plain() {
        assert_eq!(negotiate(None, None).expect("negotiate"), ListingFormat::Plain);
    }

    #[test]
    fn test_should_map_format_aliases() {
        assert_eq!(
            negotiate(Some("json"), None).expect("negotiate"),
            ListingFormat::Json
        );
        assert_eq!(
            negotiate(Some("xml"), None).expect("negotiate"),
            ListingFormat::Xml
        );
        assert_eq!(
            negotiate(Some("plain"), None).expect("negotiate"),
            ListingFormat::Plain
        );
    }

    #[test]
    fn test_should_reject_unknown_format_alias() {
        let err = negotiate(Some("yaml"), None).unwrap_err();
        assert!(matches!(err, SwiftServiceError::InvalidFormat { .. }));
    }

    #[test]
    fn test_should_prefer_format_over_accept() {
        assert_eq!(
            negotiate(Some("xml"), Some("application/json")).expect("negotiate"),
            ListingFormat::Xml
        );
    }

    #[test]
    fn test_should_honor_accept_header() {
        assert_eq!(
            negotiate(None, Some("application/json")).expect("negotiate"),
            ListingFormat::Json
        );
        assert_eq!(
            negotiate(None, Some("application/xml")).expect("negotiate"),
            ListingFormat::Xml
        );
        assert_eq!(
            negotiate(None, Some("text/xml")).expect("negotiate"),
            ListingFormat::Xml
        );
        assert_eq!(
            negotiate(None, Some("text/plain")).expect("negotiate"),
            ListingFormat::Plain
        );
    }

    #[test]
    fn test_should_fall_back_to_plain_for_unrecognized_accept() {
        assert_eq!(
            negotiate(None, Some("*/*")).expect("negotiate"),
            ListingFormat::Plain
        );
        assert_eq!(
            negotiate(None, Some("not a media type")).expect("negotiate"),
            ListingFormat::Plain
        );
    }
}
