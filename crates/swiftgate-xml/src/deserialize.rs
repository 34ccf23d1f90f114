//! Container listing XML deserialization.
//!
//! Parses the document produced by [`to_xml`](crate::serialize::to_xml)
//! back into a [`ContainerListing`]; used by clients of the crate and the
//! round-trip tests.

use chrono::{DateTime, Utc};
use quick_xml::Reader;
use quick_xml::events::Event;
use swiftgate_model::{ContainerListing, ObjectEntry};

use crate::error::XmlError;

/// Parse a container listing XML document.
pub fn from_xml(xml: &[u8]) -> Result<ContainerListing, XmlError> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    // Skip the declaration and find the <container> root.
    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == b"container" => {
                let name = e
                    .try_get_attribute("name")?
                    .map(|attr| {
                        attr.unescape_value()
                            .map(|v| v.into_owned())
                            .map_err(XmlError::from)
                    })
                    .transpose()?
                    .ok_or_else(|| XmlError::MissingElement("container name attribute".into()))?;
                return read_container(&mut reader, name);
            }
            Event::Start(e) => {
                return Err(XmlError::UnexpectedElement(
                    String::from_utf8_lossy(e.name().as_ref()).into_owned(),
                ));
            }
            Event::Eof => {
                return Err(XmlError::MissingElement("container element".into()));
            }
            _ => {}
        }
    }
}

/// Read `<object>` children until the container end tag.
fn read_container(
    reader: &mut Reader<&[u8]>,
    name: String,
) -> Result<ContainerListing, XmlError> {
    let mut object = Vec::new();
    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == b"object" => {
                object.push(read_entry(reader)?);
            }
            Event::End(e) if e.name().as_ref() == b"container" => {
                return Ok(ContainerListing { name, object });
            }
            Event::Eof => {
                return Err(XmlError::UnexpectedElement(
                    "unexpected EOF inside <container>".into(),
                ));
            }
            _ => {}
        }
    }
}

/// Read one `<object>` element; the reader is positioned just after its
/// start tag.
fn read_entry(reader: &mut Reader<&[u8]>) -> Result<ObjectEntry, XmlError> {
    let mut name = None;
    let mut hash = String::new();
    let mut bytes = 0u64;
    let mut content_type = String::new();
    let mut last_modified = DateTime::<Utc>::UNIX_EPOCH;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let field = e.name().as_ref().to_vec();
                let text = read_text_content(reader)?;
                match field.as_slice() {
                    b"name" => name = Some(text),
                    b"hash" => hash = text,
                    b"bytes" => {
                        bytes = text.parse::<u64>().map_err(|err| {
                            XmlError::ParseError(format!("invalid bytes '{text}': {err}"))
                        })?;
                    }
                    b"content_type" => content_type = text,
                    b"last_modified" => last_modified = parse_timestamp(&text)?,
                    _ => {}
                }
            }
            Event::End(e) if e.name().as_ref() == b"object" => {
                return Ok(ObjectEntry {
                    name: name.ok_or_else(|| XmlError::MissingElement("object name".into()))?,
                    hash,
                    bytes,
                    content_type,
                    last_modified,
                });
            }
            Event::Eof => {
                return Err(XmlError::UnexpectedElement(
                    "unexpected EOF inside <object>".into(),
                ));
            }
            _ => {}
        }
    }
}

/// Read the text content of the current element and consume its end tag.
fn read_text_content(reader: &mut Reader<&[u8]>) -> Result<String, XmlError> {
    let mut text = String::new();
    loop {
        match reader.read_event()? {
            Event::Text(e) => {
                let decoded = e
                    .decode()
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                let unescaped = quick_xml::escape::unescape(&decoded)
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                text.push_str(&unescaped);
            }
            Event::End(_) => return Ok(text),
            Event::Eof => {
                return Err(XmlError::UnexpectedElement(
                    "unexpected EOF while reading text content".into(),
                ));
            }
            _ => {}
        }
    }
}

/// Parse the Swift listing timestamp: microsecond precision, no suffix.
fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, XmlError> {
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|err| XmlError::ParseError(format!("invalid timestamp '{s}': {err}")))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::serialize::to_xml;

    fn listing() -> ContainerListing {
        ContainerListing {
            name: "photos".to_owned(),
            object: vec![
                ObjectEntry {
                    name: "a.jpg".to_owned(),
                    hash: "0cc175b9c0f1b6a831c399e269772661".to_owned(),
                    bytes: 10,
                    content_type: "image/jpeg".to_owned(),
                    last_modified: Utc.with_ymd_and_hms(2016, 3, 4, 14, 10, 59).unwrap(),
                },
                ObjectEntry {
                    name: "dir/".to_owned(),
                    hash: String::new(),
                    bytes: 0,
                    content_type: "application/directory".to_owned(),
                    last_modified: DateTime::<Utc>::UNIX_EPOCH,
                },
            ],
        }
    }

    #[test]
    fn test_should_round_trip_listing_through_xml() {
        let original = listing();
        let xml = to_xml(&original).expect("serialize");
        let parsed = from_xml(&xml).expect("parse");
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_should_parse_empty_container() {
        let xml = br#"<?xml version="1.0" encoding="UTF-8"?><container name="empty"></container>"#;
        let parsed = from_xml(xml).expect("parse");
        assert_eq!(parsed.name, "empty");
        assert!(parsed.object.is_empty());
    }

    #[test]
    fn test_should_reject_document_without_container_root() {
        let xml = br#"<?xml version="1.0"?><account name="x"></account>"#;
        assert!(matches!(
            from_xml(xml),
            Err(XmlError::UnexpectedElement(_))
        ));
    }

    #[test]
    fn test_should_reject_container_without_name() {
        let xml = br"<container><object><name>a</name></object></container>";
        assert!(matches!(from_xml(xml), Err(XmlError::MissingElement(_))));
    }

    #[test]
    fn test_should_unescape_entity_references() {
        let xml = br#"<container name="photos"><object><name>a&amp;b.jpg</name><hash></hash><bytes>1</bytes><content_type>text/plain</content_type><last_modified>1970-01-01T00:00:00.000000</last_modified></object></container>"#;
        let parsed = from_xml(xml).expect("parse");
        assert_eq!(parsed.object[0].name, "a&b.jpg");
    }
}
