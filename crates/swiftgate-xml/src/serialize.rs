//! Container listing XML serialization.

use std::io::{self, Write};

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesText, Event};
use swiftgate_model::types::LISTING_TIMESTAMP_FORMAT;
use swiftgate_model::{ContainerListing, ObjectEntry};

use crate::error::XmlError;

/// Serialize a container listing as a complete XML document: declaration,
/// `<container>` root with a `name` attribute, one `<object>` element per
/// entry.
pub fn to_xml(listing: &ContainerListing) -> Result<Vec<u8>, XmlError> {
    let mut buf = Vec::with_capacity(512);
    let mut writer = Writer::new(&mut buf);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    writer
        .create_element("container")
        .with_attribute(("name", listing.name.as_str()))
        .write_inner_content(|w| {
            for entry in &listing.object {
                write_entry(w, entry)?;
            }
            Ok(())
        })?;

    Ok(buf)
}

/// Write one `<object>` element.
fn write_entry<W: Write>(writer: &mut Writer<W>, entry: &ObjectEntry) -> io::Result<()> {
    writer.create_element("object").write_inner_content(|w| {
        write_text_element(w, "name", &entry.name)?;
        write_text_element(w, "hash", &entry.hash)?;
        write_text_element(w, "bytes", &entry.bytes.to_string())?;
        write_text_element(w, "content_type", &entry.content_type)?;
        write_text_element(
            w,
            "last_modified",
            &entry
                .last_modified
                .format(LISTING_TIMESTAMP_FORMAT)
                .to_string(),
        )?;
        Ok(())
    })?;
    Ok(())
}

/// Write a simple `<tag>text</tag>` element.
fn write_text_element<W: Write>(writer: &mut Writer<W>, tag: &str, text: &str) -> io::Result<()> {
    writer
        .create_element(tag)
        .write_text_content(BytesText::new(text))?;
    Ok(())
}
