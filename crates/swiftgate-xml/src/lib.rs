//! XML serialization and deserialization for swiftgate container listings.
//!
//! Produces and parses the Swift container listing document:
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <container name="photos">
//!   <object>
//!     <name>a.jpg</name>
//!     <hash>d41d8cd98f00b204e9800998ecf8427e</hash>
//!     <bytes>1024</bytes>
//!     <content_type>image/jpeg</content_type>
//!     <last_modified>2016-03-04T14:10:59.000000</last_modified>
//!   </object>
//! </container>
//! ```
//!
//! Serialization is event-based via `quick-xml`; timestamps use the Swift
//! listing layout (UTC, microsecond precision, no timezone suffix).

mod deserialize;
mod error;
mod serialize;

pub use deserialize::from_xml;
pub use error::XmlError;
pub use serialize::to_xml;
