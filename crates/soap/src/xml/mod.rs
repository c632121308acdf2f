//! XML serialization for element trees.
//!
//! Properties are written as attributes, text content as character data and
//! children as nested elements, in order. Collections expand into repeated
//! sibling elements:
//!
//! ```xml
//! <FixCalendarPriorityRequest sync="true">
//!   <account name="user1@example.com"/>
//!   <account name="user2@example.com"/>
//! </FixCalendarPriorityRequest>
//! ```
//!
//! Elements with neither text nor non-empty children are written as empty
//! tags, and empty collections produce no output at all.
//!
//! ## Examples
//!
//! ```
//! use zimbra_soap::Element;
//! use zimbra_soap::xml::to_xml_string;
//!
//! let element = Element::new("autoProvTaskControl").with_property("action", "start");
//! assert_eq!(
//!     to_xml_string(&element).unwrap(),
//!     r#"<autoProvTaskControl action="start"/>"#
//! );
//! ```

pub mod ser;
pub mod utils;

pub use ser::{
    XmlSerializer, to_xml_document, to_xml_document_pretty, to_xml_string, to_xml_string_pretty, to_xml_vec,
    to_xml_writer,
};
