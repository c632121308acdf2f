//! # Zimbra SOAP element mapping
//!
//! This crate provides the schema-driven record serialization shared by every
//! Zimbra request binding.
//!
//! ## Features
//!
//! - **Element tree**: [`Element`] holds properties, text content and ordered
//!   children (single elements or repeated collections) with chained
//!   accessors.
//! - **Typed collections**: [`TypedCollection`] keeps one element type and
//!   expands into repeated children when serialized.
//! - **XML**: quick-xml based writer emitting properties as attributes.
//! - **Mapping form**: `serde_json` values following Zimbra's JSON SOAP
//!   conventions (`_content`, `_jsns`).
//! - **Envelopes**: [`Envelope`] wraps a [`Request`] with the `urn:zimbra`
//!   header context.
//!
//! ## Example
//!
//! ```
//! use zimbra_soap::{Element, ToElement};
//!
//! struct AutoProvTaskControl {
//!     action: &'static str,
//! }
//!
//! impl ToElement for AutoProvTaskControl {
//!     const ELEMENT_NAME: &'static str = "AutoProvTaskControlRequest";
//!
//!     fn to_element_named(&self, name: &str) -> Element {
//!         Element::new(name).with_property("action", self.action)
//!     }
//! }
//!
//! let request = AutoProvTaskControl { action: "start" };
//! assert_eq!(
//!     request.to_xml_named("autoProvTaskControl").unwrap(),
//!     r#"<autoProvTaskControl action="start"/>"#
//! );
//! ```

pub mod collection;
pub mod element;
pub mod envelope;
pub mod error;
pub mod json;
pub mod request;
pub mod value;
pub mod xml;

pub use collection::TypedCollection;
pub use element::{Child, Element};
pub use envelope::{ACCOUNT_NAMESPACE, ADMIN_NAMESPACE, Envelope, ZIMBRA_NAMESPACE};
pub use error::{Result, SoapError, required};
pub use request::{Request, ToElement};
pub use value::Value;

pub use json::{to_array, to_json_string, to_json_string_pretty};
pub use xml::{to_xml_document, to_xml_string, to_xml_string_pretty};
