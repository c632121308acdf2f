//! # Zimbra Admin API bindings
//!
//! Typed request payloads for the Zimbra Collaboration Suite administration
//! (`urn:zimbraAdmin`) and account (`urn:zimbraAccount`) SOAP services.
//!
//! Every request validates its required arguments on construction, exposes a
//! getter and a chained setter per field, and serializes through
//! [`zimbra_soap::ToElement`] to XML or to Zimbra's JSON mapping form.
//! [`AdminApi`] lists the administrative operations for transports to
//! implement.
//!
//! ```
//! use zimbra_api::admin::DeleteLDAPEntry;
//! use zimbra_soap::ToElement;
//!
//! let request = DeleteLDAPEntry::new(" uid=foo,ou=people,dc=example,dc=com ").unwrap();
//! assert_eq!(request.dn(), "uid=foo,ou=people,dc=example,dc=com");
//! assert_eq!(
//!     request.to_xml_named("deleteLDAPEntry").unwrap(),
//!     r#"<deleteLDAPEntry dn="uid=foo,ou=people,dc=example,dc=com"/>"#
//! );
//! ```

#[macro_use]
mod macros;

pub mod account;
pub mod admin;
pub mod api;
pub mod enums;
pub mod structs;

pub use api::AdminApi;

use zimbra_soap::{Result, SoapError};

/// Like [`zimbra_soap::required`] but keeps surrounding whitespace, for passwords and keys.
pub(crate) fn required_secret(field: &'static str, value: &str) -> Result<String> {
    if value.is_empty() {
        return Err(SoapError::invalid_argument(field, "value is required"));
    }
    Ok(value.to_string())
}
