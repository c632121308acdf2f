//! Conversion traits implemented by every request and struct binding.

use crate::element::Element;
use crate::envelope::Envelope;
use crate::error::Result;
use crate::{json, xml};

/// A type that maps onto one named element.
///
/// Implementors fix their default element name and describe how their fields
/// are placed (property, text or child). The provided methods serialize the
/// element under the default name or under an explicit one.
pub trait ToElement {
    /// Name used when no explicit element name is given.
    const ELEMENT_NAME: &'static str;

    /// Builds the element tree under `name`.
    fn to_element_named(&self, name: &str) -> Element;

    /// Builds the element tree under [`ToElement::ELEMENT_NAME`].
    fn to_element(&self) -> Element {
        self.to_element_named(Self::ELEMENT_NAME)
    }

    /// Returns the mapping form `{ name: body }` under the default name.
    fn to_array(&self) -> serde_json::Value {
        json::to_array(&self.to_element())
    }

    /// Returns the mapping form under an explicit root name.
    fn to_array_named(&self, name: &str) -> serde_json::Value {
        json::to_array(&self.to_element_named(name))
    }

    /// Serializes to compact XML under the default name.
    fn to_xml(&self) -> Result<String> {
        xml::to_xml_string(&self.to_element())
    }

    /// Serializes to compact XML under an explicit root name.
    fn to_xml_named(&self, name: &str) -> Result<String> {
        xml::to_xml_string(&self.to_element_named(name))
    }

    /// Serializes to indented XML under the default name.
    fn to_xml_pretty(&self) -> Result<String> {
        xml::to_xml_string_pretty(&self.to_element())
    }
}

/// A SOAP request body bound to a Zimbra namespace.
pub trait Request: ToElement {
    /// Namespace the request element belongs to, e.g. `urn:zimbraAdmin`.
    const NAMESPACE: &'static str;

    /// Wraps the request in a SOAP envelope with an empty context.
    fn envelope(&self) -> Envelope
    where
        Self: Sized,
    {
        Envelope::new(self)
    }
}
