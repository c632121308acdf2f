//! XML serialization of [`Element`] trees through quick-xml.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use tracing::trace;

use crate::element::Element;
use crate::error::{Result, SoapError};

/// Serialize an element to a compact XML string.
pub fn to_xml_string(element: &Element) -> Result<String> {
    let buffer = to_xml_vec(element)?;
    into_string(buffer)
}

/// Serialize an element to an XML string indented by two spaces.
pub fn to_xml_string_pretty(element: &Element) -> Result<String> {
    let mut serializer = XmlSerializer::with_indent(Vec::new(), 2);
    serializer.write_element(element)?;
    into_string(serializer.finish())
}

/// Serialize an element to a standalone document with an XML declaration.
pub fn to_xml_document(element: &Element) -> Result<String> {
    let mut serializer = XmlSerializer::new(Vec::new());
    serializer.write_declaration()?;
    serializer.write_element(element)?;
    into_string(serializer.finish())
}

/// Indented variant of [`to_xml_document`].
pub fn to_xml_document_pretty(element: &Element) -> Result<String> {
    let mut serializer = XmlSerializer::with_indent(Vec::new(), 2);
    serializer.write_declaration()?;
    serializer.write_element(element)?;
    into_string(serializer.finish())
}

/// Serialize an element to an XML byte vector.
pub fn to_xml_vec(element: &Element) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    to_xml_writer(element, &mut buffer)?;
    Ok(buffer)
}

/// Serialize an element to an XML writer.
pub fn to_xml_writer<W>(element: &Element, writer: W) -> Result<()>
where
    W: Write,
{
    let mut serializer = XmlSerializer::new(writer);
    serializer.write_element(element)?;
    serializer.finish();
    Ok(())
}

fn into_string(buffer: Vec<u8>) -> Result<String> {
    String::from_utf8(buffer).map_err(|e| SoapError::Custom(e.to_string()))
}

/// XML serializer that walks an element tree and writes quick-xml events.
pub struct XmlSerializer<W: Write> {
    writer: Writer<W>,
}

impl<W: Write> XmlSerializer<W> {
    /// Creates a serializer producing compact output.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Writer::new(writer),
        }
    }

    /// Creates a serializer indenting nested elements by `indent` spaces.
    pub fn with_indent(writer: W, indent: usize) -> Self {
        Self {
            writer: Writer::new_with_indent(writer, b' ', indent),
        }
    }

    /// Writes `<?xml version="1.0" encoding="UTF-8"?>`.
    pub fn write_declaration(&mut self) -> Result<()> {
        self.writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        Ok(())
    }

    /// Writes an element and everything below it.
    pub fn write_element(&mut self, element: &Element) -> Result<()> {
        trace!(element = element.name(), "serializing element");

        let mut start = BytesStart::new(element.name());
        for (name, value) in element.properties() {
            let value = value.to_string();
            start.push_attribute((name, value.as_str()));
        }

        if !element.has_content() {
            self.writer.write_event(Event::Empty(start))?;
            return Ok(());
        }

        self.writer.write_event(Event::Start(start))?;

        if let Some(text) = element.text() {
            let text = text.to_string();
            self.writer.write_event(Event::Text(BytesText::new(&text)))?;
        }

        for child in element.children() {
            for nested in child.elements() {
                self.write_element(nested)?;
            }
        }

        self.writer
            .write_event(Event::End(BytesEnd::new(element.name())))?;
        Ok(())
    }

    /// Finishes serialization and returns the underlying writer.
    pub fn finish(self) -> W {
        self.writer.into_inner()
    }
}
