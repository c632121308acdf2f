//! Mapping (array) form of an element tree.
//!
//! This is the shape Zimbra accepts on its JSON SOAP endpoint:
//!
//! | Element | Mapping |
//! |---------|---------|
//! | `<r action="start"/>` | `{"r": {"action": "start"}}` |
//! | `<r><id>x</id></r>` | `{"r": {"id": "x"}}` |
//! | `<r><a n="k">v</a><a n="j">w</a></r>` | `{"r": {"a": [{"n": "k", "_content": "v"}, {"n": "j", "_content": "w"}]}}` |
//!
//! Elements carrying only text collapse to the scalar itself; otherwise text
//! goes under [`CONTENT_KEY`].

use serde_json::{Map, Value as JsonValue};

use crate::element::{Child, Element};
use crate::error::Result;

/// Key holding text content when an element also has properties or children.
pub const CONTENT_KEY: &str = "_content";

/// Key holding the namespace of a request or header context.
pub const NAMESPACE_KEY: &str = "_jsns";

/// Converts an element into `{ name: body }`.
pub fn to_array(element: &Element) -> JsonValue {
    let mut root = Map::new();
    root.insert(element.name().to_string(), element_body(element));
    JsonValue::Object(root)
}

/// Converts an element into its body, without the enclosing name.
pub fn element_body(element: &Element) -> JsonValue {
    let has_properties = element.properties().next().is_some();
    let has_children = element.children().iter().any(|child| !child.is_empty());

    if !has_properties && !has_children {
        if let Some(text) = element.text() {
            return text.to_json();
        }
    }

    let mut body = Map::new();
    for (name, value) in element.properties() {
        body.insert(name.to_string(), value.to_json());
    }
    if let Some(text) = element.text() {
        body.insert(CONTENT_KEY.to_string(), text.to_json());
    }
    for child in element.children() {
        match child {
            Child::Single(nested) => {
                body.insert(nested.name().to_string(), element_body(nested));
            }
            Child::Collection { name, items } => {
                if items.is_empty() {
                    continue;
                }
                let values = items.iter().map(element_body).collect();
                body.insert(name.clone(), JsonValue::Array(values));
            }
        }
    }
    JsonValue::Object(body)
}

/// Converts an element into its body and tags it with `namespace`.
///
/// A scalar body is promoted to an object so the namespace has somewhere to go.
pub fn element_body_with_namespace(element: &Element, namespace: &str) -> JsonValue {
    let mut body = match element_body(element) {
        JsonValue::Object(map) => map,
        scalar => {
            let mut map = Map::new();
            map.insert(CONTENT_KEY.to_string(), scalar);
            map
        }
    };
    body.insert(
        NAMESPACE_KEY.to_string(),
        JsonValue::String(namespace.to_string()),
    );
    JsonValue::Object(body)
}

/// Serializes the mapping form of an element to a JSON string.
pub fn to_json_string(element: &Element) -> Result<String> {
    Ok(serde_json::to_string(&to_array(element))?)
}

/// Serializes the mapping form of an element to a pretty-printed JSON string.
pub fn to_json_string_pretty(element: &Element) -> Result<String> {
    Ok(serde_json::to_string_pretty(&to_array(element))?)
}
