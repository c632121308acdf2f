//! In-memory element tree.
//!
//! An [`Element`] is a named node holding scalar properties (serialized as XML
//! attributes), optional text content, and an ordered list of children. A child
//! is either a single nested element or a named collection of elements that
//! is written as repeated sibling elements sharing one name.
//!
//! The name is fixed when the element is created. Everything else can be read
//! and overwritten through paired accessors; the `set_*` methods return
//! `&mut Self` so calls can be chained, and the `with_*` methods consume and
//! return the element for builder-style construction.
//!
//! ```
//! use zimbra_soap::Element;
//!
//! let mut element = Element::new("ReIndexRequest");
//! element
//!     .set_property("action", "start")
//!     .set_child(Element::new("mbox").with_property("id", "abc"));
//!
//! assert_eq!(element.property("action").and_then(|v| v.as_str()), Some("start"));
//! assert!(element.child("mbox").is_some());
//! ```

use std::collections::BTreeMap;
use std::slice;

use crate::value::Value;

/// A named element with properties, text content and ordered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    properties: BTreeMap<String, Value>,
    text: Option<Value>,
    children: Vec<Child>,
}

/// A child slot of an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Child {
    /// A single nested element, addressed by its own name.
    Single(Element),
    /// Repeated elements sharing one name, in insertion order.
    Collection {
        /// Name shared by every item.
        name: String,
        /// The items, in the order they were added.
        items: Vec<Element>,
    },
}

impl Child {
    /// Returns the name this child is addressed by.
    pub fn name(&self) -> &str {
        match self {
            Child::Single(element) => element.name(),
            Child::Collection { name, .. } => name,
        }
    }

    /// Returns the element if this is a single child.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Child::Single(element) => Some(element),
            Child::Collection { .. } => None,
        }
    }

    /// Returns the items if this is a collection.
    pub fn as_collection(&self) -> Option<&[Element]> {
        match self {
            Child::Single(_) => None,
            Child::Collection { items, .. } => Some(items),
        }
    }

    /// Returns every element held by this child, in output order.
    pub fn elements(&self) -> &[Element] {
        match self {
            Child::Single(element) => slice::from_ref(element),
            Child::Collection { items, .. } => items,
        }
    }

    /// Returns `true` for a collection with no items.
    ///
    /// Empty collections are omitted from every serialized form.
    pub fn is_empty(&self) -> bool {
        self.elements().is_empty()
    }
}

impl Element {
    /// Creates an element with no properties, text or children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: BTreeMap::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Returns the element name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a property value, or `None` when it was never set.
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// Sets a property, replacing any previous value.
    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Removes a property and returns its previous value.
    pub fn remove_property(&mut self, name: &str) -> Option<Value> {
        self.properties.remove(name)
    }

    /// Iterates over properties in name order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the text content, if any.
    pub fn text(&self) -> Option<&Value> {
        self.text.as_ref()
    }

    /// Sets the text content.
    pub fn set_text(&mut self, value: impl Into<Value>) -> &mut Self {
        self.text = Some(value.into());
        self
    }

    /// Returns the child registered under `name`.
    pub fn child(&self, name: &str) -> Option<&Child> {
        self.children.iter().find(|child| child.name() == name)
    }

    /// Returns the single child element registered under `name`.
    pub fn child_element(&self, name: &str) -> Option<&Element> {
        self.child(name).and_then(Child::as_element)
    }

    /// Sets a single child element.
    ///
    /// A child already registered under the same name is replaced in place;
    /// otherwise the element is appended after the existing children.
    pub fn set_child(&mut self, element: Element) -> &mut Self {
        self.upsert_child(Child::Single(element));
        self
    }

    /// Sets a collection of repeated children under `name`.
    pub fn set_collection(
        &mut self,
        name: impl Into<String>,
        items: impl IntoIterator<Item = Element>,
    ) -> &mut Self {
        self.upsert_child(Child::Collection {
            name: name.into(),
            items: items.into_iter().collect(),
        });
        self
    }

    /// Removes the child registered under `name`.
    pub fn remove_child(&mut self, name: &str) -> Option<Child> {
        let index = self.children.iter().position(|child| child.name() == name)?;
        Some(self.children.remove(index))
    }

    /// Returns the children in output order.
    pub fn children(&self) -> &[Child] {
        &self.children
    }

    /// Returns `true` when the element has text or a non-empty child to write inside its tag.
    pub fn has_content(&self) -> bool {
        self.text.is_some() || self.children.iter().any(|child| !child.is_empty())
    }

    /// Builder form of [`Element::set_property`].
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_property(name, value);
        self
    }

    /// Sets the property only when `value` is present.
    pub fn with_optional_property<V>(self, name: impl Into<String>, value: Option<V>) -> Self
    where
        V: Into<Value>,
    {
        match value {
            Some(value) => self.with_property(name, value),
            None => self,
        }
    }

    /// Builder form of [`Element::set_text`].
    pub fn with_text(mut self, value: impl Into<Value>) -> Self {
        self.set_text(value);
        self
    }

    /// Sets the text content only when `value` is present.
    pub fn with_optional_text<V>(self, value: Option<V>) -> Self
    where
        V: Into<Value>,
    {
        match value {
            Some(value) => self.with_text(value),
            None => self,
        }
    }

    /// Builder form of [`Element::set_child`].
    pub fn with_child(mut self, element: Element) -> Self {
        self.set_child(element);
        self
    }

    /// Adds the child only when it is present.
    pub fn with_optional_child(self, element: Option<Element>) -> Self {
        match element {
            Some(element) => self.with_child(element),
            None => self,
        }
    }

    /// Adds a child element named `name` whose only content is `value`.
    pub fn with_text_child(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.with_child(Element::new(name).with_text(value))
    }

    /// Adds a text-only child only when `value` is present.
    pub fn with_optional_text_child<V>(self, name: impl Into<String>, value: Option<V>) -> Self
    where
        V: Into<Value>,
    {
        match value {
            Some(value) => self.with_text_child(name, value),
            None => self,
        }
    }

    /// Builder form of [`Element::set_collection`].
    pub fn with_collection(
        mut self,
        name: impl Into<String>,
        items: impl IntoIterator<Item = Element>,
    ) -> Self {
        self.set_collection(name, items);
        self
    }

    fn upsert_child(&mut self, child: Child) {
        match self
            .children
            .iter_mut()
            .find(|existing| existing.name() == child.name())
        {
            Some(existing) => *existing = child,
            None => self.children.push(child),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_read_after_write() {
        let mut element = Element::new("DeleteLDAPEntryRequest");
        assert!(element.property("dn").is_none());

        element.set_property("dn", "uid=foo");
        assert_eq!(element.property("dn"), Some(&Value::from("uid=foo")));

        element.set_property("dn", "uid=bar");
        assert_eq!(element.property("dn"), Some(&Value::from("uid=bar")));
        assert_eq!(element.properties().count(), 1);
    }

    #[test]
    fn test_set_child_replaces_in_place() {
        let mut element = Element::new("root");
        element
            .set_child(Element::new("first"))
            .set_child(Element::new("second"))
            .set_child(Element::new("first").with_property("v", 2i64));

        let names: Vec<&str> = element.children().iter().map(Child::name).collect();
        assert_eq!(names, vec!["first", "second"]);
        assert_eq!(
            element
                .child_element("first")
                .and_then(|e| e.property("v"))
                .and_then(Value::as_i64),
            Some(2)
        );
    }

    #[test]
    fn test_collection_keeps_insertion_order() {
        let element = Element::new("root").with_collection(
            "account",
            ["a", "b", "c"].map(|n| Element::new("account").with_property("name", n)),
        );

        let items = element
            .child("account")
            .and_then(Child::as_collection)
            .unwrap();
        let names: Vec<&str> = items
            .iter()
            .filter_map(|e| e.property("name").and_then(Value::as_str))
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_optional_builders_skip_none() {
        let element = Element::new("root")
            .with_optional_property::<bool>("sync", None)
            .with_optional_child(None)
            .with_optional_text::<&str>(None);

        assert_eq!(element.properties().count(), 0);
        assert!(element.children().is_empty());
        assert!(!element.has_content());
    }

    #[test]
    fn test_has_content() {
        assert!(Element::new("id").with_text("x").has_content());
        assert!(Element::new("root").with_text_child("id", "x").has_content());
        assert!(!Element::new("root").with_property("id", "x").has_content());
    }

    #[test]
    fn test_empty_collection_has_no_content() {
        let element = Element::new("root").with_collection("a", Vec::new());
        assert!(element.child("a").is_some_and(Child::is_empty));
        assert!(!element.has_content());
    }

    #[test]
    fn test_remove_child() {
        let mut element = Element::new("root").with_text_child("id", "x");
        assert!(element.remove_child("id").is_some());
        assert!(element.child("id").is_none());
        assert!(element.remove_child("id").is_none());
    }
}
