//! Ordered, single-type collections that serialize as repeated children.

use std::slice;

use crate::element::{Child, Element};
use crate::request::ToElement;

/// An append-only sequence of `T` that becomes repeated child elements.
///
/// Items are converted with [`ToElement::to_element_named`] using the child
/// name given at serialization time, so the collection itself does not need to
/// know where it will be placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedCollection<T> {
    items: Vec<T>,
}

impl<T> TypedCollection<T> {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends an item.
    pub fn add(&mut self, item: T) -> &mut Self {
        self.items.push(item);
        self
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when the collection holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the items in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns the items as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: ToElement> TypedCollection<T> {
    /// Converts every item into an element named `name`.
    pub fn to_elements(&self, name: &str) -> Vec<Element> {
        self.items
            .iter()
            .map(|item| item.to_element_named(name))
            .collect()
    }

    /// Materializes the collection as a [`Child::Collection`] under `name`.
    pub fn to_child(&self, name: &str) -> Child {
        Child::Collection {
            name: name.to_string(),
            items: self.to_elements(name),
        }
    }
}

impl<T> Default for TypedCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for TypedCollection<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for TypedCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for TypedCollection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<'a, T> IntoIterator for &'a TypedCollection<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for TypedCollection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Account(&'static str);

    impl ToElement for Account {
        const ELEMENT_NAME: &'static str = "account";

        fn to_element_named(&self, name: &str) -> Element {
            Element::new(name).with_property("name", self.0)
        }
    }

    #[test]
    fn test_add_preserves_order() {
        let mut accounts = TypedCollection::new();
        accounts.add(Account("one")).add(Account("two"));
        accounts.extend([Account("three")]);

        assert_eq!(accounts.len(), 3);
        let names: Vec<&str> = accounts.iter().map(|a| a.0).collect();
        assert_eq!(names, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_to_child_uses_given_name() {
        let accounts: TypedCollection<Account> = vec![Account("a"), Account("b")].into();
        let child = accounts.to_child("acct");

        assert_eq!(child.name(), "acct");
        let items = child.as_collection().unwrap();
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|e| e.name() == "acct"));
    }

    #[test]
    fn test_default_is_empty() {
        let accounts: TypedCollection<Account> = TypedCollection::default();
        assert!(accounts.is_empty());
        assert!(accounts.to_child("account").is_empty());
    }
}
