//! Small value structs shared by many requests.

use zimbra_soap::{Element, Result, ToElement, required};

/// An element identified only by its `name` property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedElement {
    name: String,
}

impl NamedElement {
    /// Creates the element; `name` is trimmed and must not be blank.
    pub fn new(name: &str) -> Result<Self> {
        Ok(Self {
            name: required("name", name)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Trims `name` without re-validating it; a blank value is kept.
    pub fn set_name(&mut self, name: &str) -> &mut Self {
        self.name = name.trim().to_string();
        self
    }
}

impl ToElement for NamedElement {
    const ELEMENT_NAME: &'static str = "named";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name).with_property("name", self.name.as_str())
    }
}

/// A `<a n="key">value</a>` attribute pair.
///
/// The key is trimmed and required. The value is kept verbatim and may be
/// empty, which Zimbra reads as "unset this attribute".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValuePair {
    key: String,
    value: String,
}

impl KeyValuePair {
    pub fn new(key: &str, value: impl Into<String>) -> Result<Self> {
        Ok(Self {
            key: required("n", key)?,
            value: value.into(),
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Trims `key` without re-validating it; a blank value is kept.
    pub fn set_key(&mut self, key: &str) -> &mut Self {
        self.key = key.trim().to_string();
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) -> &mut Self {
        self.value = value.into();
        self
    }
}

impl ToElement for KeyValuePair {
    const ELEMENT_NAME: &'static str = "a";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name)
            .with_property("n", self.key.as_str())
            .with_text(self.value.as_str())
    }
}

/// Builds attribute pairs from `(key, value)` tuples.
pub fn key_value_pairs<I, K, V>(pairs: I) -> Result<Vec<KeyValuePair>>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(key, value)| KeyValuePair::new(key.as_ref(), value))
        .collect()
}

/// A query string with an optional result limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimitedQuery {
    value: String,
    limit: Option<u32>,
}

impl LimitedQuery {
    pub fn new(value: impl Into<String>, limit: Option<u32>) -> Self {
        Self {
            value: value.into(),
            limit,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) -> &mut Self {
        self.value = value.into();
        self
    }

    pub fn limit(&self) -> Option<u32> {
        self.limit
    }

    pub fn set_limit(&mut self, limit: Option<u32>) -> &mut Self {
        self.limit = limit;
        self
    }
}

impl ToElement for LimitedQuery {
    const ELEMENT_NAME: &'static str = "query";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name)
            .with_optional_property("limit", self.limit)
            .with_text(self.value.as_str())
    }
}

/// An account id paired with a migration action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdAndAction {
    id: String,
    action: String,
}

impl IdAndAction {
    pub fn new(id: &str, action: &str) -> Result<Self> {
        Ok(Self {
            id: required("id", id)?,
            action: required("action", action)?,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Trims `id` without re-validating it; a blank value is kept.
    pub fn set_id(&mut self, id: &str) -> &mut Self {
        self.id = id.trim().to_string();
        self
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    /// Trims `action` without re-validating it; a blank value is kept.
    pub fn set_action(&mut self, action: &str) -> &mut Self {
        self.action = action.trim().to_string();
        self
    }
}

impl ToElement for IdAndAction {
    const ELEMENT_NAME: &'static str = "ia";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name)
            .with_property("id", self.id.as_str())
            .with_property("action", self.action.as_str())
    }
}

/// An element carrying a single string `value` property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueAttrib {
    value: String,
}

impl ValueAttrib {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) -> &mut Self {
        self.value = value.into();
        self
    }
}

impl ToElement for ValueAttrib {
    const ELEMENT_NAME: &'static str = "match";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name).with_property("value", self.value.as_str())
    }
}

/// An element carrying a single integer `value` property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerValueAttrib {
    value: i32,
}

impl IntegerValueAttrib {
    pub fn new(value: i32) -> Self {
        Self { value }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn set_value(&mut self, value: i32) -> &mut Self {
        self.value = value;
        self
    }
}

impl ToElement for IntegerValueAttrib {
    const ELEMENT_NAME: &'static str = "priority";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name).with_property("value", self.value)
    }
}
