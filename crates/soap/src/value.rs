//! Scalar values carried by element properties and text content.

use std::fmt;

use crate::xml::utils::bool_to_string;

/// A scalar property or text value.
///
/// Booleans and integers keep their type so the mapping form can emit JSON
/// booleans and numbers, while the XML form renders every variant as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// A string value.
    String(String),
    /// A signed integer value.
    Integer(i64),
    /// A boolean value, written as `true` / `false` in XML.
    Boolean(bool),
}

impl Value {
    /// Returns the string if this is a [`Value::String`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer if this is a [`Value::Integer`].
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the boolean if this is a [`Value::Boolean`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Converts the value into its JSON mapping counterpart.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Integer(i) => serde_json::Value::from(*i),
            Value::Boolean(b) => serde_json::Value::Bool(*b),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Boolean(b) => f.write_str(bool_to_string(*b)),
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::String(value.clone())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(i64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Integer(i64::from(value))
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Integer(i64::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_renders_xml_text() {
        assert_eq!(Value::from("start").to_string(), "start");
        assert_eq!(Value::from(42i64).to_string(), "42");
        assert_eq!(Value::from(true).to_string(), "true");
        assert_eq!(Value::from(false).to_string(), "false");
    }

    #[test]
    fn test_to_json_keeps_types() {
        assert_eq!(Value::from(true).to_json(), serde_json::json!(true));
        assert_eq!(Value::from(7u32).to_json(), serde_json::json!(7));
        assert_eq!(Value::from("x").to_json(), serde_json::json!("x"));
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::from("a").as_str(), Some("a"));
        assert_eq!(Value::from(3i32).as_i64(), Some(3));
        assert_eq!(Value::from(true).as_bool(), Some(true));
        assert_eq!(Value::from("a").as_bool(), None);
    }
}
