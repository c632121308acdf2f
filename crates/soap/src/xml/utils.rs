//! Utility functions and constants for XML serialization.

/// SOAP 1.2 envelope namespace URI.
pub const SOAP_ENVELOPE_NAMESPACE: &str = "http://www.w3.org/2003/05/soap-envelope";

/// Prefix bound to [`SOAP_ENVELOPE_NAMESPACE`] in generated envelopes.
pub const SOAP_PREFIX: &str = "soap";

/// Converts a Rust boolean to its string representation for XML.
pub fn bool_to_string(b: bool) -> &'static str {
    if b { "true" } else { "false" }
}

/// Joins a namespace prefix and a local name into a qualified name.
pub fn qualified_name(prefix: &str, local: &str) -> String {
    if prefix.is_empty() {
        local.to_string()
    } else {
        format!("{}:{}", prefix, local)
    }
}

/// Returns the `xmlns` attribute name that binds `prefix`.
pub fn namespace_attribute(prefix: &str) -> String {
    if prefix.is_empty() {
        return "xmlns".to_string();
    }
    qualified_name("xmlns", prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_to_string() {
        assert_eq!(bool_to_string(true), "true");
        assert_eq!(bool_to_string(false), "false");
    }

    #[test]
    fn test_qualified_name() {
        assert_eq!(qualified_name("soap", "Envelope"), "soap:Envelope");
        assert_eq!(qualified_name("", "context"), "context");
    }

    #[test]
    fn test_namespace_attribute() {
        assert_eq!(namespace_attribute("soap"), "xmlns:soap");
        assert_eq!(namespace_attribute(""), "xmlns");
    }
}
