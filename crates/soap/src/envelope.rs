//! SOAP envelope construction.
//!
//! Zimbra carries authentication and session state in a `context` header
//! element in the `urn:zimbra` namespace. [`Envelope`] combines that header
//! with a serialized request body; sending it is left to the caller's HTTP
//! client.
//!
//! ```
//! use zimbra_soap::{Element, Envelope, Request, ToElement};
//!
//! struct NoOp;
//!
//! impl ToElement for NoOp {
//!     const ELEMENT_NAME: &'static str = "NoOpRequest";
//!     fn to_element_named(&self, name: &str) -> Element {
//!         Element::new(name)
//!     }
//! }
//!
//! impl Request for NoOp {
//!     const NAMESPACE: &'static str = "urn:zimbraAdmin";
//! }
//!
//! let xml = Envelope::new(&NoOp).with_auth_token("token").to_xml().unwrap();
//! assert!(xml.contains("<authToken>token</authToken>"));
//! assert!(xml.contains(r#"<NoOpRequest xmlns="urn:zimbraAdmin"/>"#));
//! ```

use serde_json::{Map, Value as JsonValue};
use tracing::debug;

use crate::element::Element;
use crate::error::Result;
use crate::json;
use crate::request::Request;
use crate::xml::utils::{SOAP_ENVELOPE_NAMESPACE, SOAP_PREFIX, namespace_attribute, qualified_name};
use crate::xml;

/// Namespace of the Zimbra header context.
pub const ZIMBRA_NAMESPACE: &str = "urn:zimbra";

/// Namespace of admin requests.
pub const ADMIN_NAMESPACE: &str = "urn:zimbraAdmin";

/// Namespace of account requests.
pub const ACCOUNT_NAMESPACE: &str = "urn:zimbraAccount";

/// Session handling requested in the header context.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Session {
    /// Join an existing session.
    Id(String),
    /// Ask the server not to create a session.
    Disabled,
}

/// Header context fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Context {
    auth_token: Option<String>,
    session: Option<Session>,
    user_agent: Option<(String, Option<String>)>,
    account: Option<(String, String)>,
}

impl Context {
    fn to_element(&self) -> Element {
        let session = self.session.as_ref().map(|session| match session {
            Session::Id(id) => Element::new("session").with_property("id", id),
            Session::Disabled => Element::new("nosession"),
        });
        let user_agent = self.user_agent.as_ref().map(|(name, version)| {
            Element::new("userAgent")
                .with_property("name", name)
                .with_optional_property("version", version.as_ref())
        });
        let account = self
            .account
            .as_ref()
            .map(|(by, value)| Element::new("account").with_property("by", by).with_text(value));

        Element::new("context")
            .with_optional_text_child("authToken", self.auth_token.as_ref())
            .with_optional_child(session)
            .with_optional_child(user_agent)
            .with_optional_child(account)
    }
}

/// A SOAP envelope wrapping one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    body: Element,
    namespace: &'static str,
    context: Context,
}

impl Envelope {
    /// Wraps `request`, serialized under its default element name.
    pub fn new<R: Request>(request: &R) -> Self {
        debug!(
            request = R::ELEMENT_NAME,
            namespace = R::NAMESPACE,
            "building SOAP envelope"
        );
        Self {
            body: request.to_element(),
            namespace: R::NAMESPACE,
            context: Context::default(),
        }
    }

    /// Adds the authentication token obtained from an earlier auth request.
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.context.auth_token = Some(token.into());
        self
    }

    /// Joins an existing server session.
    pub fn with_session(mut self, id: impl Into<String>) -> Self {
        self.context.session = Some(Session::Id(id.into()));
        self
    }

    /// Asks the server not to create a session for this request.
    pub fn without_session(mut self) -> Self {
        self.context.session = Some(Session::Disabled);
        self
    }

    /// Identifies the client application.
    pub fn with_user_agent(mut self, name: impl Into<String>, version: Option<String>) -> Self {
        self.context.user_agent = Some((name.into(), version));
        self
    }

    /// Runs the request on behalf of another account (`by` is e.g. `name` or `id`).
    pub fn with_account(mut self, by: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.account = Some((by.into(), value.into()));
        self
    }

    /// Returns the request element carried in the body.
    pub fn body(&self) -> &Element {
        &self.body
    }

    /// Returns the namespace of the body request.
    pub fn namespace(&self) -> &'static str {
        self.namespace
    }

    /// Builds the full `soap:Envelope` element tree.
    pub fn to_element(&self) -> Element {
        let mut body = self.body.clone();
        body.set_property("xmlns", self.namespace);

        let context = self
            .context
            .to_element()
            .with_property("xmlns", ZIMBRA_NAMESPACE);

        Element::new(qualified_name(SOAP_PREFIX, "Envelope"))
            .with_property(namespace_attribute(SOAP_PREFIX), SOAP_ENVELOPE_NAMESPACE)
            .with_child(Element::new(qualified_name(SOAP_PREFIX, "Header")).with_child(context))
            .with_child(Element::new(qualified_name(SOAP_PREFIX, "Body")).with_child(body))
    }

    /// Serializes the envelope to an XML document.
    pub fn to_xml(&self) -> Result<String> {
        xml::to_xml_document(&self.to_element())
    }

    /// Serializes the envelope to Zimbra's JSON SOAP form.
    pub fn to_json(&self) -> JsonValue {
        let mut header = Map::new();
        header.insert(
            "context".to_string(),
            json::element_body_with_namespace(&self.context.to_element(), ZIMBRA_NAMESPACE),
        );

        let mut body = Map::new();
        body.insert(
            self.body.name().to_string(),
            json::element_body_with_namespace(&self.body, self.namespace),
        );

        let mut envelope = Map::new();
        envelope.insert("Header".to_string(), JsonValue::Object(header));
        envelope.insert("Body".to_string(), JsonValue::Object(body));
        JsonValue::Object(envelope)
    }

    /// Serializes the envelope to an indented XML document.
    pub fn to_xml_pretty(&self) -> Result<String> {
        xml::to_xml_document_pretty(&self.to_element())
    }

    /// Serializes the JSON form to a string.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_json())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::ToElement;
    use serde_json::json;

    struct DeleteAccount {
        id: &'static str,
    }

    impl ToElement for DeleteAccount {
        const ELEMENT_NAME: &'static str = "DeleteAccountRequest";

        fn to_element_named(&self, name: &str) -> Element {
            Element::new(name).with_property("id", self.id)
        }
    }

    impl Request for DeleteAccount {
        const NAMESPACE: &'static str = ADMIN_NAMESPACE;
    }

    #[test]
    fn test_xml_envelope_layout() {
        let envelope = Envelope::new(&DeleteAccount { id: "42" })
            .with_auth_token("tok")
            .without_session();
        let xml = envelope.to_xml().unwrap();

        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(
            r#"<soap:Envelope xmlns:soap="http://www.w3.org/2003/05/soap-envelope">"#
        ));
        assert!(xml.contains(
            r#"<soap:Header><context xmlns="urn:zimbra"><authToken>tok</authToken><nosession/></context></soap:Header>"#
        ));
        assert!(xml.contains(
            r#"<soap:Body><DeleteAccountRequest id="42" xmlns="urn:zimbraAdmin"/></soap:Body>"#
        ));
    }

    #[test]
    fn test_empty_context_is_written() {
        let xml = DeleteAccount { id: "1" }.envelope().to_xml().unwrap();
        assert!(xml.contains(r#"<soap:Header><context xmlns="urn:zimbra"/></soap:Header>"#));
    }

    #[test]
    fn test_json_envelope() {
        let envelope = Envelope::new(&DeleteAccount { id: "42" })
            .with_auth_token("tok")
            .with_session("7")
            .with_user_agent("zmsoap", Some("0.1.0".to_string()));

        assert_eq!(
            envelope.to_json(),
            json!({
                "Header": {
                    "context": {
                        "_jsns": "urn:zimbra",
                        "authToken": "tok",
                        "session": {"id": "7"},
                        "userAgent": {"name": "zmsoap", "version": "0.1.0"}
                    }
                },
                "Body": {
                    "DeleteAccountRequest": {"_jsns": "urn:zimbraAdmin", "id": "42"}
                }
            })
        );
    }

    #[test]
    fn test_pretty_envelope() {
        let xml = DeleteAccount { id: "42" }.envelope().to_xml_pretty().unwrap();
        assert!(xml.contains("\n  <soap:Header>"));
        assert!(xml.contains("\n    <DeleteAccountRequest id=\"42\" xmlns=\"urn:zimbraAdmin\"/>"));
    }

    #[test]
    fn test_account_header() {
        let envelope =
            Envelope::new(&DeleteAccount { id: "42" }).with_account("name", "user@example.com");
        let xml = envelope.to_xml().unwrap();
        assert!(xml.contains(r#"<account by="name">user@example.com</account>"#));
    }
}
