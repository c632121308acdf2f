use zimbra_soap::{ADMIN_NAMESPACE, Element, Request, Result, ToElement, required};

use crate::enums::{CertType, CsrType};

/// Fetches the certificates installed on a server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetCert {
    server: String,
    cert_type: CertType,
    option: Option<CsrType>,
}

impl GetCert {
    pub fn new(server: &str, cert_type: CertType, option: Option<CsrType>) -> Result<Self> {
        Ok(Self {
            server: required("server", server)?,
            cert_type,
            option,
        })
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    /// Trims `server` without re-validating it; a blank value is kept.
    pub fn set_server(&mut self, server: &str) -> &mut Self {
        self.server = server.trim().to_string();
        self
    }

    pub fn cert_type(&self) -> CertType {
        self.cert_type
    }

    pub fn set_cert_type(&mut self, cert_type: CertType) -> &mut Self {
        self.cert_type = cert_type;
        self
    }

    pub fn option(&self) -> Option<CsrType> {
        self.option
    }

    pub fn set_option(&mut self, option: CsrType) -> &mut Self {
        self.option = Some(option);
        self
    }
}

impl ToElement for GetCert {
    const ELEMENT_NAME: &'static str = "GetCertRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name)
            .with_property("server", self.server.as_str())
            .with_property("type", self.cert_type)
            .with_optional_property("option", self.option)
    }
}

impl Request for GetCert {
    const NAMESPACE: &'static str = ADMIN_NAMESPACE;
}

/// Fetches the pending certificate signing request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetCSR {
    server: Option<String>,
    csr_type: Option<CsrType>,
}

impl GetCSR {
    pub fn new(server: Option<&str>, csr_type: Option<CsrType>) -> Self {
        Self {
            server: server.map(|s| s.trim().to_string()),
            csr_type,
        }
    }

    pub fn server(&self) -> Option<&str> {
        self.server.as_deref()
    }

    pub fn set_server(&mut self, server: &str) -> &mut Self {
        self.server = Some(server.trim().to_string());
        self
    }

    pub fn csr_type(&self) -> Option<CsrType> {
        self.csr_type
    }

    pub fn set_csr_type(&mut self, csr_type: CsrType) -> &mut Self {
        self.csr_type = Some(csr_type);
        self
    }
}

impl ToElement for GetCSR {
    const ELEMENT_NAME: &'static str = "GetCSRRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name)
            .with_optional_property("server", self.server.as_ref())
            .with_optional_property("type", self.csr_type)
    }
}

impl Request for GetCSR {
    const NAMESPACE: &'static str = ADMIN_NAMESPACE;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_cert() {
        let request = GetCert::new("mail.example.com", CertType::Mailboxd, Some(CsrType::SelfSigned)).unwrap();
        assert_eq!(
            request.to_xml().unwrap(),
            r#"<GetCertRequest option="self" server="mail.example.com" type="mailboxd"/>"#
        );
        assert!(GetCert::new(" ", CertType::All, None).is_err());
    }

    #[test]
    fn test_get_csr() {
        assert_eq!(GetCSR::default().to_xml().unwrap(), "<GetCSRRequest/>");
        let mut request = GetCSR::new(Some("mail.example.com"), None);
        request.set_csr_type(CsrType::Commercial);
        assert_eq!(
            request.to_xml().unwrap(),
            r#"<GetCSRRequest server="mail.example.com" type="comm"/>"#
        );
        assert!("other".parse::<CsrType>().is_err());
    }
}
