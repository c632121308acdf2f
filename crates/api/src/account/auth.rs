use zimbra_soap::{ACCOUNT_NAMESPACE, Element, Request, Result, ToElement, required};

use crate::account::{Attrs, PreAuth};
use crate::required_secret;
use crate::structs::AccountSelector;

/// Authenticates an end user, by password or by preauth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Auth {
    account: Option<AccountSelector>,
    password: Option<String>,
    preauth: Option<PreAuth>,
    auth_token: Option<String>,
    virtual_host: Option<String>,
    persist_auth_token_cookie: Option<bool>,
    attrs: Option<Attrs>,
}

impl Auth {
    pub fn new(
        account: Option<AccountSelector>,
        password: Option<&str>,
        preauth: Option<PreAuth>,
        auth_token: Option<&str>,
        virtual_host: Option<&str>,
    ) -> Self {
        Self {
            account,
            password: password.map(str::to_string),
            preauth,
            auth_token: auth_token.map(|t| t.trim().to_string()),
            virtual_host: virtual_host.map(|v| v.trim().to_string()),
            persist_auth_token_cookie: None,
            attrs: None,
        }
    }

    /// Password login.
    pub fn with_password(account: AccountSelector, password: &str) -> Result<Self> {
        let password = required_secret("password", password)?;
        Ok(Self::new(Some(account), Some(&password), None, None, None))
    }

    /// Preauth login; `preauth` must already carry its computed value.
    pub fn with_preauth(account: AccountSelector, preauth: PreAuth) -> Result<Self> {
        if preauth.value().is_none_or(str::is_empty) {
            return Err(zimbra_soap::SoapError::invalid_argument(
                "preauth",
                "preauth value has not been computed",
            ));
        }
        Ok(Self::new(Some(account), None, Some(preauth), None, None))
    }

    /// Validates an existing token.
    pub fn with_token(token: &str) -> Result<Self> {
        let token = required("authToken", token)?;
        Ok(Self::new(None, None, None, Some(&token), None))
    }

    pub fn account(&self) -> Option<&AccountSelector> {
        self.account.as_ref()
    }

    pub fn set_account(&mut self, account: AccountSelector) -> &mut Self {
        self.account = Some(account);
        self
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn set_password(&mut self, password: impl Into<String>) -> &mut Self {
        self.password = Some(password.into());
        self
    }

    pub fn preauth(&self) -> Option<&PreAuth> {
        self.preauth.as_ref()
    }

    pub fn set_preauth(&mut self, preauth: PreAuth) -> &mut Self {
        self.preauth = Some(preauth);
        self
    }

    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    pub fn set_auth_token(&mut self, token: &str) -> &mut Self {
        self.auth_token = Some(token.trim().to_string());
        self
    }

    pub fn virtual_host(&self) -> Option<&str> {
        self.virtual_host.as_deref()
    }

    pub fn set_virtual_host(&mut self, virtual_host: &str) -> &mut Self {
        self.virtual_host = Some(virtual_host.trim().to_string());
        self
    }

    pub fn persist_auth_token_cookie(&self) -> Option<bool> {
        self.persist_auth_token_cookie
    }

    pub fn set_persist_auth_token_cookie(&mut self, persist: bool) -> &mut Self {
        self.persist_auth_token_cookie = Some(persist);
        self
    }

    /// Preference attributes to return with the token.
    pub fn attrs(&self) -> Option<&Attrs> {
        self.attrs.as_ref()
    }

    pub fn set_attrs(&mut self, attrs: Attrs) -> &mut Self {
        self.attrs = Some(attrs);
        self
    }
}

impl ToElement for Auth {
    const ELEMENT_NAME: &'static str = "AuthRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name)
            .with_optional_property("persistAuthTokenCookie", self.persist_auth_token_cookie)
            .with_optional_child(self.account.as_ref().map(ToElement::to_element))
            .with_optional_text_child("password", self.password.as_ref())
            .with_optional_child(self.preauth.as_ref().map(ToElement::to_element))
            .with_optional_text_child("authToken", self.auth_token.as_ref())
            .with_optional_text_child("virtualHost", self.virtual_host.as_ref())
            .with_optional_child(self.attrs.as_ref().map(ToElement::to_element))
    }
}

impl Request for Auth {
    const NAMESPACE: &'static str = ACCOUNT_NAMESPACE;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::AccountBy;

    fn account() -> AccountSelector {
        AccountSelector::new(AccountBy::Name, "john.doe@domain.com").unwrap()
    }

    #[test]
    fn test_password_auth() {
        let request = Auth::with_password(account(), "secret").unwrap();
        assert_eq!(
            request.to_xml().unwrap(),
            concat!(
                r#"<AuthRequest><account by="name">john.doe@domain.com</account>"#,
                r#"<password>secret</password></AuthRequest>"#
            )
        );
    }

    #[test]
    fn test_preauth_auth() {
        let mut preauth = PreAuth::new(1135280708088, None, None);
        preauth
            .compute_value(
                &account(),
                "6b7ead4bd425836e8cf0079cd6c1a05acc127acd07c8ee4b61023e19250e929c",
            )
            .unwrap();
        let request = Auth::with_preauth(account(), preauth).unwrap();
        let xml = request.to_xml().unwrap();
        assert!(xml.contains(
            r#"<preauth timestamp="1135280708088">b248f6cfd027edd45c5369f8490125204772f844</preauth>"#
        ));
    }

    #[test]
    fn test_preauth_without_value_is_rejected() {
        let preauth = PreAuth::new(1135280708088, None, None);
        assert!(Auth::with_preauth(account(), preauth).is_err());
    }

    #[test]
    fn test_token_auth_envelope_namespace() {
        let request = Auth::with_token("0_abc").unwrap();
        let json = request.envelope().to_json();
        assert_eq!(json["Body"]["AuthRequest"]["_jsns"], "urn:zimbraAccount");
        assert_eq!(json["Body"]["AuthRequest"]["authToken"], "0_abc");
    }
}
