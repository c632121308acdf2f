//! Admin authentication.

use zimbra_soap::{ADMIN_NAMESPACE, Element, Request, Result, ToElement, required};

use crate::required_secret;
use crate::structs::AccountSelector;

/// Authenticates an administrator.
///
/// Exactly one of the three credential forms is set by the constructors:
/// a name and password, an account selector and password, or an existing
/// auth token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Auth {
    name: Option<String>,
    password: Option<String>,
    auth_token: Option<String>,
    account: Option<AccountSelector>,
    virtual_host: Option<String>,
    persist_auth_token_cookie: Option<bool>,
}

impl Auth {
    /// Authenticates with an admin account name and password.
    pub fn by_name(name: &str, password: &str) -> Result<Self> {
        Ok(Self {
            name: Some(required("name", name)?),
            password: Some(required_secret("password", password)?),
            ..Self::default()
        })
    }

    /// Authenticates with an account selector and password.
    pub fn by_account(account: AccountSelector, password: &str) -> Result<Self> {
        Ok(Self {
            account: Some(account),
            password: Some(required_secret("password", password)?),
            ..Self::default()
        })
    }

    /// Validates an auth token obtained earlier.
    pub fn by_token(token: &str) -> Result<Self> {
        Ok(Self {
            auth_token: Some(required("authToken", token)?),
            ..Self::default()
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    pub fn account(&self) -> Option<&AccountSelector> {
        self.account.as_ref()
    }

    pub fn virtual_host(&self) -> Option<&str> {
        self.virtual_host.as_deref()
    }

    /// Names the virtual host the admin logs in through, for domain admins.
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
}

impl ToElement for Auth {
    const ELEMENT_NAME: &'static str = "AuthRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name)
            .with_optional_property("name", self.name.as_ref())
            .with_optional_property("password", self.password.as_ref())
            .with_optional_property("persistAuthTokenCookie", self.persist_auth_token_cookie)
            .with_optional_text_child("authToken", self.auth_token.as_ref())
            .with_optional_child(self.account.as_ref().map(ToElement::to_element))
            .with_optional_text_child("virtualHost", self.virtual_host.as_ref())
    }
}

impl Request for Auth {
    const NAMESPACE: &'static str = ADMIN_NAMESPACE;
}

/// Obtains an auth token for another account, as that account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelegateAuth {
    account: AccountSelector,
    duration: Option<u32>,
}

impl DelegateAuth {
    pub fn new(account: AccountSelector, duration: Option<u32>) -> Self {
        Self { account, duration }
    }

    pub fn account(&self) -> &AccountSelector {
        &self.account
    }

    pub fn set_account(&mut self, account: AccountSelector) -> &mut Self {
        self.account = account;
        self
    }

    /// Token lifetime in seconds.
    pub fn duration(&self) -> Option<u32> {
        self.duration
    }

    pub fn set_duration(&mut self, duration: u32) -> &mut Self {
        self.duration = Some(duration);
        self
    }
}

impl ToElement for DelegateAuth {
    const ELEMENT_NAME: &'static str = "DelegateAuthRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name)
            .with_optional_property("duration", self.duration)
            .with_child(self.account.to_element())
    }
}

impl Request for DelegateAuth {
    const NAMESPACE: &'static str = ADMIN_NAMESPACE;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::AccountBy;

    #[test]
    fn test_auth_by_name() {
        let mut request = Auth::by_name(" admin@example.com ", "secret").unwrap();
        request.set_virtual_host("mail.example.com");
        assert_eq!(
            request.to_xml().unwrap(),
            concat!(
                r#"<AuthRequest name="admin@example.com" password="secret">"#,
                r#"<virtualHost>mail.example.com</virtualHost></AuthRequest>"#
            )
        );
    }

    #[test]
    fn test_auth_by_account() {
        let account = AccountSelector::new(AccountBy::AdminName, "admin").unwrap();
        let request = Auth::by_account(account, "secret").unwrap();
        assert!(request.name().is_none());
        assert_eq!(
            request.to_xml().unwrap(),
            r#"<AuthRequest password="secret"><account by="adminName">admin</account></AuthRequest>"#
        );
    }

    #[test]
    fn test_auth_by_token() {
        let mut request = Auth::by_token("0_abc").unwrap();
        request.set_persist_auth_token_cookie(true);
        assert_eq!(
            request.to_array(),
            serde_json::json!({"AuthRequest": {"persistAuthTokenCookie": true, "authToken": "0_abc"}})
        );
        assert!(Auth::by_token(" ").is_err());
        assert!(Auth::by_name("admin", "").is_err());
    }

    #[test]
    fn test_delegate_auth() {
        let account = AccountSelector::new(AccountBy::Name, "user@example.com").unwrap();
        let request = DelegateAuth::new(account, Some(3600));
        assert_eq!(
            request.to_xml().unwrap(),
            r#"<DelegateAuthRequest duration="3600"><account by="name">user@example.com</account></DelegateAuthRequest>"#
        );
    }
}
