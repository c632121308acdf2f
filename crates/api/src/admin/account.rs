//! Account provisioning and lookup.

use zimbra_soap::{ADMIN_NAMESPACE, Element, Request, Result, ToElement, TypedCollection, required};

use crate::required_secret;
use crate::structs::{AccountSelector, DomainSelector, IdAndAction, KeyValuePair, ServerSelector};

/// Adds an alias to an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddAccountAlias {
    id: String,
    alias: String,
}

impl AddAccountAlias {
    pub fn new(id: &str, alias: &str) -> Result<Self> {
        Ok(Self {
            id: required("id", id)?,
            alias: required("alias", alias)?,
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

    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Trims `alias` without re-validating it; a blank value is kept.
    pub fn set_alias(&mut self, alias: &str) -> &mut Self {
        self.alias = alias.trim().to_string();
        self
    }
}

impl ToElement for AddAccountAlias {
    const ELEMENT_NAME: &'static str = "AddAccountAliasRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name)
            .with_property("id", self.id.as_str())
            .with_property("alias", self.alias.as_str())
    }
}

impl Request for AddAccountAlias {
    const NAMESPACE: &'static str = ADMIN_NAMESPACE;
}

/// Removes an alias; without an id the alias is removed wherever it points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveAccountAlias {
    alias: String,
    id: Option<String>,
}

impl RemoveAccountAlias {
    pub fn new(alias: &str, id: Option<&str>) -> Result<Self> {
        Ok(Self {
            alias: required("alias", alias)?,
            id: id.map(|id| id.trim().to_string()),
        })
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id(&mut self, id: &str) -> &mut Self {
        self.id = Some(id.trim().to_string());
        self
    }
}

impl ToElement for RemoveAccountAlias {
    const ELEMENT_NAME: &'static str = "RemoveAccountAliasRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name)
            .with_property("alias", self.alias.as_str())
            .with_optional_property("id", self.id.as_ref())
    }
}

impl Request for RemoveAccountAlias {
    const NAMESPACE: &'static str = ADMIN_NAMESPACE;
}

/// Creates an account.
///
/// The password is optional; accounts authenticating elsewhere (external
/// LDAP, preauth) are usually created without one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAccount {
    name: String,
    password: Option<String>,
    attrs: TypedCollection<KeyValuePair>,
}

impl CreateAccount {
    pub fn new(
        name: &str,
        password: Option<&str>,
        attrs: impl IntoIterator<Item = KeyValuePair>,
    ) -> Result<Self> {
        Ok(Self {
            name: required("name", name)?,
            password: password.map(|p| required_secret("password", p)).transpose()?,
            attrs: attrs.into_iter().collect(),
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

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn set_password(&mut self, password: impl Into<String>) -> &mut Self {
        self.password = Some(password.into());
        self
    }

    attr_accessors!();
}

impl ToElement for CreateAccount {
    const ELEMENT_NAME: &'static str = "CreateAccountRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name)
            .with_property("name", self.name.as_str())
            .with_optional_property("password", self.password.as_ref())
            .with_collection("a", self.attrs.to_elements("a"))
    }
}

impl Request for CreateAccount {
    const NAMESPACE: &'static str = ADMIN_NAMESPACE;
}

/// Deletes the account with the given zimbra id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteAccount {
    id: String,
}

impl DeleteAccount {
    pub fn new(id: &str) -> Result<Self> {
        Ok(Self {
            id: required("id", id)?,
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
}

impl ToElement for DeleteAccount {
    const ELEMENT_NAME: &'static str = "DeleteAccountRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name).with_property("id", self.id.as_str())
    }
}

impl Request for DeleteAccount {
    const NAMESPACE: &'static str = ADMIN_NAMESPACE;
}

/// Changes attributes of an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifyAccount {
    id: String,
    attrs: TypedCollection<KeyValuePair>,
}

impl ModifyAccount {
    pub fn new(id: &str, attrs: impl IntoIterator<Item = KeyValuePair>) -> Result<Self> {
        Ok(Self {
            id: required("id", id)?,
            attrs: attrs.into_iter().collect(),
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

    attr_accessors!();
}

impl ToElement for ModifyAccount {
    const ELEMENT_NAME: &'static str = "ModifyAccountRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name)
            .with_property("id", self.id.as_str())
            .with_collection("a", self.attrs.to_elements("a"))
    }
}

impl Request for ModifyAccount {
    const NAMESPACE: &'static str = ADMIN_NAMESPACE;
}

/// Renames an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameAccount {
    id: String,
    new_name: String,
}

impl RenameAccount {
    pub fn new(id: &str, new_name: &str) -> Result<Self> {
        Ok(Self {
            id: required("id", id)?,
            new_name: required("newName", new_name)?,
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

    pub fn new_name(&self) -> &str {
        &self.new_name
    }

    /// Trims `new_name` without re-validating it; a blank value is kept.
    pub fn set_new_name(&mut self, new_name: &str) -> &mut Self {
        self.new_name = new_name.trim().to_string();
        self
    }
}

impl ToElement for RenameAccount {
    const ELEMENT_NAME: &'static str = "RenameAccountRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name)
            .with_property("id", self.id.as_str())
            .with_property("newName", self.new_name.as_str())
    }
}

impl Request for RenameAccount {
    const NAMESPACE: &'static str = ADMIN_NAMESPACE;
}

/// Sets an account password. The password is sent verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetPassword {
    id: String,
    new_password: String,
}

impl SetPassword {
    pub fn new(id: &str, new_password: &str) -> Result<Self> {
        Ok(Self {
            id: required("id", id)?,
            new_password: required_secret("newPassword", new_password)?,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn new_password(&self) -> &str {
        &self.new_password
    }

    pub fn set_new_password(&mut self, new_password: impl Into<String>) -> &mut Self {
        self.new_password = new_password.into();
        self
    }
}

impl ToElement for SetPassword {
    const ELEMENT_NAME: &'static str = "SetPasswordRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name)
            .with_property("id", self.id.as_str())
            .with_property("newPassword", self.new_password.as_str())
    }
}

impl Request for SetPassword {
    const NAMESPACE: &'static str = ADMIN_NAMESPACE;
}

/// Fetches an account's attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetAccount {
    account: Option<AccountSelector>,
    apply_cos: Option<bool>,
    attrs: Option<String>,
}

impl GetAccount {
    pub fn new(account: Option<AccountSelector>) -> Self {
        Self {
            account,
            ..Self::default()
        }
    }

    pub fn account(&self) -> Option<&AccountSelector> {
        self.account.as_ref()
    }

    pub fn set_account(&mut self, account: AccountSelector) -> &mut Self {
        self.account = Some(account);
        self
    }

    pub fn apply_cos(&self) -> Option<bool> {
        self.apply_cos
    }

    /// Fills unset attributes with the values inherited from the COS.
    pub fn set_apply_cos(&mut self, apply_cos: bool) -> &mut Self {
        self.apply_cos = Some(apply_cos);
        self
    }

    pub fn attrs(&self) -> Option<&str> {
        self.attrs.as_deref()
    }

    /// Restricts the reply to a comma separated list of attribute names.
    pub fn set_attrs(&mut self, attrs: &str) -> &mut Self {
        self.attrs = Some(attrs.trim().to_string());
        self
    }
}

impl ToElement for GetAccount {
    const ELEMENT_NAME: &'static str = "GetAccountRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name)
            .with_optional_property("applyCos", self.apply_cos)
            .with_optional_property("attrs", self.attrs.as_ref())
            .with_optional_child(self.account.as_ref().map(ToElement::to_element))
    }
}

impl Request for GetAccount {
    const NAMESPACE: &'static str = ADMIN_NAMESPACE;
}

/// Fetches summary information (COS, SOAP URLs) about an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetAccountInfo {
    account: AccountSelector,
}

impl GetAccountInfo {
    pub fn new(account: AccountSelector) -> Self {
        Self { account }
    }

    pub fn account(&self) -> &AccountSelector {
        &self.account
    }

    pub fn set_account(&mut self, account: AccountSelector) -> &mut Self {
        self.account = account;
        self
    }
}

impl ToElement for GetAccountInfo {
    const ELEMENT_NAME: &'static str = "GetAccountInfoRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name).with_child(self.account.to_element())
    }
}

impl Request for GetAccountInfo {
    const NAMESPACE: &'static str = ADMIN_NAMESPACE;
}

/// Lists accounts, optionally restricted to a server and/or a domain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetAllAccounts {
    server: Option<ServerSelector>,
    domain: Option<DomainSelector>,
}

impl GetAllAccounts {
    pub fn new(server: Option<ServerSelector>, domain: Option<DomainSelector>) -> Self {
        Self { server, domain }
    }

    pub fn server(&self) -> Option<&ServerSelector> {
        self.server.as_ref()
    }

    pub fn set_server(&mut self, server: ServerSelector) -> &mut Self {
        self.server = Some(server);
        self
    }

    pub fn domain(&self) -> Option<&DomainSelector> {
        self.domain.as_ref()
    }

    pub fn set_domain(&mut self, domain: DomainSelector) -> &mut Self {
        self.domain = Some(domain);
        self
    }
}

impl ToElement for GetAllAccounts {
    const ELEMENT_NAME: &'static str = "GetAllAccountsRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name)
            .with_optional_child(self.server.as_ref().map(ToElement::to_element))
            .with_optional_child(self.domain.as_ref().map(ToElement::to_element))
    }
}

impl Request for GetAllAccounts {
    const NAMESPACE: &'static str = ADMIN_NAMESPACE;
}

/// Lists accounts with admin rights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetAllAdminAccounts {
    apply_cos: Option<bool>,
}

impl GetAllAdminAccounts {
    pub fn new(apply_cos: Option<bool>) -> Self {
        Self { apply_cos }
    }

    pub fn apply_cos(&self) -> Option<bool> {
        self.apply_cos
    }

    pub fn set_apply_cos(&mut self, apply_cos: bool) -> &mut Self {
        self.apply_cos = Some(apply_cos);
        self
    }
}

impl ToElement for GetAllAdminAccounts {
    const ELEMENT_NAME: &'static str = "GetAllAdminAccountsRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name).with_optional_property("applyCos", self.apply_cos)
    }
}

impl Request for GetAllAdminAccounts {
    const NAMESPACE: &'static str = ADMIN_NAMESPACE;
}

/// Counts accounts per COS in a domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountAccount {
    domain: DomainSelector,
}

impl CountAccount {
    pub fn new(domain: DomainSelector) -> Self {
        Self { domain }
    }

    pub fn domain(&self) -> &DomainSelector {
        &self.domain
    }

    pub fn set_domain(&mut self, domain: DomainSelector) -> &mut Self {
        self.domain = domain;
        self
    }
}

impl ToElement for CountAccount {
    const ELEMENT_NAME: &'static str = "CountAccountRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name).with_child(self.domain.to_element())
    }
}

impl Request for CountAccount {
    const NAMESPACE: &'static str = ADMIN_NAMESPACE;
}

/// Migrates an account between mailbox servers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrateAccount {
    migrate: IdAndAction,
}

impl MigrateAccount {
    pub fn new(migrate: IdAndAction) -> Self {
        Self { migrate }
    }

    pub fn migrate(&self) -> &IdAndAction {
        &self.migrate
    }

    pub fn set_migrate(&mut self, migrate: IdAndAction) -> &mut Self {
        self.migrate = migrate;
        self
    }
}

impl ToElement for MigrateAccount {
    const ELEMENT_NAME: &'static str = "MigrateAccountRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name).with_child(self.migrate.to_element_named("migrate"))
    }
}

impl Request for MigrateAccount {
    const NAMESPACE: &'static str = ADMIN_NAMESPACE;
}
