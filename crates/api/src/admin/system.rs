//! Server-wide maintenance: provisioning, GAL checks, LDAP, caches, loggers,
//! mail queues and UC services.

use zimbra_soap::{ADMIN_NAMESPACE, Element, Request, Result, ToElement, TypedCollection, required};

use crate::enums::{AutoProvTaskAction, GalConfigAction};
use crate::structs::{AccountSelector, CacheSelector, KeyValuePair, LimitedQuery, ServerWithQueueAction};

/// Starts, stops or queries the auto provisioning background task.
///
/// ```
/// use zimbra_api::admin::AutoProvTaskControl;
/// use zimbra_api::enums::AutoProvTaskAction;
/// use zimbra_soap::ToElement;
///
/// let request = AutoProvTaskControl::new(AutoProvTaskAction::Start);
/// assert_eq!(
///     request.to_xml_named("autoProvTaskControl").unwrap(),
///     r#"<autoProvTaskControl action="start"/>"#
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoProvTaskControl {
    action: AutoProvTaskAction,
}

impl AutoProvTaskControl {
    pub fn new(action: AutoProvTaskAction) -> Self {
        Self { action }
    }

    pub fn action(&self) -> AutoProvTaskAction {
        self.action
    }

    pub fn set_action(&mut self, action: AutoProvTaskAction) -> &mut Self {
        self.action = action;
        self
    }
}

impl ToElement for AutoProvTaskControl {
    const ELEMENT_NAME: &'static str = "AutoProvTaskControlRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name).with_property("action", self.action)
    }
}

impl Request for AutoProvTaskControl {
    const NAMESPACE: &'static str = ADMIN_NAMESPACE;
}

/// Checks a GAL configuration given as `zimbraGal*` attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckGalConfig {
    query: Option<LimitedQuery>,
    action: Option<GalConfigAction>,
    attrs: TypedCollection<KeyValuePair>,
}

impl CheckGalConfig {
    pub fn new(
        query: Option<LimitedQuery>,
        action: Option<GalConfigAction>,
        attrs: impl IntoIterator<Item = KeyValuePair>,
    ) -> Self {
        Self {
            query,
            action,
            attrs: attrs.into_iter().collect(),
        }
    }

    pub fn query(&self) -> Option<&LimitedQuery> {
        self.query.as_ref()
    }

    pub fn set_query(&mut self, query: LimitedQuery) -> &mut Self {
        self.query = Some(query);
        self
    }

    pub fn action(&self) -> Option<GalConfigAction> {
        self.action
    }

    pub fn set_action(&mut self, action: GalConfigAction) -> &mut Self {
        self.action = Some(action);
        self
    }

    attr_accessors!();
}

impl ToElement for CheckGalConfig {
    const ELEMENT_NAME: &'static str = "CheckGalConfigRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name)
            .with_optional_child(self.query.as_ref().map(ToElement::to_element))
            .with_optional_text_child("action", self.action)
            .with_collection("a", self.attrs.to_elements("a"))
    }
}

impl Request for CheckGalConfig {
    const NAMESPACE: &'static str = ADMIN_NAMESPACE;
}

/// Deletes an arbitrary LDAP entry by distinguished name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteLDAPEntry {
    dn: String,
}

impl DeleteLDAPEntry {
    /// Creates the request; `dn` is trimmed and must not be blank.
    pub fn new(dn: &str) -> Result<Self> {
        Ok(Self {
            dn: required("dn", dn)?,
        })
    }

    pub fn dn(&self) -> &str {
        &self.dn
    }

    /// Trims `dn` without re-validating it; a blank value is kept.
    pub fn set_dn(&mut self, dn: &str) -> &mut Self {
        self.dn = dn.trim().to_string();
        self
    }
}

impl ToElement for DeleteLDAPEntry {
    const ELEMENT_NAME: &'static str = "DeleteLDAPEntryRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name).with_property("dn", self.dn.as_str())
    }
}

impl Request for DeleteLDAPEntry {
    const NAMESPACE: &'static str = ADMIN_NAMESPACE;
}

/// Flushes server caches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlushCache {
    cache: Option<CacheSelector>,
}

impl FlushCache {
    pub fn new(cache: Option<CacheSelector>) -> Self {
        Self { cache }
    }

    pub fn cache(&self) -> Option<&CacheSelector> {
        self.cache.as_ref()
    }

    pub fn set_cache(&mut self, cache: CacheSelector) -> &mut Self {
        self.cache = Some(cache);
        self
    }
}

impl ToElement for FlushCache {
    const ELEMENT_NAME: &'static str = "FlushCacheRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name).with_optional_child(self.cache.as_ref().map(ToElement::to_element))
    }
}

impl Request for FlushCache {
    const NAMESPACE: &'static str = ADMIN_NAMESPACE;
}

/// Lists custom loggers, for one account or for all of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetAccountLoggers {
    account: Option<AccountSelector>,
}

impl GetAccountLoggers {
    pub fn new(account: Option<AccountSelector>) -> Self {
        Self { account }
    }

    pub fn account(&self) -> Option<&AccountSelector> {
        self.account.as_ref()
    }

    pub fn set_account(&mut self, account: AccountSelector) -> &mut Self {
        self.account = Some(account);
        self
    }
}

impl ToElement for GetAccountLoggers {
    const ELEMENT_NAME: &'static str = "GetAccountLoggersRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name).with_optional_child(self.account.as_ref().map(ToElement::to_element))
    }
}

impl Request for GetAccountLoggers {
    const NAMESPACE: &'static str = ADMIN_NAMESPACE;
}

/// Holds, releases, deletes or requeues messages in a server's mail queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailQueueAction {
    server: ServerWithQueueAction,
}

impl MailQueueAction {
    pub fn new(server: ServerWithQueueAction) -> Self {
        Self { server }
    }

    pub fn server(&self) -> &ServerWithQueueAction {
        &self.server
    }

    pub fn set_server(&mut self, server: ServerWithQueueAction) -> &mut Self {
        self.server = server;
        self
    }
}

impl ToElement for MailQueueAction {
    const ELEMENT_NAME: &'static str = "MailQueueActionRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name).with_child(self.server.to_element())
    }
}

impl Request for MailQueueAction {
    const NAMESPACE: &'static str = ADMIN_NAMESPACE;
}

/// Modifies attributes of a unified communication service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifyUCService {
    id: String,
    attrs: TypedCollection<KeyValuePair>,
}

impl ModifyUCService {
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

impl ToElement for ModifyUCService {
    const ELEMENT_NAME: &'static str = "ModifyUCServiceRequest";

    fn to_element_named(&self, name: &str) -> Element {
        Element::new(name)
            .with_text_child("id", self.id.as_str())
            .with_collection("a", self.attrs.to_elements("a"))
    }
}

impl Request for ModifyUCService {
    const NAMESPACE: &'static str = ADMIN_NAMESPACE;
}

empty_request! {
    /// Checks the health of the server.
    CheckHealth => "CheckHealthRequest";
    /// Does nothing; keeps an admin session alive.
    NoOp => "NoOpRequest";
    /// Checks that the server answers.
    Ping => "PingRequest";
    GetVersionInfo => "GetVersionInfoRequest";
    GetAllLocales => "GetAllLocalesRequest";
    GetAllSkins => "GetAllSkinsRequest";
    GetAllVolumes => "GetAllVolumesRequest";
    GetCurrentVolumes => "GetCurrentVolumesRequest";
    GetLicenseInfo => "GetLicenseInfoRequest";
    GetServiceStatus => "GetServiceStatusRequest";
    GetZimletStatus => "GetZimletStatusRequest";
    /// Lists custom loggers of every account.
    GetAllAccountLoggers => "GetAllAccountLoggersRequest";
    /// Removes every custom logger.
    ResetAllLoggers => "ResetAllLoggersRequest";
    ReloadLocalConfig => "ReloadLocalConfigRequest";
    GetMemcachedClientConfig => "GetMemcachedClientConfigRequest";
    ReloadMemcachedClientConfig => "ReloadMemcachedClientConfigRequest";
    /// Recomputes aggregate quota usage across all domains.
    ComputeAggregateQuotaUsage => "ComputeAggregateQuotaUsageRequest";
    GetAggregateQuotaUsageOnServer => "GetAggregateQuotaUsageOnServerRequest";
    GetMailboxStats => "GetMailboxStatsRequest";
    GetAllUCServices => "GetAllUCServicesRequest";
    GetAllXMPPComponents => "GetAllXMPPComponentsRequest";
    GetAdminExtensionZimlets => "GetAdminExtensionZimletsRequest";
    GetAllFreeBusyProviders => "GetAllFreeBusyProvidersRequest";
    GetAllUCProviders => "GetAllUCProvidersRequest";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::CacheEntryType;
    use crate::enums::AccountBy;
    use serde_json::json;

    #[test]
    fn test_auto_prov_task_control() {
        let mut request = AutoProvTaskControl::new(AutoProvTaskAction::Start);
        assert_eq!(
            request.to_xml_named("autoProvTaskControl").unwrap(),
            r#"<autoProvTaskControl action="start"/>"#
        );
        request.set_action(AutoProvTaskAction::Stop);
        assert_eq!(request.action(), AutoProvTaskAction::Stop);
        assert_eq!(
            request.to_array(),
            json!({"AutoProvTaskControlRequest": {"action": "stop"}})
        );
    }

    #[test]
    fn test_delete_ldap_entry_trims_dn() {
        let request = DeleteLDAPEntry::new(" uid=foo ").unwrap();
        assert_eq!(request.dn(), "uid=foo");
        assert_eq!(
            request.to_xml().unwrap(),
            r#"<DeleteLDAPEntryRequest dn="uid=foo"/>"#
        );
        assert!(DeleteLDAPEntry::new("  ").unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_check_gal_config() {
        let request = CheckGalConfig::new(
            Some(LimitedQuery::new("cn=*", Some(5))),
            Some(GalConfigAction::Search),
            [KeyValuePair::new("zimbraGalMode", "ldap").unwrap()],
        );
        assert_eq!(
            request.to_xml().unwrap(),
            concat!(
                r#"<CheckGalConfigRequest><query limit="5">cn=*</query>"#,
                r#"<action>search</action><a n="zimbraGalMode">ldap</a></CheckGalConfigRequest>"#
            )
        );
        assert_eq!(CheckGalConfig::default().to_xml().unwrap(), "<CheckGalConfigRequest/>");
    }

    #[test]
    fn test_flush_cache() {
        let cache = CacheSelector::new([CacheEntryType::Skin]).unwrap();
        let request = FlushCache::new(Some(cache));
        assert_eq!(
            request.to_array(),
            json!({"FlushCacheRequest": {"cache": {"type": "skin"}}})
        );
        assert_eq!(FlushCache::default().to_xml().unwrap(), "<FlushCacheRequest/>");
    }

    #[test]
    fn test_get_account_loggers() {
        let mut request = GetAccountLoggers::default();
        assert!(request.account().is_none());
        let account = AccountSelector::new(AccountBy::Name, "user@example.com").unwrap();
        request.set_account(account.clone());
        assert_eq!(request.account(), Some(&account));
    }

    #[test]
    fn test_modify_uc_service() {
        let mut request = ModifyUCService::new(" uc-1 ", Vec::new()).unwrap();
        request.add_attr(KeyValuePair::new("zimbraUCProvider", "cisco").unwrap());
        assert_eq!(request.id(), "uc-1");
        assert_eq!(
            request.to_xml().unwrap(),
            r#"<ModifyUCServiceRequest><id>uc-1</id><a n="zimbraUCProvider">cisco</a></ModifyUCServiceRequest>"#
        );
    }

    #[test]
    fn test_empty_requests() {
        assert_eq!(CheckHealth::new().to_xml().unwrap(), "<CheckHealthRequest/>");
        assert_eq!(NoOp.to_array(), json!({"NoOpRequest": {}}));
        assert_eq!(<GetAllXMPPComponents as Request>::NAMESPACE, ADMIN_NAMESPACE);
    }
}
