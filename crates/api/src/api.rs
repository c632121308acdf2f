//! The administrative operation catalogue.
//!
//! [`AdminApi`] is transport-agnostic: an implementor supplies
//! [`AdminApi::invoke`], which receives a fully built request and is
//! responsible for enveloping, sending and decoding it. Every other method
//! only builds the request, so argument errors surface before anything is
//! sent.

use zimbra_soap::{Request, SoapError};

use crate::admin::*;
use crate::enums::{
    AutoProvTaskAction, CertType, CompactIndexAction, CsrType, GalConfigAction, ReIndexAction,
    ZimletExcludeType,
};
use crate::structs::{
    AccountSelector, CacheSelector, CosSelector, DomainSelector, IdAndAction, KeyValuePair,
    LimitedQuery, MailboxByAccountIdSelector, NamedElement, ReindexMailboxInfo, ServerSelector,
    ServerWithQueueAction, ZimletAclStatusPri,
};

/// Zimbra administration operations.
pub trait AdminApi {
    /// What a successful call yields, e.g. the raw response body.
    type Response;
    /// Transport error; must absorb request construction errors.
    type Error: From<SoapError>;

    /// Sends one request.
    fn invoke<R: Request>(&mut self, request: R) -> Result<Self::Response, Self::Error>;

    /// Authenticates with an admin name and password.
    fn auth_by_name(
        &mut self,
        name: &str,
        password: &str,
        virtual_host: Option<&str>,
    ) -> Result<Self::Response, Self::Error> {
        let mut request = Auth::by_name(name, password)?;
        if let Some(virtual_host) = virtual_host {
            request.set_virtual_host(virtual_host);
        }
        self.invoke(request)
    }

    /// Authenticates with an account selector and password.
    fn auth_by_account(
        &mut self,
        account: AccountSelector,
        password: &str,
        virtual_host: Option<&str>,
    ) -> Result<Self::Response, Self::Error> {
        let mut request = Auth::by_account(account, password)?;
        if let Some(virtual_host) = virtual_host {
            request.set_virtual_host(virtual_host);
        }
        self.invoke(request)
    }

    /// Validates an existing auth token.
    fn auth_by_token(
        &mut self,
        token: &str,
        virtual_host: Option<&str>,
    ) -> Result<Self::Response, Self::Error> {
        let mut request = Auth::by_token(token)?;
        if let Some(virtual_host) = virtual_host {
            request.set_virtual_host(virtual_host);
        }
        self.invoke(request)
    }

    fn add_account_alias(&mut self, id: &str, alias: &str) -> Result<Self::Response, Self::Error> {
        self.invoke(AddAccountAlias::new(id, alias)?)
    }

    fn auto_prov_task_control(
        &mut self,
        action: AutoProvTaskAction,
    ) -> Result<Self::Response, Self::Error> {
        self.invoke(AutoProvTaskControl::new(action))
    }

    fn check_gal_config(
        &mut self,
        query: Option<LimitedQuery>,
        action: Option<GalConfigAction>,
        attrs: Vec<KeyValuePair>,
    ) -> Result<Self::Response, Self::Error> {
        self.invoke(CheckGalConfig::new(query, action, attrs))
    }

    fn check_health(&mut self) -> Result<Self::Response, Self::Error> {
        self.invoke(CheckHealth)
    }

    fn check_hostname_resolve(
        &mut self,
        hostname: Option<&str>,
    ) -> Result<Self::Response, Self::Error> {
        self.invoke(CheckHostnameResolve::new(hostname))
    }

    fn compact_index(
        &mut self,
        mbox: MailboxByAccountIdSelector,
        action: Option<CompactIndexAction>,
    ) -> Result<Self::Response, Self::Error> {
        self.invoke(CompactIndex::new(mbox, action))
    }

    fn compute_aggregate_quota_usage(&mut self) -> Result<Self::Response, Self::Error> {
        self.invoke(ComputeAggregateQuotaUsage)
    }

    fn count_account(&mut self, domain: DomainSelector) -> Result<Self::Response, Self::Error> {
        self.invoke(CountAccount::new(domain))
    }

    fn create_account(
        &mut self,
        name: &str,
        password: Option<&str>,
        attrs: Vec<KeyValuePair>,
    ) -> Result<Self::Response, Self::Error> {
        self.invoke(CreateAccount::new(name, password, attrs)?)
    }

    fn create_cos(
        &mut self,
        name: &str,
        attrs: Vec<KeyValuePair>,
    ) -> Result<Self::Response, Self::Error> {
        self.invoke(CreateCos::new(name, attrs)?)
    }

    fn create_domain(
        &mut self,
        name: &str,
        attrs: Vec<KeyValuePair>,
    ) -> Result<Self::Response, Self::Error> {
        self.invoke(CreateDomain::new(name, attrs)?)
    }

    fn create_server(
        &mut self,
        name: &str,
        attrs: Vec<KeyValuePair>,
    ) -> Result<Self::Response, Self::Error> {
        self.invoke(CreateServer::new(name, attrs)?)
    }

    fn delegate_auth(
        &mut self,
        account: AccountSelector,
        duration: Option<u32>,
    ) -> Result<Self::Response, Self::Error> {
        self.invoke(DelegateAuth::new(account, duration))
    }

    fn delete_account(&mut self, id: &str) -> Result<Self::Response, Self::Error> {
        self.invoke(DeleteAccount::new(id)?)
    }

    fn delete_cos(&mut self, id: &str) -> Result<Self::Response, Self::Error> {
        self.invoke(DeleteCos::new(id)?)
    }

    fn delete_domain(&mut self, id: &str) -> Result<Self::Response, Self::Error> {
        self.invoke(DeleteDomain::new(id)?)
    }

    fn delete_ldap_entry(&mut self, dn: &str) -> Result<Self::Response, Self::Error> {
        self.invoke(DeleteLDAPEntry::new(dn)?)
    }

    fn delete_mailbox(
        &mut self,
        mbox: MailboxByAccountIdSelector,
    ) -> Result<Self::Response, Self::Error> {
        self.invoke(DeleteMailbox::new(mbox))
    }

    fn delete_server(&mut self, id: &str) -> Result<Self::Response, Self::Error> {
        self.invoke(DeleteServer::new(id)?)
    }

    fn delete_zimlet(&mut self, name: &str) -> Result<Self::Response, Self::Error> {
        self.invoke(DeleteZimlet::new(NamedElement::new(name)?))
    }

    fn fix_calendar_priority(
        &mut self,
        sync: Option<bool>,
        accounts: Vec<NamedElement>,
    ) -> Result<Self::Response, Self::Error> {
        self.invoke(FixCalendarPriority::new(sync, accounts))
    }

    fn flush_cache(&mut self, cache: Option<CacheSelector>) -> Result<Self::Response, Self::Error> {
        self.invoke(FlushCache::new(cache))
    }

    fn get_account(
        &mut self,
        account: Option<AccountSelector>,
        apply_cos: Option<bool>,
        attrs: Option<&str>,
    ) -> Result<Self::Response, Self::Error> {
        let mut request = GetAccount::new(account);
        if let Some(apply_cos) = apply_cos {
            request.set_apply_cos(apply_cos);
        }
        if let Some(attrs) = attrs {
            request.set_attrs(attrs);
        }
        self.invoke(request)
    }

    fn get_account_info(&mut self, account: AccountSelector) -> Result<Self::Response, Self::Error> {
        self.invoke(GetAccountInfo::new(account))
    }

    fn get_account_loggers(
        &mut self,
        account: Option<AccountSelector>,
    ) -> Result<Self::Response, Self::Error> {
        self.invoke(GetAccountLoggers::new(account))
    }

    fn get_admin_extension_zimlets(&mut self) -> Result<Self::Response, Self::Error> {
        self.invoke(GetAdminExtensionZimlets)
    }

    fn get_aggregate_quota_usage_on_server(&mut self) -> Result<Self::Response, Self::Error> {
        self.invoke(GetAggregateQuotaUsageOnServer)
    }

    fn get_all_account_loggers(&mut self) -> Result<Self::Response, Self::Error> {
        self.invoke(GetAllAccountLoggers)
    }

    fn get_all_accounts(
        &mut self,
        server: Option<ServerSelector>,
        domain: Option<DomainSelector>,
    ) -> Result<Self::Response, Self::Error> {
        self.invoke(GetAllAccounts::new(server, domain))
    }

    fn get_all_admin_accounts(
        &mut self,
        apply_cos: Option<bool>,
    ) -> Result<Self::Response, Self::Error> {
        self.invoke(GetAllAdminAccounts::new(apply_cos))
    }

    fn get_all_config(&mut self) -> Result<Self::Response, Self::Error> {
        self.invoke(GetAllConfig)
    }

    fn get_all_cos(&mut self) -> Result<Self::Response, Self::Error> {
        self.invoke(GetAllCos)
    }

    fn get_all_domains(
        &mut self,
        apply_config: Option<bool>,
    ) -> Result<Self::Response, Self::Error> {
        self.invoke(GetAllDomains::new(apply_config))
    }

    fn get_all_free_busy_providers(&mut self) -> Result<Self::Response, Self::Error> {
        self.invoke(GetAllFreeBusyProviders)
    }

    fn get_all_locales(&mut self) -> Result<Self::Response, Self::Error> {
        self.invoke(GetAllLocales)
    }

    fn get_all_mailboxes(
        &mut self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Self::Response, Self::Error> {
        self.invoke(GetAllMailboxes::new(limit, offset))
    }

    fn get_all_servers(
        &mut self,
        service: Option<&str>,
        apply_config: Option<bool>,
    ) -> Result<Self::Response, Self::Error> {
        self.invoke(GetAllServers::new(service, apply_config))
    }

    fn get_all_skins(&mut self) -> Result<Self::Response, Self::Error> {
        self.invoke(GetAllSkins)
    }

    fn get_all_uc_providers(&mut self) -> Result<Self::Response, Self::Error> {
        self.invoke(GetAllUCProviders)
    }

    fn get_all_uc_services(&mut self) -> Result<Self::Response, Self::Error> {
        self.invoke(GetAllUCServices)
    }

    fn get_all_volumes(&mut self) -> Result<Self::Response, Self::Error> {
        self.invoke(GetAllVolumes)
    }

    fn get_all_xmpp_components(&mut self) -> Result<Self::Response, Self::Error> {
        self.invoke(GetAllXMPPComponents)
    }

    fn get_all_zimlets(
        &mut self,
        exclude: Option<ZimletExcludeType>,
    ) -> Result<Self::Response, Self::Error> {
        self.invoke(GetAllZimlets::new(exclude))
    }

    fn get_cert(
        &mut self,
        server: &str,
        cert_type: CertType,
        option: Option<CsrType>,
    ) -> Result<Self::Response, Self::Error> {
        self.invoke(GetCert::new(server, cert_type, option)?)
    }

    fn get_config(&mut self, attrs: Vec<KeyValuePair>) -> Result<Self::Response, Self::Error> {
        self.invoke(GetConfig::new(attrs))
    }

    fn get_cos(
        &mut self,
        cos: Option<CosSelector>,
        attrs: Option<&str>,
    ) -> Result<Self::Response, Self::Error> {
        let mut request = GetCos::new(cos);
        if let Some(attrs) = attrs {
            request.set_attrs(attrs);
        }
        self.invoke(request)
    }

    fn get_csr(
        &mut self,
        server: Option<&str>,
        csr_type: Option<CsrType>,
    ) -> Result<Self::Response, Self::Error> {
        self.invoke(GetCSR::new(server, csr_type))
    }

    fn get_current_volumes(&mut self) -> Result<Self::Response, Self::Error> {
        self.invoke(GetCurrentVolumes)
    }

    fn get_domain(
        &mut self,
        domain: Option<DomainSelector>,
        apply_config: Option<bool>,
        attrs: Option<&str>,
    ) -> Result<Self::Response, Self::Error> {
        let mut request = GetDomain::new(domain);
        if let Some(apply_config) = apply_config {
            request.set_apply_config(apply_config);
        }
        if let Some(attrs) = attrs {
            request.set_attrs(attrs);
        }
        self.invoke(request)
    }

    fn get_index_stats(
        &mut self,
        mbox: MailboxByAccountIdSelector,
    ) -> Result<Self::Response, Self::Error> {
        self.invoke(GetIndexStats::new(mbox))
    }

    fn get_license_info(&mut self) -> Result<Self::Response, Self::Error> {
        self.invoke(GetLicenseInfo)
    }

    fn get_mailbox(
        &mut self,
        mbox: MailboxByAccountIdSelector,
    ) -> Result<Self::Response, Self::Error> {
        self.invoke(GetMailbox::new(mbox))
    }

    fn get_mailbox_stats(&mut self) -> Result<Self::Response, Self::Error> {
        self.invoke(GetMailboxStats)
    }

    fn get_memcached_client_config(&mut self) -> Result<Self::Response, Self::Error> {
        self.invoke(GetMemcachedClientConfig)
    }

    fn get_server(
        &mut self,
        server: Option<ServerSelector>,
        apply_config: Option<bool>,
        attrs: Option<&str>,
    ) -> Result<Self::Response, Self::Error> {
        let mut request = GetServer::new(server);
        if let Some(apply_config) = apply_config {
            request.set_apply_config(apply_config);
        }
        if let Some(attrs) = attrs {
            request.set_attrs(attrs);
        }
        self.invoke(request)
    }

    fn get_service_status(&mut self) -> Result<Self::Response, Self::Error> {
        self.invoke(GetServiceStatus)
    }

    fn get_version_info(&mut self) -> Result<Self::Response, Self::Error> {
        self.invoke(GetVersionInfo)
    }

    fn get_zimlet(&mut self, name: &str, attrs: Option<&str>) -> Result<Self::Response, Self::Error> {
        let mut request = GetZimlet::new(NamedElement::new(name)?);
        if let Some(attrs) = attrs {
            request.set_attrs(attrs);
        }
        self.invoke(request)
    }

    fn get_zimlet_status(&mut self) -> Result<Self::Response, Self::Error> {
        self.invoke(GetZimletStatus)
    }

    fn mail_queue_action(
        &mut self,
        server: ServerWithQueueAction,
    ) -> Result<Self::Response, Self::Error> {
        self.invoke(MailQueueAction::new(server))
    }

    fn migrate_account(&mut self, migrate: IdAndAction) -> Result<Self::Response, Self::Error> {
        self.invoke(MigrateAccount::new(migrate))
    }

    fn modify_account(
        &mut self,
        id: &str,
        attrs: Vec<KeyValuePair>,
    ) -> Result<Self::Response, Self::Error> {
        self.invoke(ModifyAccount::new(id, attrs)?)
    }

    fn modify_config(&mut self, attrs: Vec<KeyValuePair>) -> Result<Self::Response, Self::Error> {
        self.invoke(ModifyConfig::new(attrs))
    }

    fn modify_cos(
        &mut self,
        id: &str,
        attrs: Vec<KeyValuePair>,
    ) -> Result<Self::Response, Self::Error> {
        self.invoke(ModifyCos::new(id, attrs)?)
    }

    fn modify_domain(
        &mut self,
        id: &str,
        attrs: Vec<KeyValuePair>,
    ) -> Result<Self::Response, Self::Error> {
        self.invoke(ModifyDomain::new(id, attrs)?)
    }

    fn modify_server(
        &mut self,
        id: &str,
        attrs: Vec<KeyValuePair>,
    ) -> Result<Self::Response, Self::Error> {
        self.invoke(ModifyServer::new(id, attrs)?)
    }

    fn modify_uc_service(
        &mut self,
        id: &str,
        attrs: Vec<KeyValuePair>,
    ) -> Result<Self::Response, Self::Error> {
        self.invoke(ModifyUCService::new(id, attrs)?)
    }

    fn modify_zimlet(&mut self, zimlet: ZimletAclStatusPri) -> Result<Self::Response, Self::Error> {
        self.invoke(ModifyZimlet::new(zimlet))
    }

    fn no_op(&mut self) -> Result<Self::Response, Self::Error> {
        self.invoke(NoOp)
    }

    fn ping(&mut self) -> Result<Self::Response, Self::Error> {
        self.invoke(Ping)
    }

    fn purge_messages(
        &mut self,
        mbox: Option<MailboxByAccountIdSelector>,
    ) -> Result<Self::Response, Self::Error> {
        self.invoke(PurgeMessages::new(mbox))
    }

    fn recalculate_mailbox_counts(
        &mut self,
        mbox: MailboxByAccountIdSelector,
    ) -> Result<Self::Response, Self::Error> {
        self.invoke(RecalculateMailboxCounts::new(mbox))
    }

    fn re_index(
        &mut self,
        mbox: ReindexMailboxInfo,
        action: Option<ReIndexAction>,
    ) -> Result<Self::Response, Self::Error> {
        self.invoke(ReIndex::new(mbox, action))
    }

    fn reload_local_config(&mut self) -> Result<Self::Response, Self::Error> {
        self.invoke(ReloadLocalConfig)
    }

    fn reload_memcached_client_config(&mut self) -> Result<Self::Response, Self::Error> {
        self.invoke(ReloadMemcachedClientConfig)
    }

    fn remove_account_alias(
        &mut self,
        alias: &str,
        id: Option<&str>,
    ) -> Result<Self::Response, Self::Error> {
        self.invoke(RemoveAccountAlias::new(alias, id)?)
    }

    fn rename_account(&mut self, id: &str, new_name: &str) -> Result<Self::Response, Self::Error> {
        self.invoke(RenameAccount::new(id, new_name)?)
    }

    fn rename_calendar_resource(
        &mut self,
        id: &str,
        new_name: &str,
    ) -> Result<Self::Response, Self::Error> {
        self.invoke(RenameCalendarResource::new(id, new_name)?)
    }

    fn rename_cos(&mut self, id: &str, new_name: &str) -> Result<Self::Response, Self::Error> {
        self.invoke(RenameCos::new(id, new_name)?)
    }

    fn reset_all_loggers(&mut self) -> Result<Self::Response, Self::Error> {
        self.invoke(ResetAllLoggers)
    }

    fn set_password(
        &mut self,
        id: &str,
        new_password: &str,
    ) -> Result<Self::Response, Self::Error> {
        self.invoke(SetPassword::new(id, new_password)?)
    }

    fn undeploy_zimlet(
        &mut self,
        name: &str,
        action: Option<&str>,
    ) -> Result<Self::Response, Self::Error> {
        self.invoke(UndeployZimlet::new(name, action)?)
    }

    fn verify_index(
        &mut self,
        mbox: MailboxByAccountIdSelector,
    ) -> Result<Self::Response, Self::Error> {
        self.invoke(VerifyIndex::new(mbox))
    }
}
