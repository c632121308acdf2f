//! Requests in the `urn:zimbraAdmin` namespace.
//!
//! Each type serializes under its SOAP name (`DeleteAccountRequest`, ...).
//! Use [`ToElement::to_xml_named`](zimbra_soap::ToElement::to_xml_named) to
//! pick another root name.

mod account;
mod auth;
mod calendar;
mod cert;
mod cos;
mod domain;
mod mailbox;
mod server;
mod system;
mod zimlet;

pub use account::{
    AddAccountAlias, CountAccount, CreateAccount, DeleteAccount, GetAccount, GetAccountInfo,
    GetAllAccounts, GetAllAdminAccounts, MigrateAccount, ModifyAccount, RemoveAccountAlias,
    RenameAccount, SetPassword,
};
pub use auth::{Auth, DelegateAuth};
pub use calendar::{FixCalendarPriority, RenameCalendarResource};
pub use cert::{GetCSR, GetCert};
pub use cos::{CreateCos, DeleteCos, GetAllCos, GetCos, ModifyCos, RenameCos};
pub use domain::{CreateDomain, DeleteDomain, GetAllDomains, GetDomain, ModifyDomain};
pub use mailbox::{
    CompactIndex, DeleteMailbox, GetAllMailboxes, GetIndexStats, GetMailbox, PurgeMessages,
    ReIndex, RecalculateMailboxCounts, VerifyIndex,
};
pub use server::{
    CheckHostnameResolve, CreateServer, DeleteServer, GetAllConfig, GetAllServers, GetConfig,
    GetServer, ModifyConfig, ModifyServer,
};
pub use system::{
    AutoProvTaskControl, CheckGalConfig, CheckHealth, ComputeAggregateQuotaUsage,
    DeleteLDAPEntry, FlushCache, GetAccountLoggers, GetAdminExtensionZimlets,
    GetAggregateQuotaUsageOnServer, GetAllAccountLoggers, GetAllFreeBusyProviders,
    GetAllLocales, GetAllSkins, GetAllUCProviders, GetAllUCServices, GetAllVolumes,
    GetAllXMPPComponents, GetCurrentVolumes, GetLicenseInfo, GetMailboxStats,
    GetMemcachedClientConfig, GetServiceStatus, GetVersionInfo, GetZimletStatus,
    MailQueueAction, ModifyUCService, NoOp, Ping, ReloadLocalConfig,
    ReloadMemcachedClientConfig, ResetAllLoggers,
};
pub use zimlet::{DeleteZimlet, GetAllZimlets, GetZimlet, ModifyZimlet, UndeployZimlet};
