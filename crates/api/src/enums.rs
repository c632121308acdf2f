//! Closed value sets used by request properties.
//!
//! Every enum renders to the exact token Zimbra expects on the wire and
//! parses back from it. Parsing is case-sensitive; an unknown token is an
//! [`SoapError::InvalidArgument`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use zimbra_soap::{Result, SoapError, Value};

macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $token)] $variant, )+
        }

        impl $name {
            /// Every member, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Returns the wire token.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $token, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = SoapError;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                match s {
                    $( $token => Ok($name::$variant), )+
                    _ => Err(SoapError::invalid_argument(
                        stringify!($name),
                        format!(
                            "unknown value `{}`, expected one of: {}",
                            s,
                            [$($token),+].join(", ")
                        ),
                    )),
                }
            }
        }

        impl From<$name> for Value {
            fn from(value: $name) -> Self {
                Value::String(value.as_str().to_string())
            }
        }
    };
}

token_enum! {
    /// Key used to look up an account.
    pub enum AccountBy {
        AdminName => "adminName",
        AppAdminName => "appAdminName",
        Id => "id",
        ForeignPrincipal => "foreignPrincipal",
        Name => "name",
        Krb5Principal => "krb5Principal",
    }
}

token_enum! {
    /// Action applied to the auto provisioning background task.
    pub enum AutoProvTaskAction {
        Start => "start",
        Status => "status",
        Stop => "stop",
    }
}

token_enum! {
    /// Key used to select a cache entry.
    pub enum CacheEntryBy {
        Id => "id",
        Name => "name",
    }
}

token_enum! {
    /// Kind of cache to flush.
    pub enum CacheEntryType {
        Acl => "acl",
        Locale => "locale",
        Skin => "skin",
        UiStrings => "uistrings",
        License => "license",
        All => "all",
        Account => "account",
        Config => "config",
        GlobalGrant => "globalgrant",
        Cos => "cos",
        Domain => "domain",
        GalGroup => "galgroup",
        Group => "group",
        Mime => "mime",
        Server => "server",
        AlwaysOnCluster => "alwaysOnCluster",
        Zimlet => "zimlet",
    }
}

token_enum! {
    /// Certificate selection for certificate inspection.
    pub enum CertType {
        All => "all",
        Mailboxd => "mailboxd",
        Mta => "mta",
        Ldap => "ldap",
        Proxy => "proxy",
        Staged => "staged",
    }
}

token_enum! {
    /// Action applied to an index compaction.
    pub enum CompactIndexAction {
        Start => "start",
        Status => "status",
    }
}

token_enum! {
    /// Key used to look up a class of service.
    pub enum CosBy {
        Id => "id",
        Name => "name",
    }
}

token_enum! {
    /// Certificate signing request flavour.
    pub enum CsrType {
        SelfSigned => "self",
        Commercial => "comm",
    }
}

token_enum! {
    /// Key used to look up a domain.
    pub enum DomainBy {
        Id => "id",
        Name => "name",
        VirtualHostname => "virtualHostname",
        Krb5Realm => "krb5Realm",
        ForeignName => "foreignName",
    }
}

token_enum! {
    /// GAL operation exercised by a configuration check.
    pub enum GalConfigAction {
        Autocomplete => "autocomplete",
        Search => "search",
        Sync => "sync",
    }
}

token_enum! {
    /// Operation applied to queued mail.
    pub enum QueueAction {
        Hold => "hold",
        Release => "release",
        Delete => "delete",
        Requeue => "requeue",
    }
}

token_enum! {
    /// How queued messages are selected.
    pub enum QueueActionBy {
        Id => "id",
        Query => "query",
    }
}

token_enum! {
    /// Action applied to a mailbox re-index.
    pub enum ReIndexAction {
        Start => "start",
        Status => "status",
        Cancel => "cancel",
    }
}

token_enum! {
    /// Item type restricting a re-index.
    pub enum ReindexType {
        Conversation => "conversation",
        Message => "message",
        Contact => "contact",
        Appointment => "appointment",
        Task => "task",
        Note => "note",
        Wiki => "wiki",
        Document => "document",
    }
}

token_enum! {
    /// Key used to look up a server.
    pub enum ServerBy {
        Id => "id",
        Name => "name",
        ServiceHostname => "serviceHostname",
    }
}

token_enum! {
    /// Zimlet access control outcome.
    pub enum ZimletAclType {
        Grant => "grant",
        Deny => "deny",
    }
}

token_enum! {
    /// Zimlet enablement.
    pub enum ZimletStatus {
        Enabled => "enabled",
        Disabled => "disabled",
    }
}

token_enum! {
    /// Zimlet kinds excluded from a listing.
    pub enum ZimletExcludeType {
        Extension => "extension",
        Mail => "mail",
        None => "none",
    }
}

/// Parses a comma separated token list such as `skin,locale`.
///
/// Blank entries are skipped; any unknown token fails the whole list.
pub fn parse_token_list<T>(input: &str) -> Result<Vec<T>>
where
    T: FromStr<Err = SoapError>,
{
    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect()
}

/// Joins tokens with commas, the multi-value form used by `type`/`types` properties.
pub fn join_tokens<T: fmt::Display>(tokens: &[T]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_wire_token() {
        assert_eq!(AutoProvTaskAction::Start.to_string(), "start");
        assert_eq!(AccountBy::AdminName.to_string(), "adminName");
        assert_eq!(CsrType::SelfSigned.as_str(), "self");
    }

    #[test]
    fn test_from_str_accepts_every_member() {
        for action in ReIndexAction::ALL {
            assert_eq!(action.as_str().parse::<ReIndexAction>().unwrap(), *action);
        }
        for by in DomainBy::ALL {
            assert_eq!(by.as_str().parse::<DomainBy>().unwrap(), *by);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown_token() {
        let err = "restart".parse::<AutoProvTaskAction>().unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("start, status, stop"));
    }

    #[test]
    fn test_from_str_is_case_sensitive() {
        assert!("Start".parse::<AutoProvTaskAction>().is_err());
        assert!("adminname".parse::<AccountBy>().is_err());
    }

    #[test]
    fn test_serde_uses_wire_token() {
        let json = serde_json::to_string(&GalConfigAction::Autocomplete).unwrap();
        assert_eq!(json, "\"autocomplete\"");
        let back: ZimletStatus = serde_json::from_str("\"disabled\"").unwrap();
        assert_eq!(back, ZimletStatus::Disabled);
    }

    #[test]
    fn test_into_value() {
        let value: Value = QueueAction::Requeue.into();
        assert_eq!(value.as_str(), Some("requeue"));
    }

    #[test]
    fn test_token_lists() {
        let types: Vec<CacheEntryType> = parse_token_list("skin, locale,,account").unwrap();
        assert_eq!(
            types,
            vec![CacheEntryType::Skin, CacheEntryType::Locale, CacheEntryType::Account]
        );
        assert_eq!(join_tokens(&types), "skin,locale,account");
        assert!(parse_token_list::<CacheEntryType>("skin,bogus").is_err());
    }
}
