//! # zmsoap
//!
//! Library side of the `zmsoap` binary: parses [`CliConfig`], builds the
//! selected request with `zimbra-api` and renders it as XML or JSON, bare or
//! inside a SOAP envelope.

pub mod config;

pub use config::{CliConfig, Command, OutputFormat};

use tracing::debug;
use zimbra_api::account::{Auth, GetRights, PreAuth, Right};
use zimbra_api::admin::{
    AutoProvTaskControl, CheckHealth, DeleteAccount, DeleteLDAPEntry, FlushCache, GetAllDomains,
    ReIndex, RenameAccount,
};
use zimbra_api::enums::{AccountBy, CacheEntryBy, CacheEntryType, ReindexType, parse_token_list};
use zimbra_api::structs::{AccountSelector, CacheEntrySelector, CacheSelector, ReindexMailboxInfo};
use zimbra_soap::{
    Element, Envelope, Request, Result, SoapError, ToElement, to_json_string, to_json_string_pretty,
    to_xml_string, to_xml_string_pretty,
};

/// Initialize logging on stderr, leaving stdout to the rendered request.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "zmsoap={0},zimbra_cli={0},zimbra_api={0},zimbra_soap={0}",
            level
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Builds the request selected by `config.command` and renders it.
pub fn render(config: &CliConfig) -> Result<String> {
    match &config.command {
        Command::CheckHealth => render_request(config, &CheckHealth::new()),
        Command::AutoProvTask { action } => {
            render_request(config, &AutoProvTaskControl::new(action.parse()?))
        }
        Command::DeleteAccount { id } => render_request(config, &DeleteAccount::new(id)?),
        Command::RenameAccount { id, new_name } => {
            render_request(config, &RenameAccount::new(id, new_name)?)
        }
        Command::DeleteLdapEntry { dn } => render_request(config, &DeleteLDAPEntry::new(dn)?),
        Command::FlushCache {
            types,
            all_servers,
            entries,
        } => {
            let cache = cache_selector(types.as_deref(), *all_servers, entries)?;
            render_request(config, &FlushCache::new(cache))
        }
        Command::GetAllDomains { apply_config } => {
            render_request(config, &GetAllDomains::new(*apply_config))
        }
        Command::Reindex { id, action, types } => {
            let mut mbox = ReindexMailboxInfo::new(id)?;
            if let Some(types) = types {
                mbox.set_types(parse_token_list::<ReindexType>(types)?);
            }
            let action = action.as_deref().map(str::parse).transpose()?;
            render_request(config, &ReIndex::new(mbox, action))
        }
        Command::GetRights { rights } => {
            let aces = rights
                .iter()
                .map(|right| Right::new(right))
                .collect::<Result<Vec<_>>>()?;
            render_request(config, &GetRights::new(aces))
        }
        Command::Preauth {
            account,
            by,
            key,
            timestamp,
            expires,
            auth,
        } => {
            let account = AccountSelector::new(by.parse::<AccountBy>()?, account)?;
            let mut preauth = PreAuth::new(timestamp.unwrap_or(0), None, *expires);
            preauth.compute_value(&account, key.as_deref().unwrap_or_default())?;

            if *auth {
                render_request(config, &Auth::with_preauth(account, preauth)?)
            } else {
                render_element(config, &preauth.to_element())
            }
        }
    }
}

/// Renders one request according to the output options.
pub fn render_request<R: Request>(config: &CliConfig, request: &R) -> Result<String> {
    debug!(
        request = R::ELEMENT_NAME,
        format = ?config.format,
        envelope = config.envelope,
        "rendering request"
    );

    if !config.envelope {
        return render_element(config, &request.to_element());
    }

    let mut envelope = Envelope::new(request).with_user_agent(
        "zmsoap",
        Some(env!("CARGO_PKG_VERSION").to_string()),
    );
    if let Some(token) = &config.auth_token {
        envelope = envelope.with_auth_token(token.trim());
    }

    match (config.format, config.pretty) {
        (OutputFormat::Xml, false) => envelope.to_xml(),
        (OutputFormat::Xml, true) => envelope.to_xml_pretty(),
        (OutputFormat::Json, false) => envelope.to_json_string(),
        (OutputFormat::Json, true) => Ok(serde_json::to_string_pretty(&envelope.to_json())?),
    }
}

/// Renders a bare element without an envelope.
pub fn render_element(config: &CliConfig, element: &Element) -> Result<String> {
    match (config.format, config.pretty) {
        (OutputFormat::Xml, false) => to_xml_string(element),
        (OutputFormat::Xml, true) => to_xml_string_pretty(element),
        (OutputFormat::Json, false) => to_json_string(element),
        (OutputFormat::Json, true) => to_json_string_pretty(element),
    }
}

/// `--entry` values are `by:value`.
fn cache_entry(entry: &str) -> Result<CacheEntrySelector> {
    let (by, value) = entry
        .split_once(':')
        .ok_or_else(|| SoapError::invalid_argument("entry", format!("expected by:value, got `{}`", entry)))?;
    CacheEntrySelector::new(by.trim().parse::<CacheEntryBy>()?, value)
}

fn cache_selector(
    types: Option<&str>,
    all_servers: bool,
    entries: &[String],
) -> Result<Option<CacheSelector>> {
    let Some(types) = types else {
        if all_servers || !entries.is_empty() {
            return Err(SoapError::invalid_argument(
                "types",
                "--all-servers and --entry need --types",
            ));
        }
        return Ok(None);
    };

    let mut cache = CacheSelector::new(parse_token_list::<CacheEntryType>(types)?)?;
    if all_servers {
        cache.set_all_servers(true);
    }
    for entry in entries {
        cache.add_entry(cache_entry(entry)?);
    }
    Ok(Some(cache))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config(args: &[&str]) -> CliConfig {
        let mut argv = vec!["zmsoap"];
        argv.extend_from_slice(args);
        CliConfig::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_cache_entry_parsing() {
        let entry = cache_entry("name:user@example.com").unwrap();
        assert_eq!(entry.by(), CacheEntryBy::Name);
        assert_eq!(entry.value(), "user@example.com");

        assert!(cache_entry("user@example.com").is_err());
        assert!(cache_entry("email:user@example.com").is_err());
    }

    #[test]
    fn test_cache_selector_needs_types() {
        assert!(cache_selector(None, false, &[]).unwrap().is_none());
        let err = cache_selector(None, true, &[]).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_render_bare_xml() {
        let out = render(&config(&["delete-account", "--id", " 42 "])).unwrap();
        assert_eq!(out, r#"<DeleteAccountRequest id="42"/>"#);
    }

    #[test]
    fn test_render_bare_json() {
        let out = render(&config(&["--format", "json", "auto-prov-task", "--action", "stop"])).unwrap();
        assert_eq!(out, r#"{"AutoProvTaskControlRequest":{"action":"stop"}}"#);
    }

    #[test]
    fn test_invalid_token_is_reported() {
        let err = render(&config(&["reindex", "--id", "1", "--action", "pause"])).unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
