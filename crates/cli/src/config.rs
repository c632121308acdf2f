//! Command line configuration for `zmsoap`.
//!
//! Every global option can also be set from the environment.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `ZIMBRA_FORMAT` | xml | Output format (`xml` or `json`) |
//! | `ZIMBRA_AUTH_TOKEN` | | Auth token placed in the envelope header |
//! | `ZIMBRA_LOG_LEVEL` | warn | Log level |
//! | `ZIMBRA_PREAUTH_KEY` | | Domain preauth key for the `preauth` command |
//!
//! # Example
//!
//! ```rust
//! use clap::Parser;
//! use zimbra_cli::CliConfig;
//!
//! let config = CliConfig::try_parse_from(["zmsoap", "--format", "json", "check-health"]).unwrap();
//! assert!(config.validate().is_ok());
//! ```

use clap::{Parser, Subcommand, ValueEnum};

/// Levels accepted by `--log-level`.
const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Output encoding of a rendered request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Xml,
    Json,
}

/// Top-level `zmsoap` options.
#[derive(Debug, Clone, Parser)]
#[command(name = "zmsoap", version)]
#[command(about = "Render Zimbra admin SOAP requests as XML or JSON")]
pub struct CliConfig {
    /// Output format.
    #[arg(long, value_enum, env = "ZIMBRA_FORMAT", default_value = "xml")]
    pub format: OutputFormat,

    /// Indent the output.
    #[arg(long)]
    pub pretty: bool,

    /// Wrap the request in a SOAP envelope.
    #[arg(long)]
    pub envelope: bool,

    /// Auth token for the envelope header.
    #[arg(long, env = "ZIMBRA_AUTH_TOKEN")]
    pub auth_token: Option<String>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "ZIMBRA_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Requests `zmsoap` knows how to build.
///
/// Enumerated arguments are taken as their wire tokens (for example
/// `--action start`) and checked when the request is built.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// CheckHealthRequest.
    CheckHealth,

    /// AutoProvTaskControlRequest.
    AutoProvTask {
        /// start, status or stop.
        #[arg(long)]
        action: String,
    },

    /// DeleteAccountRequest.
    DeleteAccount {
        /// Zimbra ID of the account.
        #[arg(long)]
        id: String,
    },

    /// RenameAccountRequest.
    RenameAccount {
        #[arg(long)]
        id: String,

        #[arg(long)]
        new_name: String,
    },

    /// DeleteLDAPEntryRequest.
    DeleteLdapEntry {
        /// Distinguished name of the entry.
        #[arg(long)]
        dn: String,
    },

    /// FlushCacheRequest.
    FlushCache {
        /// Comma-separated cache types, e.g. `account,cos`.
        #[arg(long)]
        types: Option<String>,

        /// Flush on every server.
        #[arg(long)]
        all_servers: bool,

        /// Entries to flush, as `by:value` (e.g. `name:user@example.com`).
        #[arg(long = "entry")]
        entries: Vec<String>,
    },

    /// GetAllDomainsRequest.
    GetAllDomains {
        #[arg(long)]
        apply_config: Option<bool>,
    },

    /// ReIndexRequest.
    Reindex {
        /// Account ID of the mailbox.
        #[arg(long)]
        id: String,

        /// start, status or cancel.
        #[arg(long)]
        action: Option<String>,

        /// Comma-separated item types.
        #[arg(long)]
        types: Option<String>,
    },

    /// GetRightsRequest (account namespace).
    GetRights {
        /// Right names; repeat for several.
        #[arg(long = "right")]
        rights: Vec<String>,
    },

    /// Computes a domain preauth value.
    Preauth {
        /// Account to sign for.
        #[arg(long)]
        account: String,

        /// How `account` identifies the account.
        #[arg(long, default_value = "name")]
        by: String,

        /// Domain preauth key.
        #[arg(long, env = "ZIMBRA_PREAUTH_KEY", hide_env_values = true)]
        key: Option<String>,

        /// Milliseconds since the epoch; defaults to now.
        #[arg(long)]
        timestamp: Option<i64>,

        /// Expiry in milliseconds; 0 means the server default.
        #[arg(long)]
        expires: Option<i64>,

        /// Emit a full account AuthRequest instead of the bare preauth element.
        #[arg(long)]
        auth: bool,
    },
}

impl CliConfig {
    /// Validates the configuration, collecting every problem.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            errors.push(format!(
                "Log level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.log_level
            ));
        }

        if self
            .auth_token
            .as_deref()
            .is_some_and(|token| token.trim().is_empty())
        {
            errors.push("Auth token cannot be blank".to_string());
        }

        if let Command::Preauth { key, auth, .. } = &self.command {
            if key.as_deref().is_none_or(str::is_empty) {
                errors.push("Preauth key is required (--key or ZIMBRA_PREAUTH_KEY)".to_string());
            }
            if self.envelope && !auth {
                errors.push("--envelope with preauth requires --auth".to_string());
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
