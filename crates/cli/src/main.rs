//! zmsoap
//!
//! Renders Zimbra admin SOAP requests as XML or JSON.

use clap::Parser;
use tracing::info;
use zimbra_cli::{CliConfig, init_logging, render};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    info!(
        format = ?config.format,
        envelope = config.envelope,
        "Rendering request"
    );

    let output = render(&config).map_err(|e| anyhow::anyhow!("Cannot build request: {}", e))?;
    println!("{}", output);

    Ok(())
}
