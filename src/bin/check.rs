//! Startup-time validation tool for merchant configuration files
//!
//! Loads a configuration file exactly the way the payment integration does
//! at process startup and reports the result, so a broken file or a missing
//! environment variable is caught before a deploy.
//!
//! # Usage
//!
//! ```bash
//! sogen-config-check /etc/sogenactif.toml
//! sogen-config-check --json /etc/sogenactif.toml
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sogenactif::load_config;

/// Validate a Sogenactif merchant configuration file
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "sogen-config-check")]
struct Cli {
    /// Path to the merchant configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Print the loaded settings as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging goes to stderr so --json output stays parseable
    let default_filter = if cli.verbose { "debug" } else { "error" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    debug!("Checking merchant configuration: {:?}", cli.config);

    match load_config(&cli.config) {
        Ok(settings) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&settings)?);
            } else {
                println!(
                    "{}: configuration OK (merchant {})",
                    cli.config.display(),
                    settings.merchant_id
                );
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("Failed to load merchant configuration: {}", e);
            std::process::exit(1);
        }
    }
}
