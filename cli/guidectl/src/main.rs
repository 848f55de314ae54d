//! guidectl (guide) - CLI for GUIDE identifiers
//!
//! Parses, validates, and mints `guide://prefix/suffix` identifiers.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

use commands::Cli;
use config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error::print_error(&e);
            std::process::exit(1);
        }
    };

    // Prefer RUST_LOG, fall back to GUIDE_LOG_LEVEL
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_level.clone().into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = cli.run(config) {
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
