//! CLI commands.

mod mint;
mod parse;

use anyhow::Result;
use clap::{Parser, Subcommand};
use guide_id::{is_test_prefix, Guide};
use serde::Serialize;
use tabled::Tabled;

use crate::config::Config;
use crate::output::OutputFormat;

/// GUIDE CLI - Parse, validate, and mint GUIDE identifiers.
#[derive(Debug, Parser)]
#[command(name = "guide")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, global = true, value_enum, default_value = "table")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse a GUIDE, or find GUIDEs embedded in text.
    Parse(parse::ParseCommand),

    /// Build a GUIDE from a prefix and suffix.
    New(mint::NewCommand),

    /// Mint random GUIDEs.
    Random(mint::RandomCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self, config: Config) -> Result<()> {
        let ctx = CommandContext {
            config,
            format: self.format,
        };

        match self.command {
            Commands::Parse(cmd) => cmd.run(ctx),
            Commands::New(cmd) => cmd.run(ctx),
            Commands::Random(cmd) => cmd.run(ctx),
            Commands::Version => {
                println!("guide {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub config: Config,
    pub format: OutputFormat,
}

/// A GUIDE as shown to the user.
#[derive(Debug, Clone, Serialize, Tabled)]
struct GuideRow {
    #[tabled(rename = "GUIDE")]
    guide: String,

    #[tabled(rename = "Prefix")]
    prefix: i32,

    #[tabled(rename = "Suffix")]
    suffix: String,

    #[tabled(rename = "Test")]
    test_prefix: bool,
}

impl From<&Guide> for GuideRow {
    fn from(guide: &Guide) -> Self {
        Self {
            guide: guide.to_string(),
            prefix: guide.prefix(),
            suffix: guide.suffix().to_string(),
            test_prefix: is_test_prefix(guide.prefix()),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn guide_row_from_guide() {
        let guide = Guide::new(999_123, "abc").unwrap();
        let row = GuideRow::from(&guide);
        assert_eq!(row.guide, "guide://999123/abc");
        assert_eq!(row.prefix, 999_123);
        assert_eq!(row.suffix, "abc");
        assert!(row.test_prefix);
    }

    #[test]
    fn format_flag_parses() {
        let cli = Cli::try_parse_from(["guide", "--format", "json", "version"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);

        let cli = Cli::try_parse_from(["guide", "version"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Table);
    }
}
