//! Parse command.

use anyhow::Result;
use clap::Args;
use guide_id::Guide;
use tracing::debug;

use crate::error::CliError;
use crate::output::print_output;

use super::{CommandContext, GuideRow};

/// Parse a GUIDE.
#[derive(Debug, Args)]
pub struct ParseCommand {
    /// GUIDE to parse, or text to scan with --all.
    text: String,

    /// Find every GUIDE embedded in the text instead of parsing it whole.
    #[arg(long)]
    all: bool,
}

impl ParseCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let guides = self.guides()?;
        let rows: Vec<GuideRow> = guides.iter().map(GuideRow::from).collect();
        print_output(&rows, ctx.format);
        Ok(())
    }

    fn guides(&self) -> Result<Vec<Guide>, CliError> {
        if !self.all {
            return Ok(vec![Guide::parse(&self.text)?]);
        }

        let found: Vec<Guide> = Guide::find_all(&self.text).collect();
        debug!(count = found.len(), "Scanned text for GUIDEs");
        if found.is_empty() {
            return Err(CliError::NotFound);
        }
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(text: &str, all: bool) -> ParseCommand {
        ParseCommand {
            text: text.to_string(),
            all,
        }
    }

    #[test]
    fn parses_whole_input() {
        let guides = command("guide://123/abc", false).guides().unwrap();
        assert_eq!(guides, vec![Guide::new(123, "abc").unwrap()]);
    }

    #[test]
    fn rejects_embedded_without_all() {
        let err = command("see guide://123/abc", false).guides().unwrap_err();
        assert!(matches!(err, CliError::Invalid(_)));
    }

    #[test]
    fn scans_with_all() {
        let guides = command("see guide://1/a and guide://2/b", true)
            .guides()
            .unwrap();
        assert_eq!(guides.len(), 2);
        assert_eq!(guides[1].prefix(), 2);
    }

    #[test]
    fn scan_without_match_is_not_found() {
        let err = command("nothing here", true).guides().unwrap_err();
        assert!(matches!(err, CliError::NotFound));
    }
}
