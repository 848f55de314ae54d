//! Commands that create GUIDEs.

use anyhow::Result;
use clap::Args;
use guide_id::{Guide, GuideOwner};
use tracing::info;

use crate::error::CliError;
use crate::output::{print_output, print_success, OutputFormat};

use super::{CommandContext, GuideRow};

/// Build a GUIDE from its parts.
#[derive(Debug, Args)]
pub struct NewCommand {
    /// Namespace prefix (non-negative integer).
    #[arg(allow_negative_numbers = true)]
    prefix: i32,

    /// Local identifier ([A-Za-z0-9_.-]+).
    suffix: String,
}

impl NewCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let guide = Guide::new(self.prefix, self.suffix).map_err(CliError::from)?;
        print_output(&[GuideRow::from(&guide)], ctx.format);
        Ok(())
    }
}

/// Mint random GUIDEs.
#[derive(Debug, Args)]
pub struct RandomCommand {
    /// Prefix to mint under. Defaults to GUIDE_PREFIX.
    #[arg(long, allow_negative_numbers = true, conflicts_with = "test")]
    prefix: Option<i32>,

    /// Mint under a random prefix from the reserved test range.
    #[arg(long)]
    test: bool,

    /// Number of GUIDEs to mint.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=10_000))]
    count: u32,
}

impl RandomCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let owner = self.owner(ctx.config.default_owner)?;
        let guides: Vec<Guide> = (0..self.count).map(|_| owner.random_guide()).collect();
        info!(prefix = owner.prefix(), count = guides.len(), "Minted GUIDEs");

        let rows: Vec<GuideRow> = guides.iter().map(GuideRow::from).collect();
        print_output(&rows, ctx.format);
        if ctx.format == OutputFormat::Table && owner.is_test() {
            print_success(&format!(
                "Minted under test prefix {}; do not publish these GUIDEs.",
                owner.prefix()
            ));
        }
        Ok(())
    }

    /// Picks the owner to mint under: `--test`, then `--prefix`, then config.
    fn owner(&self, default_owner: Option<GuideOwner>) -> Result<GuideOwner, CliError> {
        if self.test {
            return Ok(GuideOwner::test_owner());
        }
        match self.prefix {
            Some(prefix) => Ok(GuideOwner::new(prefix)?),
            None => default_owner.ok_or(CliError::NoPrefix),
        }
    }
}
