//! Error handling and display for the CLI.

use colored::Colorize;
use guide_id::GuideError;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("No prefix specified. Use --prefix, --test, or set GUIDE_PREFIX.")]
    NoPrefix,

    #[error("No GUIDE found in input")]
    NotFound,

    #[error(transparent)]
    Invalid(#[from] GuideError),
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "Error:".red().bold(), err);

    let Some(cli_err) = err.downcast_ref::<CliError>() else {
        return;
    };

    let hint = match cli_err {
        CliError::NoPrefix => "Hint: Run `guide random --test` to mint under a test prefix.",
        CliError::NotFound => "Hint: GUIDEs look like guide://123/abc.",
        CliError::Invalid(e) if e.is_suffix_error() => {
            "Hint: Suffixes may only use A-Z, a-z, 0-9, underscore, hyphen, and period."
        }
        CliError::Invalid(e) if e.is_prefix_error() => {
            "Hint: Prefixes are non-negative integers up to 2147483647."
        }
        CliError::Invalid(_) => "Hint: GUIDEs look like guide://123/abc.",
    };
    eprintln!("\n{}", hint.yellow());
}
