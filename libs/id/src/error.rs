//! Error types for GUIDE parsing and validation.

use thiserror::Error;

/// Errors that can occur when constructing or parsing a GUIDE.
///
/// Every variant means the input is not a valid identifier; no GUIDE was
/// created.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GuideError {
    /// The prefix is below zero.
    #[error("GUIDE prefix must be a non-negative integer, got {0}")]
    NegativePrefix(i32),

    /// The suffix is empty.
    #[error("GUIDE must have a defined suffix")]
    EmptySuffix,

    /// The suffix contains a character outside `[A-Za-z0-9_.-]`.
    #[error(
        "invalid GUIDE suffix '{0}': only A-Z, a-z, 0-9, underscore, hyphen, and period are allowed"
    )]
    InvalidSuffix(String),

    /// The input does not have the `guide://prefix/suffix` shape.
    #[error("'{0}' is not a valid GUIDE, expected guide://prefix/suffix")]
    Malformed(String),

    /// The prefix digits do not fit a non-negative 32-bit integer.
    #[error("invalid GUIDE '{input}': prefix must be a valid non-negative integer")]
    InvalidPrefix { input: String },
}

impl GuideError {
    /// Returns true if this error concerns the prefix.
    pub fn is_prefix_error(&self) -> bool {
        matches!(
            self,
            GuideError::NegativePrefix(_) | GuideError::InvalidPrefix { .. }
        )
    }

    /// Returns true if this error concerns the suffix.
    pub fn is_suffix_error(&self) -> bool {
        matches!(self, GuideError::EmptySuffix | GuideError::InvalidSuffix(_))
    }
}
