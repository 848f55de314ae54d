//! Resolver error types.

use guide_id::{Guide, GuideError};
use thiserror::Error;

/// Errors reported at the resolver boundary.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// No mapping exists for the given GUIDE or URL.
    #[error("unknown to the resolver: {0}")]
    Unknown(String),

    /// The mapping conflicts with an existing registration.
    #[error("GUIDE '{guide}' is already registered with the resolver")]
    AlreadyExists { guide: Guide },

    /// The caller does not own the GUIDE's prefix.
    #[error("not the owner of GUIDE prefix {prefix}")]
    NotPrefixOwner { prefix: i32 },

    /// The backing store could not be reached. The outcome is unknown.
    #[error("resolver I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// The input was not a valid GUIDE.
    #[error(transparent)]
    Invalid(#[from] GuideError),
}

impl ResolveError {
    /// Returns true if the resolver determined the outcome.
    ///
    /// I/O failures leave it unknown whether the operation took effect.
    pub fn is_definitive(&self) -> bool {
        !matches!(self, ResolveError::Io(_))
    }

    /// Returns true if this error reports a missing mapping.
    pub fn is_unknown(&self) -> bool {
        matches!(self, ResolveError::Unknown(_))
    }

    /// Returns the conflicting GUIDE of an `AlreadyExists` error.
    pub fn existing_guide(&self) -> Option<&Guide> {
        match self {
            ResolveError::AlreadyExists { guide } => Some(guide),
            _ => None,
        }
    }
}
