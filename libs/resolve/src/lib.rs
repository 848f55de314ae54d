//! # guide-resolve
//!
//! Resolution of GUIDEs to temporal URLs.
//!
//! A GUIDE is permanent, but the URL a resource lives at is not. A resolver
//! is the directory that maps one to the other:
//!
//! - Forward lookup (`guide -> url`) and reverse lookup (`url -> guide`)
//! - Registration, update, and deletion, restricted to the prefix owner
//!
//! Resolver errors distinguish a missing mapping, a conflicting
//! registration, an ownership failure, and an unreachable store. Only the
//! last leaves the outcome of an operation unknown.
//!
//! [`MemoryResolver`] is an in-process implementation for tests and
//! development.

mod error;
mod memory;
mod resolver;

pub use error::ResolveError;
pub use memory::MemoryResolver;
pub use resolver::Resolver;

/// Re-export url for consumers building resolver arguments
pub use url::Url;
