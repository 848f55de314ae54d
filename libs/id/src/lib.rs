//! # guide-id
//!
//! GUIDE (Globally Unique IDentifiers for Everything) types, parsing, and
//! validation.
//!
//! ## Format
//!
//! A GUIDE is written `guide://{prefix}/{suffix}`:
//!
//! - `prefix` is a non-negative base-10 integer naming the owning namespace
//! - `suffix` is a non-empty string over `[A-Za-z0-9_.-]` naming the resource
//!
//! Examples:
//! - `guide://123/abc`
//! - `guide://999042/0b9e4f8e-2a1c-4b5e-9d6f-3c2a1b0e9f8d`
//!
//! ## Design Principles
//!
//! - GUIDEs are permanent and never reused
//! - Values are immutable and validated at construction
//! - Parsing is strict and round-trips with formatting
//! - Prefixes `999000..=999999` are reserved for tests

mod error;
mod guide;
mod owner;

pub use error::GuideError;
pub use guide::{is_valid_suffix, Guide};
pub use owner::{is_test_prefix, GuideOwner, TEST_PREFIX_RANGE};
