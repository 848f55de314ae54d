//! Prefix owners.
//!
//! A [`GuideOwner`] holds a validated prefix and mints GUIDEs under it, so
//! callers only handle errors for the parts that can still be wrong.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::{Guide, GuideError};

/// Prefixes reserved for testing and other non-production GUIDEs.
pub const TEST_PREFIX_RANGE: RangeInclusive<i32> = 999_000..=999_999;

/// Returns true if `prefix` lies in [`TEST_PREFIX_RANGE`].
pub fn is_test_prefix(prefix: i32) -> bool {
    TEST_PREFIX_RANGE.contains(&prefix)
}

/// The owner of a GUIDE prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuideOwner {
    prefix: i32,
}

impl GuideOwner {
    /// Creates an owner for `prefix`, which must be non-negative.
    pub fn new(prefix: i32) -> Result<Self, GuideError> {
        if prefix < 0 {
            return Err(GuideError::NegativePrefix(prefix));
        }
        Ok(Self { prefix })
    }

    /// Returns an owner with a prefix drawn uniformly from
    /// [`TEST_PREFIX_RANGE`].
    pub fn test_owner() -> Self {
        Self {
            prefix: rand::rng().random_range(TEST_PREFIX_RANGE),
        }
    }

    /// The owned prefix.
    #[must_use]
    pub const fn prefix(&self) -> i32 {
        self.prefix
    }

    /// Returns true if the owned prefix is a test prefix.
    #[must_use]
    pub fn is_test(&self) -> bool {
        is_test_prefix(self.prefix)
    }

    /// Returns true if `guide` lives under the owned prefix.
    #[must_use]
    pub fn owns(&self, guide: &Guide) -> bool {
        guide.prefix() == self.prefix
    }

    /// Creates a new, random GUIDE under the owned prefix.
    #[must_use]
    pub fn random_guide(&self) -> Guide {
        Guide::from_validated(self.prefix, uuid::Uuid::new_v4().to_string())
    }

    /// Creates a GUIDE under the owned prefix with the given suffix.
    pub fn with_suffix(&self, suffix: impl Into<String>) -> Result<Guide, GuideError> {
        Guide::new(self.prefix, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_test_owner_random() {
        for _ in 0..1_000 {
            let owner = GuideOwner::test_owner();
            let id = owner.random_guide();
            assert!(TEST_PREFIX_RANGE.contains(&id.prefix()));
            assert!(owner.is_test());
        }
    }

    #[test]
    fn test_random_guide() {
        let owner = GuideOwner::new(123).unwrap();
        let id = owner.random_guide();
        assert_eq!(id.prefix(), 123);
        assert_eq!(id.suffix().len(), 36);
        assert!(owner.owns(&id));
    }

    #[test]
    fn test_with_suffix() {
        let owner = GuideOwner::new(123).unwrap();
        let id = owner.with_suffix("456").unwrap();
        assert_eq!(id.prefix(), 123);
        assert_eq!(id.suffix(), "456");
    }

    #[test]
    fn test_with_invalid_suffix() {
        let owner = GuideOwner::new(123).unwrap();
        assert!(owner.with_suffix("a b").is_err());
        assert_eq!(owner.with_suffix("").unwrap_err(), GuideError::EmptySuffix);
    }

    #[test]
    fn test_negative_owner() {
        assert_eq!(
            GuideOwner::new(-1).unwrap_err(),
            GuideError::NegativePrefix(-1)
        );
    }

    #[test]
    fn test_owns() {
        let owner = GuideOwner::new(7).unwrap();
        assert!(owner.owns(&Guide::new(7, "x").unwrap()));
        assert!(!owner.owns(&Guide::new(8, "x").unwrap()));
        assert!(!owner.is_test());
    }

    #[test]
    fn test_prefix_range_bounds() {
        assert!(is_test_prefix(999_000));
        assert!(is_test_prefix(999_999));
        assert!(!is_test_prefix(998_999));
        assert!(!is_test_prefix(1_000_000));
    }
}
