//! The GUIDE value type.
//!
//! A GUIDE pairs a numeric namespace prefix with a restricted-charset suffix
//! and serializes as `guide://prefix/suffix`.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use uuid::Uuid;

use crate::GuideError;

/// Whole-input pattern used by [`Guide::parse`].
static GUIDE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^guide://([0-9]+)/([A-Za-z0-9_.\-]+)$").expect("GUIDE pattern is valid")
});

/// Search pattern used by [`Guide::find_all`].
static EMBEDDED_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"guide://([0-9]+)/([A-Za-z0-9_.\-]+)").expect("GUIDE pattern is valid")
});

/// Returns true if `c` may appear in a GUIDE suffix.
fn is_suffix_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.')
}

/// Returns true if `suffix` is non-empty and only contains `[A-Za-z0-9_.-]`.
pub fn is_valid_suffix(suffix: &str) -> bool {
    !suffix.is_empty() && suffix.chars().all(is_suffix_char)
}

/// A Globally Unique IDentifier for Everything.
///
/// GUIDEs are assigned to permanent, published resources and are never
/// reused. Two GUIDEs are equal when their prefixes are equal and their
/// suffixes are byte-for-byte equal. Suffix comparison is case-sensitive;
/// see [`Guide::eq_ignore_suffix_case`] for the lexicon's looser rule.
///
/// Ordering is by prefix, then suffix.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Guide {
    prefix: i32,
    suffix: String,
}

impl Guide {
    /// URI scheme of the canonical string form.
    pub const SCHEME: &'static str = "guide";

    /// Creates a GUIDE from a prefix and suffix.
    ///
    /// Fails if the prefix is negative, or if the suffix is empty or contains
    /// a character outside `[A-Za-z0-9_.-]`. Both values are stored as given.
    pub fn new(prefix: i32, suffix: impl Into<String>) -> Result<Self, GuideError> {
        if prefix < 0 {
            return Err(GuideError::NegativePrefix(prefix));
        }

        let suffix = suffix.into();
        if suffix.is_empty() {
            return Err(GuideError::EmptySuffix);
        }
        if !suffix.chars().all(is_suffix_char) {
            return Err(GuideError::InvalidSuffix(suffix));
        }

        Ok(Self { prefix, suffix })
    }

    /// Builds a GUIDE from parts the caller has already validated.
    pub(crate) fn from_validated(prefix: i32, suffix: String) -> Self {
        debug_assert!(prefix >= 0, "GUIDE prefix {prefix} escaped validation");
        debug_assert!(
            is_valid_suffix(&suffix),
            "GUIDE suffix '{suffix}' escaped validation"
        );
        Self { prefix, suffix }
    }

    /// Generates a GUIDE with a random UUID v4 suffix under `prefix`.
    pub fn random(prefix: i32) -> Result<Self, GuideError> {
        if prefix < 0 {
            return Err(GuideError::NegativePrefix(prefix));
        }
        Ok(Self::from_validated(prefix, Uuid::new_v4().to_string()))
    }

    /// Parses a GUIDE from its canonical string form.
    ///
    /// The whole input must be `guide://<digits>/<suffix>`; surrounding text
    /// is rejected. Use [`Guide::find_all`] to pull GUIDEs out of free text.
    pub fn parse(s: &str) -> Result<Self, GuideError> {
        let Some(caps) = GUIDE_PATTERN.captures(s) else {
            return Err(GuideError::Malformed(s.to_string()));
        };
        Self::from_captures(s, &caps[1], &caps[2])
    }

    /// Returns every GUIDE embedded in `text`, in order of appearance.
    ///
    /// Candidates whose prefix overflows are skipped.
    pub fn find_all(text: &str) -> impl Iterator<Item = Guide> + '_ {
        EMBEDDED_PATTERN
            .captures_iter(text)
            .filter_map(|caps| Self::from_captures(&caps[0], &caps[1], &caps[2]).ok())
    }

    fn from_captures(input: &str, prefix: &str, suffix: &str) -> Result<Self, GuideError> {
        let prefix = prefix
            .parse::<i32>()
            .map_err(|_| GuideError::InvalidPrefix {
                input: input.to_string(),
            })?;
        Self::new(prefix, suffix)
    }

    /// The namespace prefix, a non-negative base-10 integer.
    #[must_use]
    pub const fn prefix(&self) -> i32 {
        self.prefix
    }

    /// The local identity within the namespace.
    ///
    /// The lexicon describes this as case-insensitive. A UUID (RFC 4122) is
    /// recommended, though any value in `[A-Za-z0-9_.-]+` is accepted.
    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Formats the GUIDE as `guide://prefix/suffix`.
    #[must_use]
    pub fn as_string(&self) -> String {
        self.to_string()
    }

    /// Consumes the GUIDE, returning its prefix and suffix.
    #[must_use]
    pub fn into_parts(self) -> (i32, String) {
        (self.prefix, self.suffix)
    }

    /// Compares prefixes exactly and suffixes ignoring ASCII case.
    #[must_use]
    pub fn eq_ignore_suffix_case(&self, other: &Guide) -> bool {
        self.prefix == other.prefix && self.suffix.eq_ignore_ascii_case(&other.suffix)
    }
}

impl fmt::Display for Guide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}/{}", Self::SCHEME, self.prefix, self.suffix)
    }
}

impl FromStr for Guide {
    type Err = GuideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Guide {
    type Error = GuideError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<Guide> for String {
    fn from(guide: Guide) -> Self {
        guide.to_string()
    }
}

impl serde::Serialize for Guide {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Guide {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
