//! Configuration from the environment.
//!
//! - `GUIDE_PREFIX`: prefix used for minting when `--prefix` is not given
//! - `GUIDE_LOG_LEVEL`: log filter when `RUST_LOG` is unset

use anyhow::{Context, Result};
use guide_id::GuideOwner;

/// Default log filter.
const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone)]
pub struct Config {
    /// Owner for the default prefix, if one is configured.
    pub default_owner: Option<GuideOwner>,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let default_owner = match lookup("GUIDE_PREFIX") {
            Some(raw) if !raw.trim().is_empty() => {
                let prefix: i32 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("GUIDE_PREFIX '{raw}' is not an integer"))?;
                let owner = GuideOwner::new(prefix)
                    .with_context(|| format!("GUIDE_PREFIX '{raw}' is not a valid prefix"))?;
                Some(owner)
            }
            _ => None,
        };

        let log_level = lookup("GUIDE_LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(Self {
            default_owner,
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_config_default() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert!(config.default_owner.is_none());
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_config_prefix() {
        let config = Config::from_lookup(lookup_from(&[
            ("GUIDE_PREFIX", " 123 "),
            ("GUIDE_LOG_LEVEL", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.default_owner.map(|o| o.prefix()), Some(123));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_config_blank_prefix_ignored() {
        let config = Config::from_lookup(lookup_from(&[("GUIDE_PREFIX", "  ")])).unwrap();
        assert!(config.default_owner.is_none());
    }

    #[test]
    fn test_config_invalid_prefix() {
        assert!(Config::from_lookup(lookup_from(&[("GUIDE_PREFIX", "abc")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("GUIDE_PREFIX", "-5")])).is_err());
    }
}
