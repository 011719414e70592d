//! Runtime configuration for the `minogrid` simulation binary

use std::env;

use tracing::Level;

use crate::types::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    pub width: u16,
    pub height: u16,
    pub seed: u32,
    pub max_pieces: u32,
    pub log_level: Level,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed: 1,
            max_pieces: 500,
            log_level: Level::INFO,
        }
    }
}

impl SimConfig {
    /// Create from environment variables
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `MINOGRID_WIDTH` | 10 |
    /// | `MINOGRID_HEIGHT` | 24 |
    /// | `MINOGRID_SEED` | 1 |
    /// | `MINOGRID_MAX_PIECES` | 500 |
    /// | `MINOGRID_LOG` | `info` |
    ///
    /// Values that fail to parse fall back to their defaults. Dimensions
    /// are validated when the playfield is built.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`SimConfig::from_env`] over an arbitrary lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let parsed = |key: &str| lookup(key).map(|s| s.trim().to_string());

        Self {
            width: parsed("MINOGRID_WIDTH")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.width),
            height: parsed("MINOGRID_HEIGHT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.height),
            seed: parsed("MINOGRID_SEED")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.seed),
            max_pieces: parsed("MINOGRID_MAX_PIECES")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_pieces),
            log_level: parsed("MINOGRID_LOG")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.log_level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(SimConfig::from_lookup(lookup(&[])), SimConfig::default());
    }

    #[test]
    fn test_reads_values() {
        let config = SimConfig::from_lookup(lookup(&[
            ("MINOGRID_WIDTH", "12"),
            ("MINOGRID_HEIGHT", " 30 "),
            ("MINOGRID_SEED", "99"),
            ("MINOGRID_MAX_PIECES", "10"),
            ("MINOGRID_LOG", "debug"),
        ]));
        assert_eq!(config.width, 12);
        assert_eq!(config.height, 30);
        assert_eq!(config.seed, 99);
        assert_eq!(config.max_pieces, 10);
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = SimConfig::from_lookup(lookup(&[
            ("MINOGRID_WIDTH", "wide"),
            ("MINOGRID_LOG", "loud"),
        ]));
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert_eq!(config.log_level, Level::INFO);
    }
}
