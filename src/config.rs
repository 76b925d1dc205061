//! Search configuration, loaded from TOML

use crate::errors::ConfigError;
use serde::Deserialize;
use std::path::Path;

/// Estimate of the remaining distance from a cell to the destination
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Heuristic {
    /// Straight line between cell centres
    #[default]
    Euclidean,
    /// Step count on an unobstructed hex grid
    Hex,
    /// No estimate, the search behaves like Dijkstra
    Zero,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Heuristic used for queue priorities (default: euclidean)
    pub heuristic: Heuristic,

    /// Seed the start cell with its heuristic instead of 0 (default: false)
    pub seed_with_heuristic: bool,
}

impl SearchConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from TOML text, missing keys take their defaults
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = SearchConfig::parse("").unwrap();
        assert_eq!(config, SearchConfig::default());
        assert_eq!(config.heuristic, Heuristic::Euclidean);
        assert!(!config.seed_with_heuristic);
    }

    #[test]
    fn test_parse_all_keys() {
        let config = SearchConfig::parse("heuristic = \"hex\"\nseed_with_heuristic = true\n").unwrap();
        assert_eq!(config.heuristic, Heuristic::Hex);
        assert!(config.seed_with_heuristic);
    }

    #[test]
    fn test_unknown_heuristic_is_rejected() {
        let result = SearchConfig::parse("heuristic = \"manhattan\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = SearchConfig::load(Path::new("does/not/exist.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
