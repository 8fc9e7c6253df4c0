//! # Configuration Module
//!
//! This module defines constants and the runtime configuration used by the
//! `pantry-recipes` binary. Values come from the environment (optionally a
//! `.env` file) and can be overridden on the command line.

use log::warn;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

// Constants for recipe matching and generation
pub const DEFAULT_CATALOG_PATH: &str = "data/recipes.json";
pub const DEFAULT_GENERATION_DELAY_MS: u64 = 2000;
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Recipes must score strictly above this percentage to be suggested
pub const MATCH_SCORE_THRESHOLD: f64 = 50.0;
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

pub const CATALOG_PATH_VAR: &str = "PANTRY_CATALOG_PATH";
pub const GENERATION_DELAY_VAR: &str = "PANTRY_GENERATION_DELAY_MS";
pub const LOG_LEVEL_VAR: &str = "PANTRY_LOG_LEVEL";

/// Runtime configuration for the command line application
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// JSON file holding the recipe rows served by the catalog
    pub catalog_path: PathBuf,
    /// Artificial delay awaited before generating recipes, in milliseconds
    pub generation_delay_ms: u64,
    /// Default log filter when `RUST_LOG` is not set
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            generation_delay_ms: DEFAULT_GENERATION_DELAY_MS,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the environment, reading `.env` first if present
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup
    ///
    /// Missing keys keep their defaults. Numeric values that fail to parse
    /// are logged and ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(CATALOG_PATH_VAR).filter(|p| !p.trim().is_empty()) {
            config.catalog_path = PathBuf::from(path.trim());
        }

        if let Some(delay) = parse_var::<u64>(&lookup, GENERATION_DELAY_VAR) {
            config.generation_delay_ms = delay;
        }

        if let Some(level) = lookup(LOG_LEVEL_VAR).filter(|l| !l.trim().is_empty()) {
            config.log_level = level.trim().to_string();
        }

        config
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring invalid value for {}: '{}'", key, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.generation_delay_ms, 2000);
    }

    #[test]
    fn test_values_from_lookup() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (CATALOG_PATH_VAR, "/tmp/recipes.json"),
            (GENERATION_DELAY_VAR, "0"),
            (LOG_LEVEL_VAR, "debug"),
        ]));
        assert_eq!(config.catalog_path, PathBuf::from("/tmp/recipes.json"));
        assert_eq!(config.generation_delay_ms, 0);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_invalid_delay_keeps_default() {
        let config = AppConfig::from_lookup(lookup_from(&[(GENERATION_DELAY_VAR, "soon")]));
        assert_eq!(config.generation_delay_ms, DEFAULT_GENERATION_DELAY_MS);
    }
}
