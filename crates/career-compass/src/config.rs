//! TOML configuration for the `careers` CLI.
//!
//! All settings are optional; a missing config file yields the defaults, so
//! the tool works out of the box. Settings only tune presentation and the
//! default recommendation count; scoring policy (tier weights, the adequacy
//! threshold) is fixed in the core crate and deliberately not configurable.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub recommendation: RecommendationConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RecommendationConfig {
    /// Default number of careers returned by `careers recommend`.
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
        }
    }
}

fn default_limit() -> usize {
    career_compass_core::DEFAULT_LIMIT
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    /// Currency symbol used when rendering salaries.
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
        }
    }
}

fn default_currency() -> String {
    "$".to_string()
}

/// Load configuration from `path`, or return defaults when the file does not
/// exist. A file that exists but fails to parse is an error.
pub fn load(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("failed to parse config file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_missing() {
        let config = load(Path::new("/nonexistent/careers.toml")).unwrap();
        assert_eq!(config.recommendation.limit, 3);
        assert_eq!(config.output.currency, "$");
    }

    #[test]
    fn partial_file_fills_defaults() {
        let config: Config = toml::from_str("[recommendation]\nlimit = 5\n").unwrap();
        assert_eq!(config.recommendation.limit, 5);
        assert_eq!(config.output.currency, "$");
    }
}
