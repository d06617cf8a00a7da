//! TOML configuration file support for render defaults.
//!
//! Instead of passing selection flags on every invocation, users can keep
//! them in a config file:
//!
//! ```toml
//! # argodash.toml
//! [render]
//! view = "depth-time"
//! float_id = "2903123"
//! reference_date = "2024-01-01"
//! ```
//!
//! Command-line flags override config file values.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Root configuration structure for argodash.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Render-specific settings.
    #[serde(default)]
    pub render: RenderConfig,
}

/// Configuration for the render command.
#[derive(Debug, Default, Deserialize)]
pub struct RenderConfig {
    /// View to render (trajectories, depth-time, comparison).
    pub view: Option<String>,

    /// Float to select.
    pub float_id: Option<String>,

    /// Profile reference date to select (YYYY-MM-DD).
    pub reference_date: Option<String>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [render]
            view = "depth-time"
            float_id = "2903123"
            reference_date = "2024-01-01"
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.render.view.as_deref(), Some("depth-time"));
        assert_eq!(config.render.float_id.as_deref(), Some("2903123"));
        assert_eq!(config.render.reference_date.as_deref(), Some("2024-01-01"));
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [render]
            view = "comparison"
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.render.view.as_deref(), Some("comparison"));
        assert_eq!(config.render.float_id, None);
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.render.view, None);
    }
}
