//! Configuration management for the CLI

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::output::OutputFormat;
use stress_client::DEFAULT_API_URL;

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// API endpoint URL
    pub api_url: Option<String>,
    /// Default output format
    pub default_format: Option<String>,
}

impl Config {
    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(&config_path).context("Failed to read config file")?;

        serde_json::from_str(&content).context("Failed to parse config file")
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(&config_path, content).context("Failed to write config file")?;

        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let home = dirs_next::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".config").join("stress").join("config.json"))
    }
}

/// Resolve the effective API URL and output format.
///
/// Flags and environment (handled by clap) take precedence over the config
/// file, which takes precedence over the built-in local default.
pub fn resolve(
    flag_url: Option<&str>,
    flag_format: Option<OutputFormat>,
) -> Result<(String, OutputFormat)> {
    if let (Some(url), Some(format)) = (flag_url, flag_format) {
        return Ok((url.to_string(), format));
    }

    Ok(merge(Config::load()?, flag_url, flag_format))
}

fn merge(
    stored: Config,
    flag_url: Option<&str>,
    flag_format: Option<OutputFormat>,
) -> (String, OutputFormat) {
    let api_url = flag_url
        .map(str::to_string)
        .or(stored.api_url)
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

    let format = flag_format
        .or_else(|| {
            stored
                .default_format
                .as_deref()
                .and_then(|name| OutputFormat::from_str(name, true).ok())
        })
        .unwrap_or_default();

    (api_url, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored() -> Config {
        Config {
            api_url: Some("http://stored:8000".to_string()),
            default_format: Some("json".to_string()),
        }
    }

    #[test]
    fn test_flag_url_wins_over_stored() {
        let (url, _) = merge(stored(), Some("http://example:9000"), None);
        assert_eq!(url, "http://example:9000");
    }

    #[test]
    fn test_stored_url_wins_over_default() {
        let (url, format) = merge(stored(), None, None);
        assert_eq!(url, "http://stored:8000");
        assert!(matches!(format, OutputFormat::Json));
    }

    #[test]
    fn test_defaults_apply_when_nothing_is_set() {
        let (url, format) = merge(Config::default(), None, None);
        assert_eq!(url, DEFAULT_API_URL);
        assert!(matches!(format, OutputFormat::Table));
    }

    #[test]
    fn test_unknown_stored_format_falls_back() {
        let config = Config {
            api_url: None,
            default_format: Some("yaml".to_string()),
        };
        let (_, format) = merge(config, None, None);
        assert!(matches!(format, OutputFormat::Table));
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config {
            api_url: Some("http://127.0.0.1:8000".to_string()),
            default_format: Some("json".to_string()),
        };

        let content = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&content).unwrap();

        assert_eq!(parsed.api_url.as_deref(), Some("http://127.0.0.1:8000"));
        assert_eq!(parsed.default_format.as_deref(), Some("json"));
    }

    #[test]
    fn test_empty_config_deserializes() {
        let parsed: Config = serde_json::from_str("{}").unwrap();
        assert!(parsed.api_url.is_none());
        assert!(parsed.default_format.is_none());
    }
}
