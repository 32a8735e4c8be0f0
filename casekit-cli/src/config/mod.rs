//! Configuration module
//!
//! Loaded from TOML. Every section and field has a default, so an empty file
//! or no file at all is a valid configuration.

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory name under the platform config directory
pub const APP_DIR: &str = "casekit";

const CONFIG_FILE: &str = "config.toml";

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Recent and pinned item configuration
    #[serde(default)]
    pub history: HistoryConfig,

    /// State persistence configuration
    #[serde(default)]
    pub state: StateConfig,
}

/// Output-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Lines shown per result preview
    pub preview_lines: usize,

    /// Characters shown per preview line
    pub preview_width: usize,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            preview_lines: 2,
            preview_width: 256,
            pretty_json: true,
        }
    }
}

/// Which of the two leading sections comes first
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SectionOrder {
    /// Recently used, then pinned
    #[default]
    RecentFirst,
    /// Pinned, then recently used
    PinnedFirst,
}

/// Recent and pinned item configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct HistoryConfig {
    /// Recently used items listed before the catalog (0 disables)
    pub recent_items: usize,

    /// Ordering of the recent and pinned sections
    pub order: SectionOrder,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            recent_items: 3,
            order: SectionOrder::RecentFirst,
        }
    }
}

/// State persistence configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
#[serde(default)]
pub struct StateConfig {
    /// Override for the state file location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl CliConfig {
    /// Load the configuration.
    ///
    /// An explicit path must exist. Without one, the default location is
    /// used when present, otherwise the built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match default_config_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => {
                    log::debug!("No configuration file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Parse and validate a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse and validate configuration text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<()> {
        self.output.format()?;
        if self.output.preview_lines == 0 {
            return Err(
                CliError::ConfigError("output.preview_lines must be at least 1".into()).into(),
            );
        }
        if self.output.preview_width == 0 {
            return Err(
                CliError::ConfigError("output.preview_width must be at least 1".into()).into(),
            );
        }
        Ok(())
    }
}

impl OutputConfig {
    /// The configured default format
    pub fn format(&self) -> Result<OutputFormat> {
        OutputFormat::from_str(&self.default_format, true).map_err(|_| {
            CliError::ConfigError(format!(
                "unknown output.default_format '{}' (expected text, json or markdown)",
                self.default_format
            ))
            .into()
        })
    }
}

/// `<config dir>/casekit/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}
