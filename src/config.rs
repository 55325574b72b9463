//! Configuration management for contact-popup
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_GENERATED, DROPDOWN_CLOSE_DELAY_MAX_MS, DROPDOWN_CLOSE_DELAY_MS, POPUP_DEFAULT_WIDTH_PERCENT,
    POPUP_MAX_WIDTH_PERCENT, POPUP_MIN_WIDTH_PERCENT, POPUP_TITLE,
};
use crate::selection::{default_materials, default_preferences, SelectOption};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub logging: LoggingConfig,
    pub options: OptionsConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable mouse support (hover close, clicks, chip removal)
    pub mouse_enabled: bool,
    /// Popup width as a percentage of the terminal width
    pub popup_width_percent: u16,
    /// Delay before an open dropdown closes after the pointer leaves it
    pub close_delay_ms: u64,
    /// Popup title
    pub title: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to file
    pub enabled: bool,
    /// Minimum level written: "error", "warn", "info", "debug" or "trace"
    pub level: String,
}

/// Option lists offered by the two dropdowns
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionsConfig {
    pub materials: Vec<SelectOption>,
    pub preferences: Vec<SelectOption>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: true,
            popup_width_percent: POPUP_DEFAULT_WIDTH_PERCENT,
            close_delay_ms: DROPDOWN_CLOSE_DELAY_MS,
            title: POPUP_TITLE.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            materials: default_materials(),
            preferences: default_preferences(),
        }
    }
}

impl UiConfig {
    pub fn close_delay(&self) -> Duration {
        Duration::from_millis(self.close_delay_ms)
    }
}

impl LoggingConfig {
    /// Parse the configured level
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        self.level
            .parse::<log::LevelFilter>()
            .map_err(|_| anyhow::anyhow!("Invalid logging level '{}'", self.level))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("contact-popup.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("contact-popup").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ui.popup_width_percent < POPUP_MIN_WIDTH_PERCENT || self.ui.popup_width_percent > POPUP_MAX_WIDTH_PERCENT
        {
            anyhow::bail!(
                "popup_width_percent must be between {} and {}, got {}",
                POPUP_MIN_WIDTH_PERCENT,
                POPUP_MAX_WIDTH_PERCENT,
                self.ui.popup_width_percent
            );
        }

        if self.ui.close_delay_ms > DROPDOWN_CLOSE_DELAY_MAX_MS {
            anyhow::bail!(
                "close_delay_ms cannot exceed {} ({} given)",
                DROPDOWN_CLOSE_DELAY_MAX_MS,
                self.ui.close_delay_ms
            );
        }

        self.logging.level_filter()?;

        Self::validate_options("materials", &self.options.materials)?;
        Self::validate_options("preferences", &self.options.preferences)?;

        Ok(())
    }

    /// Validate a single option list
    fn validate_options(name: &str, options: &[SelectOption]) -> Result<()> {
        if options.is_empty() {
            anyhow::bail!("options.{} cannot be empty", name);
        }

        let mut seen = HashSet::new();
        for option in options {
            if option.value.is_empty() {
                anyhow::bail!("options.{}: value cannot be empty (text '{}')", name, option.text);
            }
            if !seen.insert(option.value.as_str()) {
                anyhow::bail!("options.{}: duplicate value '{}'", name, option.value);
            }
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# contact-popup Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("contact-popup"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
