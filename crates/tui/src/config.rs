// MemLab - Memory Step Lab
// Copyright (C) 2024 Zhuo Zhang and Wuqi Zhang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.


//! Configuration system for the MemLab TUI
//!
//! User preferences live in `~/.memlab.toml`. Every table and key is
//! optional; anything left out takes its default.

use crate::ui::Theme;
use eyre::{Context, Result};
use memlab_core::RemountPolicy;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Color theme
    pub theme: Theme,
    /// Section and step navigation
    pub navigation: NavigationConfig,
    /// Screen settings
    pub display: DisplayConfig,
}

/// Navigation settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// What happens to a section's state when the learner leaves it
    pub remount: RemountPolicy,
    /// Section shown at startup (clamped into range)
    pub start_section: i64,
}

/// Screen settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Capture the mouse for wheel scrolling and clickable tabs
    pub mouse: bool,
    /// Show the status bar
    pub status_bar: bool,
    /// Redraw interval in milliseconds
    pub refresh_interval_ms: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { mouse: false, status_bar: true, refresh_interval_ms: 50 }
    }
}

impl Config {
    /// Get the config file path (~/.memlab.toml)
    pub fn config_path() -> Result<PathBuf> {
        let home =
            dirs::home_dir().ok_or_else(|| eyre::eyre!("Unable to determine home directory"))?;
        Ok(home.join(".memlab.toml"))
    }

    /// Load configuration from the default path, creating it if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            info!("Config file not found, creating default at {:?}", config_path);
            let default_config = Self::default();
            default_config.save_to_path(&config_path)?;
            return Ok(default_config);
        }

        Self::load_from_path(&config_path)
    }

    /// Load configuration from an explicit path; a missing file is an error
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path:?}"))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file as TOML: {path:?}"))?;

        debug!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Save configuration to `path`
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).with_context(|| "Failed to serialize config to TOML")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {path:?}"))?;

        debug!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Switch to the next theme in the cycle
    pub fn cycle_theme(&mut self) -> Theme {
        self.theme = self.theme.next();
        info!("Switched to theme: {}", self.theme);
        self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.display.status_bar);
        assert_eq!(config.navigation.remount, RemountPolicy::Reset);
    }

    #[test]
    fn test_partial_tables() {
        let config: Config = toml::from_str(
            r#"
            theme = "high_contrast"

            [navigation]
            remount = "preserve"
            "#,
        )
        .unwrap();

        assert_eq!(config.theme, Theme::HighContrast);
        assert_eq!(config.navigation.remount, RemountPolicy::Preserve);
        assert_eq!(config.navigation.start_section, 0);
        assert_eq!(config.display, DisplayConfig::default());
    }

    #[test]
    fn test_unknown_theme_rejected() {
        assert!(toml::from_str::<Config>("theme = \"solarized\"").is_err());
    }

    #[test]
    fn test_cycle_theme() {
        let mut config = Config::default();
        assert_eq!(config.cycle_theme(), Theme::Terminal);
        assert_eq!(config.theme, Theme::Terminal);
    }
}
