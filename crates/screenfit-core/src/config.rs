use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::ScreenError;

const DEFAULT_CONFIG: &str = include_str!("../../../config/default.toml");

/// Top-level configuration for the screenfit front ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenfitConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub json: bool,
    pub precision: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive.
    pub filter: String,
}

impl ScreenfitConfig {
    /// Load the user config file if it exists, otherwise the built-in defaults.
    pub fn load() -> Result<Self, ScreenError> {
        let user_path = Self::config_path();
        if user_path.exists() {
            Self::load_from(&user_path)
        } else {
            Self::from_toml(DEFAULT_CONFIG)
        }
    }

    /// Load from an explicit path. Missing sections take their defaults.
    pub fn load_from(path: &Path) -> Result<Self, ScreenError> {
        let content = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "Loading config");
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ScreenError> {
        toml::from_str(content).map_err(|e| ScreenError::Config(e.to_string()))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ScreenError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| ScreenError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Path to the user config file (XDG on Linux, AppData on Windows).
    pub fn config_path() -> PathBuf {
        ProjectDirs::from("", "", "screenfit")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}

impl Default for ScreenfitConfig {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("built-in default config is valid TOML")
    }
}

// Section defaults back missing keys during deserialization, so they must not
// parse DEFAULT_CONFIG themselves. Keep them in step with config/default.toml.
impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            json: false,
            precision: 2,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "screenfit=info".to_string(),
        }
    }
}
