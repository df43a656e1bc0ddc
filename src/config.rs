use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::wizard::settings::{Difficulty, MAX_QUESTIONS, MIN_QUESTIONS};

fn default_total_questions() -> u32 {
    20
}

fn default_accepted_extensions() -> Vec<String> {
    [".pdf", ".doc", ".docx", ".txt", ".rtf"]
        .iter()
        .map(|ext| ext.to_string())
        .collect()
}

/// Application configuration
///
/// Holds the defaults a fresh wizard session starts from and the
/// reference-file extension filter. Live wizard selections are never
/// written here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Question count a new session starts with
    #[serde(default = "default_total_questions")]
    pub default_total_questions: u32,

    /// Difficulty a new session starts with
    #[serde(default)]
    pub default_difficulty: Difficulty,

    /// File extensions accepted for reference attachments
    #[serde(default = "default_accepted_extensions")]
    pub accepted_extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_total_questions: default_total_questions(),
            default_difficulty: Difficulty::default(),
            accepted_extensions: default_accepted_extensions(),
        }
    }
}

impl Config {
    /// Load configuration from the platform-specific config directory.
    /// Creates default config if file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content =
                fs::read_to_string(&config_path).map_err(|e| ConfigError::LoadFailed {
                    path: config_path.display().to_string(),
                    source: Box::new(e),
                })?;
            let config: Config =
                serde_json::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path: config_path.display().to_string(),
                    source: Box::new(e),
                })?;
            config.validate()?;

            tracing::debug!("Loaded config from: {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save()?;
            tracing::debug!("Created default config at: {}", config_path.display());
            Ok(config)
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::DirectoryCreationFailed {
                path: parent.display().to_string(),
                source: e,
            })?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: config_path.display().to_string(),
            source: Box::new(e),
        })?;
        fs::write(&config_path, json).map_err(|e| ConfigError::SaveFailed {
            path: config_path.display().to_string(),
            source: Box::new(e),
        })?;

        Ok(())
    }

    /// Reject defaults that a fresh session could not actually hold
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_QUESTIONS..=MAX_QUESTIONS).contains(&self.default_total_questions) {
            return Err(ConfigError::Invalid(format!(
                "default_total_questions must be {}-{}, got {}",
                MIN_QUESTIONS, MAX_QUESTIONS, self.default_total_questions
            )));
        }
        if self.accepted_extensions.is_empty() {
            return Err(ConfigError::Invalid(
                "accepted_extensions must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Check whether a path's extension is on the accepted list
    pub fn accepts_extension(&self, path: &Path) -> bool {
        let Some(extension) = path.extension().and_then(|ext| ext.to_str()) else {
            return false;
        };
        let dotted = format!(".{}", extension.to_ascii_lowercase());
        self.accepted_extensions
            .iter()
            .any(|accepted| accepted.eq_ignore_ascii_case(&dotted))
    }

    /// Get the config file path in the user config directory
    fn config_path() -> Result<PathBuf, ConfigError> {
        let base = dirs::config_dir().ok_or_else(|| {
            ConfigError::Invalid("Could not determine user config directory".to_string())
        })?;
        Ok(base.join("SmartBankEDU").join("config.json"))
    }

    /// Get the config file path for display purposes
    pub fn config_path_display() -> String {
        Self::config_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|_| "unknown".to_string())
    }
}
