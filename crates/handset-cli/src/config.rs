//! Configuration management for the CLI
//!
//! This module handles loading configuration from:
//! - Default values
//! - Configuration files (YAML/JSON)
//! - Command-line arguments (applied in `main`)

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Interactive shell settings
    pub shell: ShellConfig,

    /// Output settings
    pub output: OutputConfig,
}

/// Interactive shell configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShellConfig {
    /// Ask again after an invalid answer instead of failing
    pub reprompt_on_invalid: bool,

    /// Total attempts per prompt when re-prompting
    pub max_attempts: u32,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Use colored output when the terminal supports it
    pub color: bool,

    /// Line printed after each spec listing
    pub separator: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            reprompt_on_invalid: false,
            max_attempts: 3,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            separator: "-".repeat(20),
        }
    }
}

impl ShellConfig {
    /// Attempts allowed per prompt, never less than one
    pub fn attempts(&self) -> u32 {
        if self.reprompt_on_invalid {
            self.max_attempts.max(1)
        } else {
            1
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::config(format!(
                "config file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;

        let config = if is_yaml(path) {
            serde_yaml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };

        Ok(config)
    }

    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        for path in &Self::default_config_paths() {
            if path.exists() {
                match Self::from_file(path) {
                    Ok(config) => {
                        tracing::debug!(path = %path.display(), "Loaded configuration");
                        return Ok(config);
                    }
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "Failed to load config");
                    }
                }
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file or default locations
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        if let Some(path) = file {
            Self::from_file(path)
        } else {
            Self::load()
        }
    }

    /// Get default configuration file paths to check
    fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from(".handset.yaml"),
            PathBuf::from(".handset.json"),
            PathBuf::from("handset.yaml"),
            PathBuf::from("handset.json"),
        ];

        if let Some(config_dir) = dirs::config_dir() {
            let handset_dir = config_dir.join("handset");
            paths.push(handset_dir.join("config.yaml"));
            paths.push(handset_dir.join("config.json"));
        }

        paths
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|s| s.to_str()),
        Some("yaml") | Some("yml")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(!config.shell.reprompt_on_invalid);
        assert_eq!(config.shell.max_attempts, 3);
        assert_eq!(config.shell.attempts(), 1);
        assert!(config.output.color);
        assert_eq!(config.output.separator, "--------------------");
    }

    #[test]
    fn test_attempts_floor() {
        let shell = ShellConfig {
            reprompt_on_invalid: true,
            max_attempts: 0,
        };
        assert_eq!(shell.attempts(), 1);
    }

    #[test]
    fn test_load_yaml_partial() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("handset.yaml");
        fs::write(&path, "shell:\n  reprompt_on_invalid: true\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert!(config.shell.reprompt_on_invalid);
        assert_eq!(config.shell.max_attempts, 3);
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_load_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("handset.json");
        fs::write(&path, r#"{"output": {"color": false, "separator": "=="}}"#).unwrap();

        let config = Config::from_file(&path).unwrap();
        assert!(!config.output.color);
        assert_eq!(config.output.separator, "==");
        assert_eq!(config.shell, ShellConfig::default());
    }

    #[test]
    fn test_invalid_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("handset.json");
        fs::write(&path, "{not json").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_missing_explicit_file_is_config_error() {
        let dir = TempDir::new().unwrap();
        let err = Config::load_with_file(Some(dir.path().join("nope.yaml").as_path())).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
