use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for censor
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Skip files that fail instead of aborting the batch
    #[serde(default)]
    pub keep_going: bool,

    #[serde(default)]
    pub recognizer: RecognizerConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecognizerConfig {
    /// Lexicon model file; the built-in model is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<PathBuf>,
}

impl Config {
    /// Load config from the default location, or defaults if there is none
    pub fn load() -> anyhow::Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Config::default()),
        }
    }

    /// Load config from an explicit file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Get config file path
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "censor", "censor")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
