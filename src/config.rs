//! Configuration handling for the TUI

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Fallback prediction endpoint
pub const DEFAULT_PREDICT_URL: &str = "http://localhost:8000/predict";

/// Environment variable overriding the prediction endpoint
pub const PREDICT_URL_ENV: &str = "PREDICT_API_URL";

/// User configuration for the TUI
#[derive(Debug, Clone, Deserialize, Default)]
pub struct TuiConfig {
    /// Prediction service endpoint
    pub predict_url: Option<String>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "car-price", "car-price-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the platform config directory
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, defaulting when the file is absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Resolve the endpoint from the environment, this config, then the default
    pub fn predict_url(&self) -> String {
        self.predict_url_with_env(std::env::var(PREDICT_URL_ENV).ok())
    }

    fn predict_url_with_env(&self, env_value: Option<String>) -> String {
        env_value
            .filter(|url| !url.trim().is_empty())
            .or_else(|| {
                self.predict_url
                    .clone()
                    .filter(|url| !url.trim().is_empty())
            })
            .unwrap_or_else(|| DEFAULT_PREDICT_URL.to_string())
    }
}
