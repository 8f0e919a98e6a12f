// Playground configuration.
// Mirrors assets/config/default.json, which is embedded in the binary; a user
// file passed with --config replaces it entirely.
use anyhow::{Context, Result};
use kompkit_core::KitSettings;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    pub version: String,
    #[serde(default)]
    pub kit: KitSettings,
    pub search: SearchSettings,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SearchSettings {
    pub max_results: usize,
    pub catalog: Vec<String>,
}

impl AppConfig {
    pub fn load_default() -> Result<Self> {
        let config_str = include_str!("../assets/config/default.json");
        Self::from_json_str(config_str).context("Embedded default configuration is invalid")
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        Self::from_json_str(&config_str).with_context(|| format!("Invalid config file '{}'", path.display()))
    }

    fn from_json_str(config_str: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(config_str)?;
        config.kit.validate()?;
        Ok(config)
    }
}
