// File: src/config.rs
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::core::engine::PaddingPolicy;
use crate::core::types::{DEFAULT_REQUEST_COUNT, MAX_REQUEST_COUNT, MIN_REQUEST_COUNT};
use crate::error::{AppError, Result};
use crate::export::DEFAULT_EXPORT_NAME;
use crate::persistence::default_preferences_path;

pub const CONFIG_ENV: &str = "KEYWORD_FINDER_CONFIG";

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Loads from `KEYWORD_FINDER_CONFIG` or the user config dir; a missing
    /// file means defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&resolve_config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(AppConfig::default());
        }
        let raw = fs::read_to_string(path)?;
        Self::parse(&raw).map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn parse(raw: &str) -> Result<Self> {
        let parsed: AppConfig = toml::from_str(raw)?;
        parsed.validate()?;
        Ok(parsed)
    }

    fn validate(&self) -> Result<()> {
        let g = &self.generator;
        if g.min_count == 0 || g.min_count > g.max_count {
            return Err(AppError::Config(format!(
                "count bounds {}..={} are not a valid range",
                g.min_count, g.max_count
            )));
        }
        Ok(())
    }
}

pub fn resolve_config_path() -> PathBuf {
    if let Ok(path) = env::var(CONFIG_ENV) {
        return Path::new(&path).to_path_buf();
    }

    if let Some(base) = dirs::config_dir() {
        return base.join("keyword-finder").join("config.toml");
    }

    Path::new("keyword-finder.toml").to_path_buf()
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GeneratorConfig {
    #[serde(default = "default_count")]
    pub default_count: usize,
    #[serde(default = "default_min_count")]
    pub min_count: usize,
    #[serde(default = "default_max_count")]
    pub max_count: usize,
    #[serde(default)]
    pub padding: PaddingPolicy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            default_count: default_count(),
            min_count: default_min_count(),
            max_count: default_max_count(),
            padding: PaddingPolicy::default(),
        }
    }
}

fn default_count() -> usize {
    DEFAULT_REQUEST_COUNT
}

fn default_min_count() -> usize {
    MIN_REQUEST_COUNT
}

fn default_max_count() -> usize {
    MAX_REQUEST_COUNT
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct StorageConfig {
    #[serde(default = "default_preferences_path")]
    pub preferences_path: PathBuf,
    #[serde(default = "default_export_name")]
    pub export_file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            preferences_path: default_preferences_path(),
            export_file: default_export_name(),
        }
    }
}

fn default_export_name() -> PathBuf {
    PathBuf::from(DEFAULT_EXPORT_NAME)
}
