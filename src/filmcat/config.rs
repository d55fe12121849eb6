use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "filmcat.json";
const DEFAULT_DATA_FILE: &str = "movies.json";
const DEFAULT_LOG_LEVEL: &str = "warn";
pub const DEFAULT_LOOKUP_URL: &str = "http://www.omdbapi.com/";
pub const DEFAULT_LOOKUP_KEY: &str = "2af677b2";

/// Configuration for filmcat, stored in `filmcat.json` next to the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Backing file for the catalog, relative to the config directory
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Log filter used when `--verbose` is not given
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub lookup: LookupConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LookupConfig {
    #[serde(default = "default_lookup_url")]
    pub base_url: String,

    #[serde(default = "default_lookup_key")]
    pub api_key: String,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_lookup_url() -> String {
    DEFAULT_LOOKUP_URL.to_string()
}

fn default_lookup_key() -> String {
    DEFAULT_LOOKUP_KEY.to_string()
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: default_lookup_url(),
            api_key: default_lookup_key(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            log_level: default_log_level(),
            lookup: LookupConfig::default(),
        }
    }
}

impl CatalogConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        serde_json::from_str(&content)
            .map_err(|e| CatalogError::Config(format!("{}: {}", config_path.display(), e)))
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| CatalogError::Config(e.to_string()))?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// Resolve the backing file against `config_dir` unless it is absolute.
    pub fn data_path<P: AsRef<Path>>(&self, config_dir: P) -> PathBuf {
        if self.data_file.is_absolute() {
            self.data_file.clone()
        } else {
            config_dir.as_ref().join(&self.data_file)
        }
    }
}
