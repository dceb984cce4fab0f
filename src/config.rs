//! Configuration management and validation.
//!
//! Configuration is layered: built-in defaults, then an optional TOML file,
//! then `UTILITY_KNOWLEDGE_*` environment variables. The CLI applies its own
//! flags on top (see `cli::commands::shared`).

use crate::constants::{
    self, CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_COLUMN_RENAMES, DEFAULT_DATA_DIR,
    DEFAULT_EQUIPMENT_FILE, DEFAULT_LOG_LEVEL, DEFAULT_MAINTENANCE_FILE, DEFAULT_MISSING_VALUES,
    LOG_LEVELS, env_vars,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the two input sources live
    pub data: DataConfig,

    /// Normalization applied while loading
    pub loader: LoaderConfig,

    pub logging: LoggingConfig,
}

/// Input data locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory the file names below are resolved against
    pub data_dir: PathBuf,

    /// Equipment inventory (CSV); absolute paths ignore `data_dir`
    pub equipment_file: PathBuf,

    /// Maintenance logs (JSON array); absolute paths ignore `data_dir`
    pub maintenance_file: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            equipment_file: PathBuf::from(DEFAULT_EQUIPMENT_FILE),
            maintenance_file: PathBuf::from(DEFAULT_MAINTENANCE_FILE),
        }
    }
}

impl DataConfig {
    /// Full path of the equipment inventory
    pub fn equipment_path(&self) -> PathBuf {
        self.data_dir.join(&self.equipment_file)
    }

    /// Full path of the maintenance logs
    pub fn maintenance_path(&self) -> PathBuf {
        self.data_dir.join(&self.maintenance_file)
    }
}

/// Loader normalization settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Equipment header renames (source column -> record field)
    pub column_renames: BTreeMap<String, String>,

    /// Cell texts treated as absent in the equipment source
    pub missing_values: Vec<String>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            column_renames: DEFAULT_COLUMN_RENAMES
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
            missing_values: DEFAULT_MISSING_VALUES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl LoaderConfig {
    /// Whether a cell text is one of the configured missing-value markers
    pub fn is_missing(&self, value: &str) -> bool {
        self.missing_values.iter().any(|marker| marker == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of error, warn, info, debug, trace
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Default config file location (`<config dir>/utility-knowledge/config.toml`)
    pub fn default_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| Error::configuration("Could not determine user config directory"))
    }

    /// Load a configuration file on top of the defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read config file {}", path.display()), e)
        })?;

        toml::from_str(&content).map_err(|e| {
            Error::configuration(format!(
                "Invalid config file {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Load configuration using layered approach (defaults -> file -> env)
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => {
                debug!("Loading config file: {}", path.display());
                Self::from_file(path)?
            }
            None => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Apply environment overrides through a lookup function
    ///
    /// Taking the lookup as a parameter keeps tests independent of the
    /// process environment.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(env_vars::DATA_DIR) {
            self.data.data_dir = PathBuf::from(dir);
        }
        if let Some(file) = lookup(env_vars::EQUIPMENT_FILE) {
            self.data.equipment_file = PathBuf::from(file);
        }
        if let Some(file) = lookup(env_vars::MAINTENANCE_FILE) {
            self.data.maintenance_file = PathBuf::from(file);
        }
        if let Some(level) = lookup(env_vars::LOG_LEVEL) {
            self.logging.level = level.to_lowercase();
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.data.equipment_file.as_os_str().is_empty() {
            return Err(Error::configuration("Equipment file name cannot be empty"));
        }
        if self.data.maintenance_file.as_os_str().is_empty() {
            return Err(Error::configuration("Maintenance file name cannot be empty"));
        }

        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(Error::configuration(format!(
                "Unknown log level '{}': expected one of {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        let mut targets = HashSet::new();
        for (from, to) in &self.loader.column_renames {
            if !constants::EQUIPMENT_FIELDS.contains(&to.as_str()) {
                return Err(Error::configuration(format!(
                    "Column rename '{}' -> '{}' targets an unknown equipment field",
                    from, to
                )));
            }
            if !targets.insert(to.as_str()) {
                return Err(Error::configuration(format!(
                    "More than one column is renamed to '{}'",
                    to
                )));
            }
        }

        Ok(())
    }
}
