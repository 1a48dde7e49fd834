//! Configuration management for creamery.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use chrono::format::{Item, StrftimeItems};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default data directory name.
const DATA_DIR_NAME: &str = "creamery";

/// Default database file name.
const DATABASE_FILE_NAME: &str = "creamery.db";

/// Prefix for environment overrides.
const ENV_PREFIX: &str = "CREAMERY_";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `CREAMERY_`, sections split on `__`)
/// 2. TOML config file at `~/.config/creamery/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage configuration.
    pub storage: StorageConfig,
    /// Budget configuration.
    pub budget: BudgetConfig,
    /// Recipe configuration.
    pub recipes: RecipesConfig,
    /// Interactive shell configuration.
    pub shell: ShellConfig,
}

/// Storage-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the database file.
    /// Defaults to `~/.local/share/creamery/creamery.db`
    pub database_path: Option<PathBuf>,
}

/// Budget-related configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetConfig {
    /// Symbol printed in front of amounts.
    pub currency_symbol: String,
    /// Ask before deleting every transaction.
    pub confirm_clear: bool,
}

/// Recipe-related configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecipesConfig {
    /// strftime format for the last-made date.
    pub date_format: String,
}

/// Interactive shell configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Prompt printed before each line of input.
    pub prompt: String,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            confirm_clear: true,
        }
    }
}

impl Default for RecipesConfig {
    fn default() -> Self {
        Self {
            date_format: "%b %-d, %Y".to_string(),
        }
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
        }
    }
}

impl Config {
    /// Load configuration, layering defaults, the TOML file at `config_path`
    /// (or the default location) and `CREAMERY_` environment variables.
    /// A missing file is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(DATA_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from(".local/share"))
            .join(DATA_DIR_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.budget.currency_symbol.trim().is_empty() {
            return Err(Error::ConfigValidation {
                message: "budget.currency_symbol must not be empty".to_string(),
            });
        }

        let format = &self.recipes.date_format;
        if format.is_empty() || StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
            return Err(Error::ConfigValidation {
                message: format!("invalid recipes.date_format: {format:?}"),
            });
        }

        if self.shell.prompt.is_empty() {
            return Err(Error::ConfigValidation {
                message: "shell.prompt must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Get the database path, resolving defaults if not set.
    #[must_use]
    pub fn database_path(&self) -> PathBuf {
        self.storage
            .database_path
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join(DATABASE_FILE_NAME))
    }
}
