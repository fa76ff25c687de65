//! Front-end configuration file.
//!
//! ```toml
//! seed = 42
//!
//! [rules]
//! yard_release = "on_six"
//! bonus_on_six = true
//! bonus_on_safe_landing = true
//! capture_enabled = true
//! ```
//!
//! Every key is optional.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_ludo::{ConfigError, RandomDice, RuleSet};
use tracing::{debug, info, instrument};

/// Settings for a terminal game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct PlayConfig {
    /// Dice seed; OS entropy when absent.
    seed: Option<u64>,
    /// House rules.
    rules: RuleSet,
}

impl PlayConfig {
    /// Creates a configuration.
    pub fn new(rules: RuleSet, seed: Option<u64>) -> Self {
        Self { rules, seed }
    }

    /// Loads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed, or if
    /// the rules it names are inconsistent.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.rules.validate()?;

        info!(rules = ?config.rules, seed = ?config.seed, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given and present, otherwise the defaults.
    ///
    /// # Errors
    ///
    /// Same as [`Self::from_file`] for an existing file.
    #[instrument]
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) if path.exists() => Self::from_file(path),
            Some(path) => {
                info!(path = %path.display(), "Config file not found, using defaults");
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Replaces the seed when `seed` is set.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Dice for this configuration.
    pub fn dice(&self) -> RandomDice {
        match self.seed {
            Some(seed) => RandomDice::seeded(seed),
            None => RandomDice::new(),
        }
    }

    /// Serializes back to TOML.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }
}
