//! Configuration file and directory management

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

use crate::cost::{DEFAULT_KEYBOARD_THRESHOLD, DEFAULT_NUMERIC_THRESHOLD};
use crate::edit::Penalties;

/// Get the configuration directory for wfst-edit
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine configuration directory")?;
    Ok(base.join("wfst-edit"))
}

/// Get the default config file path
pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// User configuration stored in config file
///
/// Every field is optional; unset fields fall back to the library defaults.
///
/// ```json
/// {
///   "miss_penalty": 1.0,
///   "insertion_penalty": 1.0,
///   "deletion_penalty": 1.0,
///   "keyboard_threshold": 1.9,
///   "numeric_threshold": 1.0
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PersistentConfig {
    /// Penalty of a substitution without a soft weight
    pub miss_penalty: Option<f64>,
    /// Penalty of an insertion
    pub insertion_penalty: Option<f64>,
    /// Penalty of a deletion
    pub deletion_penalty: Option<f64>,
    /// Keyboard distance threshold
    pub keyboard_threshold: Option<f64>,
    /// Numeric distance threshold
    pub numeric_threshold: Option<f64>,
}

impl PersistentConfig {
    /// Load configuration from the default location
    ///
    /// A missing default file is not an error.
    pub fn load() -> Result<Self> {
        let path = default_config_path()?;
        if !path.exists() {
            log::debug!("no config file at {}", path.display());
            return Ok(Self::default());
        }
        Self::read(&path)
    }

    /// Load configuration from a custom path, or the default location
    ///
    /// An explicitly named file must exist.
    pub fn load_from(custom_path: Option<&Path>) -> Result<Self> {
        match custom_path {
            Some(path) if !path.exists() => {
                bail!("Config file not found: {}", path.display())
            }
            Some(path) => Self::read(path),
            None => Self::load(),
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Merge with command-line options (CLI options take precedence)
    pub fn merge_with_cli(
        &self,
        miss_penalty: Option<f64>,
        insertion_penalty: Option<f64>,
        deletion_penalty: Option<f64>,
        keyboard_threshold: Option<f64>,
        numeric_threshold: Option<f64>,
    ) -> Self {
        Self {
            miss_penalty: miss_penalty.or(self.miss_penalty),
            insertion_penalty: insertion_penalty.or(self.insertion_penalty),
            deletion_penalty: deletion_penalty.or(self.deletion_penalty),
            keyboard_threshold: keyboard_threshold.or(self.keyboard_threshold),
            numeric_threshold: numeric_threshold.or(self.numeric_threshold),
        }
    }

    /// Validated penalties, unset ones at their defaults
    pub fn penalties(&self) -> crate::error::Result<Penalties> {
        let defaults = Penalties::default();
        Penalties::new(
            self.miss_penalty.unwrap_or(defaults.miss()),
            self.insertion_penalty.unwrap_or(defaults.insertion()),
            self.deletion_penalty.unwrap_or(defaults.deletion()),
        )
    }

    /// Keyboard threshold, or its default
    pub fn keyboard_threshold(&self) -> f64 {
        self.keyboard_threshold.unwrap_or(DEFAULT_KEYBOARD_THRESHOLD)
    }

    /// Numeric threshold, or its default
    pub fn numeric_threshold(&self) -> f64 {
        self.numeric_threshold.unwrap_or(DEFAULT_NUMERIC_THRESHOLD)
    }
}
