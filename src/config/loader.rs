//! Configuration loading from disk and the environment.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::TrackerConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable naming the patch directory.
pub const PATCH_DIR_ENV: &str = "PATCH_DIR";
/// Environment variable naming the listening port.
pub const API_PORT_ENV: &str = "API_PORT";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid API_PORT value '{0}'")]
    InvalidPort(String),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Values that take precedence over the config file (CLI flags or environment).
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub patch_dir: Option<PathBuf>,
    pub port: Option<u16>,
}

impl Overrides {
    /// Read overrides from `PATCH_DIR` and `API_PORT`.
    ///
    /// Empty variables count as unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let patch_dir = lookup(PATCH_DIR_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let port = match lookup(API_PORT_ENV).filter(|v| !v.is_empty()) {
            Some(raw) => Some(raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?),
            None => None,
        };

        Ok(Self { patch_dir, port })
    }

    /// Apply the overrides on top of a loaded configuration.
    pub fn apply(self, config: &mut TrackerConfig) {
        if let Some(dir) = self.patch_dir {
            config.patches.directory = dir;
        }
        if let Some(port) = self.port {
            config.listener.port = port;
        }
    }
}

/// Build the startup configuration: optional file, then overrides, then validation.
pub fn resolve_config(
    path: Option<&Path>,
    overrides: Overrides,
) -> Result<TrackerConfig, ConfigError> {
    let mut config = match path {
        Some(path) => read_config(path)?,
        None => TrackerConfig::default(),
    };

    overrides.apply(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

fn read_config(path: &Path) -> Result<TrackerConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}
