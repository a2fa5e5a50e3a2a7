use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors raised while loading the host inventory.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read host inventory '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse host inventory '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("group name required")]
    EmptyGroupName,

    #[error("group name '{name}' is invalid: only letters, digits, - and _ are allowed")]
    InvalidGroupName { name: String },

    #[error("group '{name}' is defined more than once")]
    DuplicateGroup { name: String },

    /// `index` is the position of the entry in `[[hosts]]`.
    #[error("host override #{index} has an empty address")]
    EmptyHostAddress { index: usize },

    #[error("host '{host}' has more than one override")]
    DuplicateHost { host: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/hostmux/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("hostmux").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        tracing::debug!(
            hosts = config.hosts.len(),
            groups = config.groups.len(),
            "Loaded config from {}",
            path.display()
        );
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Group names are non-empty and use only letters, digits, `-` and `_`
    /// - Group names are unique (case-insensitive)
    /// - Each host address has at most one override
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut group_names = HashSet::new();
        for group in &self.groups {
            validate_group_name(&group.name)?;
            if !group_names.insert(group.name.to_lowercase()) {
                return Err(ConfigError::DuplicateGroup {
                    name: group.name.clone(),
                });
            }
        }

        let mut addresses = HashSet::new();
        for (index, host) in self.hosts.iter().enumerate() {
            let addr = host.host.trim();
            if addr.is_empty() {
                return Err(ConfigError::EmptyHostAddress { index });
            }
            if !addresses.insert(addr) {
                return Err(ConfigError::DuplicateHost {
                    host: addr.to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Returns an error if `name` is empty or contains characters other than
/// ASCII letters, digits, `-` and `_`.
pub fn validate_group_name(name: &str) -> Result<(), ConfigError> {
    if name.is_empty() {
        return Err(ConfigError::EmptyGroupName);
    }
    let valid = name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid {
        return Err(ConfigError::InvalidGroupName {
            name: name.to_string(),
        });
    }
    Ok(())
}
