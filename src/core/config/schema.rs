//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Global Config
//!
//! Located at (in order of precedence):
//! 1. `$SDT_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/sdt/config.toml`
//! 3. `~/.sdt/config.toml`
//!
//! # Repo Config
//!
//! Located at `.git/sdt/config.toml`.
//!
//! # Validation
//!
//! Repo config values are validated after parsing: the state file must be
//! a plain file name inside the root.

use std::path::{Component, Path};

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Global configuration (user scope).
///
/// # Example
///
/// ```toml
/// color = false
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Colorize tables when writing to a terminal
    pub color: Option<bool>,
}

/// Repository configuration.
///
/// # Example
///
/// ```toml
/// state_file = "docs.json"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RepoConfig {
    /// File name of the entry store, relative to the root
    pub state_file: Option<String>,
}

impl RepoConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `state_file` is not a single
    /// normal path component.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(name) = &self.state_file {
            let mut components = Path::new(name).components();
            let valid = matches!(
                (components.next(), components.next()),
                (Some(Component::Normal(_)), None)
            );
            if !valid {
                return Err(ConfigError::InvalidValue(format!(
                    "state_file must be a plain file name, got '{}'",
                    name
                )));
            }
        }

        Ok(())
    }
}
