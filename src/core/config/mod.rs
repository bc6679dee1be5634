//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! sdt has two configuration scopes:
//! - **Global**: User-level settings
//! - **Repo**: Repository-level overrides
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. Repo config file
//! 4. CLI flags (not handled here)
//!
//! # Global Config Locations
//!
//! Searched in order:
//! 1. `$SDT_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/sdt/config.toml`
//! 3. `~/.sdt/config.toml`
//!
//! # Repo Config Location
//!
//! `<root>/.git/sdt/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use sdt::core::config::Config;
//! use sdt::core::paths::SdtPaths;
//! use std::path::PathBuf;
//!
//! let paths = SdtPaths::new(PathBuf::from("/path/to/repo"));
//! let config = Config::load(&paths).unwrap();
//! println!("State file: {}", config.state_file());
//! ```

pub mod schema;

pub use schema::{GlobalConfig, RepoConfig};

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use super::paths::{SdtPaths, DEFAULT_STATE_FILE};

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {source}", path.display())]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{}': {message}", path.display())]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Merged configuration from all sources.
///
/// Accessor methods apply defaults, so callers never see an unset value.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,
    /// Repository configuration (if present)
    pub repo: Option<RepoConfig>,
    /// Path to the global config file (if loaded)
    global_path: Option<PathBuf>,
    /// Path to the repo config file (if loaded)
    repo_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration for the root described by `paths`.
    ///
    /// # Errors
    ///
    /// Returns an error if config files exist but cannot be parsed or hold
    /// invalid values. Missing config files are not an error.
    pub fn load(paths: &SdtPaths) -> Result<Self, ConfigError> {
        let (global, global_path) = Self::load_global()?;

        let repo_file = paths.repo_config_path();
        let (repo, repo_path) = if repo_file.exists() {
            let repo: RepoConfig = read_toml(&repo_file)?;
            (Some(repo), Some(repo_file))
        } else {
            (None, None)
        };

        if let Some(ref r) = repo {
            r.validate()?;
        }

        debug!(
            global = ?global_path,
            repo = ?repo_path,
            "loaded configuration"
        );

        Ok(Config {
            global,
            repo,
            global_path,
            repo_path,
        })
    }

    /// Load global configuration from standard locations.
    fn load_global() -> Result<(GlobalConfig, Option<PathBuf>), ConfigError> {
        // 1. Check $SDT_CONFIG
        if let Ok(path) = std::env::var("SDT_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Ok((read_toml(&path)?, Some(path)));
            }
        }

        // 2. Check $XDG_CONFIG_HOME/sdt/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("sdt/config.toml");
            if path.exists() {
                return Ok((read_toml(&path)?, Some(path)));
            }
        }

        // 3. Check ~/.sdt/config.toml
        if let Some(home) = dirs::home_dir() {
            let path = home.join(".sdt/config.toml");
            if path.exists() {
                return Ok((read_toml(&path)?, Some(path)));
            }
        }

        Ok((GlobalConfig::default(), None))
    }

    // =========================================================================
    // Accessor methods with precedence
    // =========================================================================

    /// Get the state file name.
    ///
    /// Defaults to `sdt.json` if not configured.
    pub fn state_file(&self) -> &str {
        self.repo
            .as_ref()
            .and_then(|r| r.state_file.as_deref())
            .unwrap_or(DEFAULT_STATE_FILE)
    }

    /// Check if colored output is enabled.
    ///
    /// Defaults to `true` if not configured.
    pub fn color(&self) -> bool {
        self.global.color.unwrap_or(true)
    }

    /// Get the path to the loaded global config file.
    pub fn global_config_loaded_from(&self) -> Option<&Path> {
        self.global_path.as_deref()
    }

    /// Get the path to the loaded repo config file.
    pub fn repo_config_loaded_from(&self) -> Option<&Path> {
        self.repo_path.as_deref()
    }
}

/// Read and parse a TOML config file.
fn read_toml<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_repo_config(root: &Path, contents: &str) {
        let dir = root.join(".git/sdt");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.toml"), contents).unwrap();
    }

    #[test]
    fn defaults_without_repo_config() {
        let temp = TempDir::new().unwrap();
        let paths = SdtPaths::new(temp.path().to_path_buf());

        let config = Config::load(&paths).unwrap();

        assert_eq!(config.state_file(), "sdt.json");
        assert!(config.repo_config_loaded_from().is_none());
    }

    #[test]
    fn load_repo_config() {
        let temp = TempDir::new().unwrap();
        write_repo_config(temp.path(), "state_file = \"docs.json\"\n");
        let paths = SdtPaths::new(temp.path().to_path_buf());

        let config = Config::load(&paths).unwrap();

        assert_eq!(config.state_file(), "docs.json");
        assert_eq!(
            config.repo_config_loaded_from(),
            Some(paths.repo_config_path().as_path())
        );
    }

    #[test]
    fn invalid_state_file_rejected() {
        let temp = TempDir::new().unwrap();
        write_repo_config(temp.path(), "state_file = \"../elsewhere.json\"\n");
        let paths = SdtPaths::new(temp.path().to_path_buf());

        assert!(matches!(
            Config::load(&paths),
            Err(ConfigError::InvalidValue(_))
        ));
    }

    #[test]
    fn unknown_fields_rejected() {
        let temp = TempDir::new().unwrap();
        write_repo_config(temp.path(), "state_file = \"a.json\"\nunknown_field = true\n");
        let paths = SdtPaths::new(temp.path().to_path_buf());

        assert!(matches!(
            Config::load(&paths),
            Err(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn color_defaults_on() {
        let config = Config::default();
        assert!(config.color());

        let config = Config {
            global: GlobalConfig { color: Some(false) },
            ..Default::default()
        };
        assert!(!config.color());
    }
}
