//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/splitjoin/splitjoin.toml`
//! 3. Environment variables: `SPLITJOIN_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// Copy buffer size used when nothing overrides it.
pub const DEFAULT_BUFFER_SIZE: usize = 4096;

/// Largest accepted copy buffer (64 MiB).
pub const MAX_BUFFER_SIZE: usize = 64 * 1024 * 1024;

/// Unified configuration for splitjoin.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Size in bytes of the buffer each copy loop reads through
    pub buffer_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

/// Get the XDG config directory for splitjoin.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "splitjoin").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("splitjoin.toml"))
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Load settings from defaults, the global config file and `SPLITJOIN_*`
    /// environment variables.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load settings with an explicit config file instead of the global one.
    ///
    /// A missing file is not an error; a malformed one is.
    pub fn load_from(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("buffer_size", defaults.buffer_size as i64)
            .map_err(config_err)?;

        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path).required(false));
        }

        builder = builder.add_source(Environment::with_prefix("SPLITJOIN").try_parsing(true));

        let config = builder.build().map_err(config_err)?;
        let settings: Self = config.try_deserialize().map_err(config_err)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject settings no copy loop can run with.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        if self.buffer_size == 0 {
            return Err(ApplicationError::Config {
                message: "buffer_size must be at least 1".to_string(),
            });
        }
        if self.buffer_size > MAX_BUFFER_SIZE {
            return Err(ApplicationError::Config {
                message: format!(
                    "buffer_size {} exceeds maximum of {} bytes",
                    self.buffer_size, MAX_BUFFER_SIZE
                ),
            });
        }
        Ok(())
    }

    /// Render the effective settings as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}
