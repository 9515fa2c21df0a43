//! Layered configuration for the `task-cli` binary.
//!
//! Priority, highest first:
//! 1. CLI flags
//! 2. Environment variables (via clap `env` attributes)
//! 3. TOML config file (`--config`, else `<config dir>/task-cli/config.toml`)
//! 4. Compiled defaults

use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;
use thiserror::Error;

use super::args::GlobalArgs;
use crate::fs::read_optional;

/// Task file used when nothing else is configured.
pub const DEFAULT_TASKS_FILE: &str = "tasks.json";

/// Log filter used when nothing else is configured.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path that was attempted.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for this schema.
    #[error("failed to parse config file {path}: {source}")]
    ParseToml {
        /// Path that was parsed.
        path: Utf8PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    storage: StorageSection,
    logging: LoggingSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct StorageSection {
    file: Option<Utf8PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct LoggingSection {
    level: Option<String>,
}

/// Fully resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Path of the JSON task file.
    pub tasks_file: Utf8PathBuf,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tasks_file: Utf8PathBuf::from(DEFAULT_TASKS_FILE),
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl Settings {
    /// Resolves settings from command-line arguments, the environment and the
    /// config file.
    ///
    /// A missing file at the default location counts as empty configuration;
    /// a missing file named with `--config` is an error.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a config file cannot be read or parsed.
    pub fn load(args: &GlobalArgs) -> Result<Self, ConfigError> {
        let file = match args.config.as_deref() {
            Some(path) => read_config_file(path)?,
            None => match default_config_path() {
                Some(path) => read_optional_config_file(&path)?,
                None => ConfigFile::default(),
            },
        };
        Ok(Self::resolve(args, file))
    }

    fn resolve(args: &GlobalArgs, file: ConfigFile) -> Self {
        let defaults = Self::default();
        Self {
            tasks_file: args
                .file
                .clone()
                .or(file.storage.file)
                .unwrap_or(defaults.tasks_file),
            log_level: args
                .log_level
                .clone()
                .or(file.logging.level)
                .unwrap_or(defaults.log_level),
        }
    }
}

/// Returns `<config dir>/task-cli/config.toml` when the platform has a
/// UTF-8 config directory.
#[must_use]
pub fn default_config_path() -> Option<Utf8PathBuf> {
    let config_dir = dirs::config_dir()?;
    let config_dir = Utf8PathBuf::from_path_buf(config_dir).ok()?;
    Some(config_dir.join("task-cli").join("config.toml"))
}

fn read_config_file(path: &Utf8Path) -> Result<ConfigFile, ConfigError> {
    let contents = read_optional(path)
        .and_then(|contents| {
            contents.ok_or_else(|| {
                std::io::Error::new(std::io::ErrorKind::NotFound, "config file does not exist")
            })
        })
        .map_err(|source| ConfigError::ReadFile {
            path: path.to_owned(),
            source,
        })?;
    parse_config(path, &contents)
}

fn read_optional_config_file(path: &Utf8Path) -> Result<ConfigFile, ConfigError> {
    match read_optional(path) {
        Ok(Some(contents)) => parse_config(path, &contents),
        Ok(None) => Ok(ConfigFile::default()),
        Err(source) => Err(ConfigError::ReadFile {
            path: path.to_owned(),
            source,
        }),
    }
}

fn parse_config(path: &Utf8Path, contents: &str) -> Result<ConfigFile, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_owned(),
        source,
    })
}
