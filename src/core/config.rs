//! Configuration.
//!
//! Settings come from three layers, later ones winning:
//!
//! 1. built-in defaults
//! 2. an optional TOML file (`~/.config/gkeyring/config.toml`, or the path
//!    given by `--config` / `GKEYRING_CONFIG`)
//! 3. command-line flags
//!
//! The result is an immutable [`Settings`] value built once per run and
//! passed to the commands explicitly.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::core::constants;
use crate::core::domain::ItemType;
use crate::core::format::{parse_columns, Column};
use crate::core::store::{Backend, CredentialStore, StoreResult};
use crate::error::ConfigError;

/// Contents of the config file. Every key is optional.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Keyring used when `--keyring` is not given.
    pub keyring: Option<String>,
    /// Item type used when `--type` is not given.
    pub item_type: Option<String>,
    /// Default output columns for `query`.
    pub output: Option<String>,
    /// `secret-service` (default) or `file`.
    pub backend: Option<String>,
    /// Store path for the `file` backend.
    pub store_file: Option<PathBuf>,
}

impl FileConfig {
    /// Default config file location.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(constants::CONFIG_DIR).join(constants::CONFIG_FILE))
    }

    /// Load a config file.
    ///
    /// With `explicit = None` the default location is tried and a missing
    /// file yields an empty config. An explicit path must exist.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` or `ConfigError::Parse`.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) if p.exists() => p,
                _ => {
                    debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        debug!(path = %path.display(), "loading config");
        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::ReadFile {
            path: path.clone(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse { path, source })
    }
}

/// Command-line values that override the config file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub keyring: Option<String>,
    pub item_type: Option<ItemType>,
    pub store_file: Option<PathBuf>,
}

/// Effective, validated settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Keyring from the command line or config file, if any.
    pub keyring: Option<String>,
    pub item_type: ItemType,
    pub output: Option<Vec<Column>>,
    pub backend: Backend,
}

impl Settings {
    /// Merge the config file with command-line overrides.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for unknown item types, backends
    /// or malformed column lists in the file.
    pub fn resolve(file: FileConfig, overrides: Overrides) -> Result<Self, ConfigError> {
        let item_type = match (overrides.item_type, file.item_type.as_deref()) {
            (Some(t), _) => t,
            (None, Some(raw)) => raw.parse().map_err(|e: crate::error::UsageError| {
                ConfigError::InvalidValue {
                    key: "item_type",
                    reason: e.to_string(),
                }
            })?,
            (None, None) => ItemType::default(),
        };

        let output = file
            .output
            .as_deref()
            .map(parse_columns)
            .transpose()
            .map_err(|e| ConfigError::InvalidValue {
                key: "output",
                reason: e.to_string(),
            })?;

        let backend = match (overrides.store_file, file.backend.as_deref()) {
            (Some(path), _) => Backend::File(path),
            (None, None) | (None, Some("secret-service")) => Backend::SecretService,
            (None, Some("file")) => Backend::File(file.store_file.ok_or(
                ConfigError::InvalidValue {
                    key: "store_file",
                    reason: "required when backend = \"file\"".to_string(),
                },
            )?),
            (None, Some(other)) => {
                return Err(ConfigError::InvalidValue {
                    key: "backend",
                    reason: format!("unknown backend '{}'", other),
                })
            }
        };

        let keyring = overrides
            .keyring
            .or(file.keyring)
            .filter(|k| !k.is_empty());

        Ok(Self {
            keyring,
            item_type,
            output,
            backend,
        })
    }

    /// Configured keyring, or the store's default.
    pub fn target_keyring<S: CredentialStore + ?Sized>(&self, store: &S) -> StoreResult<String> {
        match &self.keyring {
            Some(k) => Ok(k.clone()),
            None => {
                let k = store.default_keyring()?;
                debug!(keyring = %k, "using store default keyring");
                Ok(k)
            }
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            keyring: None,
            item_type: ItemType::default(),
            output: None,
            backend: Backend::SecretService,
        }
    }
}
