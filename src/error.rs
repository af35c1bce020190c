//! Error types for gkeyring.
//!
//! Errors are split by where they originate: argument validation
//! (`UsageError`), the credential store (`StoreError`) and the optional
//! configuration file (`ConfigError`). The top-level [`Error`] wraps them and
//! knows which process exit code each one maps to.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::constants::exit;
use crate::core::domain::ItemId;

/// Invalid, missing or contradictory arguments.
///
/// Always detected before the credential store is contacted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    #[error("no query criteria: give one or more ids, attributes, a name, or --all")]
    NoCriteria,

    #[error("conflicting query modes: {0}")]
    ConflictingModes(String),

    #[error("invalid attribute '{input}': {reason}")]
    InvalidAttribute { input: String, reason: String },

    #[error("attribute '{0}' given more than once")]
    DuplicateAttribute(String),

    #[error("invalid output column list '{0}'")]
    InvalidColumn(String),

    #[error("unknown item type '{0}' (expected generic, network or note)")]
    InvalidItemType(String),

    #[error("item name cannot be empty")]
    EmptyName,

    #[error("secret cannot be empty")]
    EmptySecret,
}

/// Failures reported by, or while reaching, the credential store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("credential store '{backend}' is unavailable: {reason}")]
    Unavailable { backend: String, reason: String },

    #[error("keyring '{0}' does not exist")]
    KeyringNotFound(String),

    #[error("no item with id {id} in keyring '{keyring}'")]
    ItemNotFound { keyring: String, id: ItemId },

    #[error("keyring '{0}' is locked")]
    Locked(String),

    #[error("wrong secret for keyring '{0}'")]
    WrongSecret(String),

    #[error("{operation} failed on keyring '{keyring}': {reason}")]
    Rejected {
        operation: &'static str,
        keyring: String,
        reason: String,
    },

    #[error("store file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("store file {path} is corrupt: {reason}")]
    Corrupt { path: PathBuf, reason: String },
}

impl StoreError {
    /// Whether the service could not be reached at all, as opposed to
    /// rejecting a specific call.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, StoreError::Unavailable { .. })
    }
}

/// Problems with the optional configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config value for '{key}': {reason}")]
    InvalidValue { key: &'static str, reason: String },
}

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Usage(#[from] UsageError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A query succeeded but found nothing.
    #[error("no matching items found")]
    NoMatch,

    #[error("interrupted")]
    Interrupted,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Usage(_) | Error::Config(_) => exit::USAGE,
            Error::NoMatch => exit::NO_MATCH,
            Error::Interrupted => exit::INTERRUPTED,
            Error::Store(e) if e.is_unavailable() => exit::STORE_UNAVAILABLE,
            Error::Store(_) | Error::Io(_) => exit::STORE_FAILURE,
        }
    }

    /// A short follow-up suggestion to print under the error, if any.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Error::Usage(UsageError::NoCriteria) => Some("see: gkeyring query --help"),
            Error::Store(StoreError::Locked(_)) => Some("run: gkeyring unlock"),
            Error::Store(StoreError::Unavailable { .. }) => {
                Some("is a Secret Service provider (e.g. gnome-keyring-daemon) running?")
            }
            _ => None,
        }
    }
}

impl From<dialoguer::Error> for Error {
    fn from(e: dialoguer::Error) -> Self {
        match e {
            dialoguer::Error::IO(io) if io.kind() == std::io::ErrorKind::Interrupted => {
                Error::Interrupted
            }
            dialoguer::Error::IO(io) => Error::Io(io),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
