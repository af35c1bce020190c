//! Backend selection.

use std::path::PathBuf;

use tracing::{debug, info};

use super::{CredentialStore, JsonFile, StoreResult};

/// Which store a run talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    /// The desktop Secret Service over D-Bus.
    SecretService,
    /// A plaintext JSON store at the given path.
    File(PathBuf),
}

/// Open the configured backend.
///
/// # Errors
///
/// Returns `StoreError::Unavailable` when the Secret Service is requested on
/// a platform without one.
pub fn open(backend: &Backend) -> StoreResult<Box<dyn CredentialStore>> {
    match backend {
        Backend::File(path) => {
            info!(path = %path.display(), "using plaintext file store");
            Ok(Box::new(JsonFile::new(path.clone())))
        }
        Backend::SecretService => open_secret_service(),
    }
}

#[cfg(target_os = "linux")]
fn open_secret_service() -> StoreResult<Box<dyn CredentialStore>> {
    debug!("using secret service backend");
    Ok(Box::new(super::SecretService::new()))
}

#[cfg(not(target_os = "linux"))]
fn open_secret_service() -> StoreResult<Box<dyn CredentialStore>> {
    debug!("secret service requested on unsupported platform");
    Err(crate::error::StoreError::Unavailable {
        backend: "secret-service".to_string(),
        reason: "the Secret Service is only supported on Linux".to_string(),
    })
}
