//! Lock and unlock commands.

use clap::Args;
use tracing::info;

use crate::cli::secret;
use crate::core::config::Settings;
use crate::core::store::{self, CredentialStore};
use crate::error::Result;

#[derive(Args, Debug, Default, Clone)]
pub struct UnlockArgs {
    /// Keyring password (prompted for when the store needs one)
    #[arg(short = 'w', long = "password")]
    pub password: Option<String>,
}

/// Lock the target keyring, returning its name.
pub fn run_lock<S: CredentialStore + ?Sized>(store: &S, settings: &Settings) -> Result<String> {
    let keyring = settings.target_keyring(store)?;
    store.lock(&keyring)?;
    info!(keyring = %keyring, "keyring locked");
    Ok(keyring)
}

/// Unlock the target keyring, returning its name.
pub fn run_unlock<S: CredentialStore + ?Sized>(
    store: &S,
    settings: &Settings,
    secret: Option<&str>,
) -> Result<String> {
    let keyring = settings.target_keyring(store)?;
    store.unlock(&keyring, secret)?;
    info!(keyring = %keyring, "keyring unlocked");
    Ok(keyring)
}

pub fn lock(settings: &Settings) -> Result<()> {
    let store = store::open(&settings.backend)?;
    run_lock(&*store, settings)?;
    Ok(())
}

pub fn unlock(mut args: UnlockArgs, settings: &Settings) -> Result<()> {
    let store = store::open(&settings.backend)?;

    let secret = if store.prompts_for_unlock() {
        args.password.take().map(zeroize::Zeroizing::new)
    } else {
        Some(secret::read(args.password.take(), "Keyring password")?)
    };

    run_unlock(&*store, settings, secret.as_deref().map(String::as_str))?;
    Ok(())
}
