//! Delete command.
//!
//! Ids are deleted one at a time in the order given. The first failure
//! stops the run; ids deleted before it stay deleted.

use clap::Args;
use tracing::{error, info};

use crate::core::config::Settings;
use crate::core::domain::ItemId;
use crate::core::store::{self, CredentialStore};
use crate::error::Result;

#[derive(Args, Debug, Default, Clone)]
pub struct DeleteArgs {
    /// Ids of the items to delete
    #[arg(value_name = "ID", required = true)]
    pub ids: Vec<ItemId>,
}

/// Delete `ids` from the target keyring, returning the ids deleted.
///
/// # Errors
///
/// Returns the first store error; later ids are not attempted.
pub fn run<S: CredentialStore + ?Sized>(
    store: &S,
    settings: &Settings,
    ids: &[ItemId],
) -> Result<Vec<ItemId>> {
    let keyring = settings.target_keyring(store)?;
    let mut deleted = Vec::with_capacity(ids.len());

    for &id in ids {
        if let Err(e) = store.delete(&keyring, id) {
            error!(keyring = %keyring, id, deleted = deleted.len(), "delete failed, stopping");
            return Err(e.into());
        }
        info!(keyring = %keyring, id, "deleted item");
        deleted.push(id);
    }

    Ok(deleted)
}

pub fn execute(args: &DeleteArgs, settings: &Settings) -> Result<()> {
    let store = store::open(&settings.backend)?;
    run(&*store, settings, &args.ids)?;
    Ok(())
}
