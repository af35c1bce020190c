//! Set command.

use clap::Args;
use tracing::info;
use zeroize::Zeroizing;

use crate::cli::criteria::AttributeArgs;
use crate::cli::secret;
use crate::core::config::Settings;
use crate::core::domain::{Attributes, ItemId, NewItem};
use crate::core::store::{self, CredentialStore};
use crate::error::{Result, UsageError};

#[derive(Args, Debug, Default, Clone)]
pub struct SetArgs {
    /// Display name of the new item
    #[arg(short, long)]
    pub name: String,

    #[command(flatten)]
    pub attributes: AttributeArgs,

    /// Secret to store (prompted for when omitted)
    #[arg(short = 'w', long = "password")]
    pub password: Option<String>,

    /// Replace an item with the same type and attributes instead of adding one
    #[arg(short, long)]
    pub update: bool,
}

/// Validated `set` arguments, minus the secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetRequest {
    pub name: String,
    pub attributes: Attributes,
    pub update_if_exists: bool,
}

impl SetRequest {
    /// Validate arguments without touching the store.
    pub fn from_args(args: &SetArgs) -> Result<Self> {
        if args.name.trim().is_empty() {
            return Err(UsageError::EmptyName.into());
        }
        Ok(Self {
            name: args.name.clone(),
            attributes: args.attributes.attributes()?,
            update_if_exists: args.update,
        })
    }
}

/// Create the item and return its id.
///
/// # Errors
///
/// Returns `UsageError::EmptySecret` for an empty secret, or the store's
/// error.
pub fn run<S: CredentialStore + ?Sized>(
    store: &S,
    settings: &Settings,
    request: SetRequest,
    secret: Zeroizing<String>,
) -> Result<ItemId> {
    if secret.is_empty() {
        return Err(UsageError::EmptySecret.into());
    }

    let keyring = settings.target_keyring(store)?;
    let item = NewItem {
        keyring,
        item_type: settings.item_type,
        name: request.name,
        attributes: request.attributes,
        secret,
        update_if_exists: request.update_if_exists,
    };

    let id = store.create(&item)?;
    info!(keyring = %item.keyring, id, item_type = %item.item_type, "created item");
    Ok(id)
}

/// Create an item and print its id.
pub fn execute(mut args: SetArgs, settings: &Settings) -> Result<()> {
    let request = SetRequest::from_args(&args)?;
    let secret = secret::read(args.password.take(), "Secret")?;
    let store = store::open(&settings.backend)?;

    let id = run(&*store, settings, request, secret)?;
    println!("{}", id);
    Ok(())
}
