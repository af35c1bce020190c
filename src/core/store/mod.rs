//! Credential store backends.
//!
//! The [`CredentialStore`] trait is the only way the rest of the crate talks
//! to a keyring service. Every call is synchronous and may fail with a
//! [`StoreError`]; nothing is retried.
//!
//! ## Backends
//!
//! - [`SecretService`] - the freedesktop Secret Service over D-Bus (Linux)
//! - [`JsonFile`] - a plaintext JSON file, for tests and throwaway stores
//! - [`Memory`] - in-process, records every call
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `CredentialStore` trait in a new file
//! 2. Add a `Backend` variant and wire it in `backend::open`

use crate::core::domain::{Attributes, CredentialItem, ItemId, ItemType, NewItem};
use crate::error::StoreError;

mod backend;
mod file;
mod memory;
mod model;

#[cfg(target_os = "linux")]
mod secret_service;

pub use backend::{open, Backend};
pub use file::JsonFile;
pub use memory::{Call, Memory};

#[cfg(target_os = "linux")]
pub use self::secret_service::SecretService;

/// Result alias for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Typed client over an external keyring service.
pub trait CredentialStore {
    /// Backend name, used in logs and errors.
    fn name(&self) -> &str;

    /// Fetch items by id from one keyring, in the order given.
    ///
    /// # Errors
    ///
    /// Fails the whole lookup with `StoreError::ItemNotFound` if any id is
    /// missing, or `StoreError::Locked` if the keyring is locked.
    fn find_by_ids(&self, keyring: &str, ids: &[ItemId]) -> StoreResult<Vec<CredentialItem>>;

    /// Search every keyring for items of `item_type` carrying all of
    /// `attributes`.
    ///
    /// Results may come from any keyring and are in the store's own order.
    fn find_by_attributes(
        &self,
        item_type: ItemType,
        attributes: &Attributes,
    ) -> StoreResult<Vec<CredentialItem>>;

    /// Make sure `keyring` can be searched.
    ///
    /// # Errors
    ///
    /// `StoreError::KeyringNotFound` for an unknown keyring, or
    /// `StoreError::Locked` if it is locked and the store cannot unlock it
    /// on its own.
    fn ensure_readable(&self, keyring: &str) -> StoreResult<()>;

    /// Create an item and return its store-assigned id.
    fn create(&self, item: &NewItem) -> StoreResult<ItemId>;

    /// Delete one item.
    fn delete(&self, keyring: &str, id: ItemId) -> StoreResult<()>;

    /// Lock a keyring.
    fn lock(&self, keyring: &str) -> StoreResult<()>;

    /// Unlock a keyring, optionally with its secret.
    fn unlock(&self, keyring: &str, secret: Option<&str>) -> StoreResult<()>;

    /// Whether the service asks for the keyring password itself, so the
    /// caller should not.
    fn prompts_for_unlock(&self) -> bool {
        false
    }

    /// Name of the keyring the store treats as default.
    fn default_keyring(&self) -> StoreResult<String>;
}

impl<S: CredentialStore + ?Sized> CredentialStore for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn find_by_ids(&self, keyring: &str, ids: &[ItemId]) -> StoreResult<Vec<CredentialItem>> {
        (**self).find_by_ids(keyring, ids)
    }

    fn find_by_attributes(
        &self,
        item_type: ItemType,
        attributes: &Attributes,
    ) -> StoreResult<Vec<CredentialItem>> {
        (**self).find_by_attributes(item_type, attributes)
    }

    fn ensure_readable(&self, keyring: &str) -> StoreResult<()> {
        (**self).ensure_readable(keyring)
    }

    fn create(&self, item: &NewItem) -> StoreResult<ItemId> {
        (**self).create(item)
    }

    fn delete(&self, keyring: &str, id: ItemId) -> StoreResult<()> {
        (**self).delete(keyring, id)
    }

    fn lock(&self, keyring: &str) -> StoreResult<()> {
        (**self).lock(keyring)
    }

    fn unlock(&self, keyring: &str, secret: Option<&str>) -> StoreResult<()> {
        (**self).unlock(keyring, secret)
    }

    fn prompts_for_unlock(&self) -> bool {
        (**self).prompts_for_unlock()
    }

    fn default_keyring(&self) -> StoreResult<String> {
        (**self).default_keyring()
    }
}
