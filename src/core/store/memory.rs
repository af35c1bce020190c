//! In-memory credential store.

use std::sync::{Mutex, MutexGuard};

use tracing::debug;

use super::model::{KeyringData, StoreData};
use super::{CredentialStore, StoreResult};
use crate::core::domain::{Attributes, CredentialItem, ItemId, ItemType, NewItem};

/// A store call, as recorded by [`Memory`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    FindByIds(String, Vec<ItemId>),
    FindByAttributes(ItemType, Attributes),
    EnsureReadable(String),
    Create(String),
    Delete(String, ItemId),
    Lock(String),
    Unlock(String),
    DefaultKeyring,
}

/// In-process store with the same semantics as the file store.
///
/// Starts with one unlocked `login` keyring. Every trait call is recorded,
/// so tests can check what reached the store.
///
/// # Example
///
/// ```
/// use gkeyring::core::store::{CredentialStore, Memory};
///
/// let store = Memory::new();
/// assert_eq!(store.default_keyring().unwrap(), "login");
/// assert_eq!(store.calls().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Memory {
    data: Mutex<StoreData>,
    calls: Mutex<Vec<Call>>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a keyring, optionally protected by a secret.
    pub fn with_keyring(self, name: &str, secret: Option<&str>) -> Self {
        self.data().keyrings.push(KeyringData::new(name, secret));
        self
    }

    /// Calls made so far, oldest first.
    pub fn calls(&self) -> Vec<Call> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn data(&self) -> MutexGuard<'_, StoreData> {
        self.data
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn record(&self, call: Call) {
        debug!(?call, "memory store call");
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(call);
    }
}

impl CredentialStore for Memory {
    fn name(&self) -> &str {
        "memory"
    }

    fn find_by_ids(&self, keyring: &str, ids: &[ItemId]) -> StoreResult<Vec<CredentialItem>> {
        self.record(Call::FindByIds(keyring.to_string(), ids.to_vec()));
        self.data().find_by_ids(keyring, ids)
    }

    fn find_by_attributes(
        &self,
        item_type: ItemType,
        attributes: &Attributes,
    ) -> StoreResult<Vec<CredentialItem>> {
        self.record(Call::FindByAttributes(item_type, attributes.clone()));
        Ok(self.data().find_by_attributes(item_type, attributes))
    }

    fn ensure_readable(&self, keyring: &str) -> StoreResult<()> {
        self.record(Call::EnsureReadable(keyring.to_string()));
        self.data().ensure_readable(keyring)
    }

    fn create(&self, item: &NewItem) -> StoreResult<ItemId> {
        self.record(Call::Create(item.keyring.clone()));
        self.data().create(item)
    }

    fn delete(&self, keyring: &str, id: ItemId) -> StoreResult<()> {
        self.record(Call::Delete(keyring.to_string(), id));
        self.data().delete(keyring, id)
    }

    fn lock(&self, keyring: &str) -> StoreResult<()> {
        self.record(Call::Lock(keyring.to_string()));
        self.data().lock(keyring)
    }

    fn unlock(&self, keyring: &str, secret: Option<&str>) -> StoreResult<()> {
        self.record(Call::Unlock(keyring.to_string()));
        self.data().unlock(keyring, secret)
    }

    fn default_keyring(&self) -> StoreResult<String> {
        self.record(Call::DefaultKeyring);
        Ok(self.data().default_keyring.clone())
    }
}
