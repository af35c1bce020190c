//! JSON file credential store.
//!
//! Keeps keyrings and items in one plaintext JSON file. Nothing is
//! encrypted; this backend exists for integration tests and scripting
//! against throwaway stores, never for real credentials.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::model::StoreData;
use super::{CredentialStore, StoreResult};
use crate::core::domain::{Attributes, CredentialItem, ItemId, ItemType, NewItem};
use crate::error::StoreError;

/// File-backed store. A missing file reads as a fresh store with an empty
/// `login` keyring.
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> StoreResult<StoreData> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "store file missing, starting empty");
            return Ok(StoreData::default());
        }

        let contents = std::fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|e| StoreError::Corrupt {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }

    fn save(&self, data: &StoreData) -> StoreResult<()> {
        let contents = serde_json::to_string_pretty(data).map_err(|e| StoreError::Corrupt {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;
        std::fs::write(&self.path, contents).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }

    /// Load, apply `op`, and write back only if it succeeded.
    fn update<T>(&self, op: impl FnOnce(&mut StoreData) -> StoreResult<T>) -> StoreResult<T> {
        let mut data = self.load()?;
        let out = op(&mut data)?;
        self.save(&data)?;
        Ok(out)
    }
}

impl CredentialStore for JsonFile {
    fn name(&self) -> &str {
        "file"
    }

    fn find_by_ids(&self, keyring: &str, ids: &[ItemId]) -> StoreResult<Vec<CredentialItem>> {
        debug!(keyring = %keyring, ?ids, "file store: find by ids");
        self.load()?.find_by_ids(keyring, ids)
    }

    fn find_by_attributes(
        &self,
        item_type: ItemType,
        attributes: &Attributes,
    ) -> StoreResult<Vec<CredentialItem>> {
        debug!(%item_type, constraints = attributes.len(), "file store: find by attributes");
        Ok(self.load()?.find_by_attributes(item_type, attributes))
    }

    fn ensure_readable(&self, keyring: &str) -> StoreResult<()> {
        self.load()?.ensure_readable(keyring)
    }

    fn create(&self, item: &NewItem) -> StoreResult<ItemId> {
        let id = self.update(|data| data.create(item))?;
        info!(keyring = %item.keyring, id, "file store: item created");
        Ok(id)
    }

    fn delete(&self, keyring: &str, id: ItemId) -> StoreResult<()> {
        self.update(|data| data.delete(keyring, id))?;
        info!(keyring = %keyring, id, "file store: item deleted");
        Ok(())
    }

    fn lock(&self, keyring: &str) -> StoreResult<()> {
        self.update(|data| data.lock(keyring))
    }

    fn unlock(&self, keyring: &str, secret: Option<&str>) -> StoreResult<()> {
        self.update(|data| data.unlock(keyring, secret))
    }

    fn default_keyring(&self) -> StoreResult<String> {
        Ok(self.load()?.default_keyring)
    }
}
