//! Keyring data shared by the in-process backends.
//!
//! [`Memory`](super::Memory) holds a [`StoreData`] behind a mutex and
//! [`JsonFile`](super::JsonFile) round-trips one through a file; both get
//! identical semantics from the operations here.

use serde::{Deserialize, Serialize};
use tracing::debug;
use zeroize::Zeroizing;

use super::StoreResult;
use crate::core::domain::{Attributes, CredentialItem, ItemId, ItemType, NewItem};
use crate::error::StoreError;

/// Keyring created in an empty store.
pub const INITIAL_KEYRING: &str = "login";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreData {
    pub default_keyring: String,
    #[serde(default)]
    pub keyrings: Vec<KeyringData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyringData {
    pub name: String,
    #[serde(default)]
    pub locked: bool,
    /// Secret required to unlock; `None` unlocks without one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    #[serde(default = "first_id")]
    pub next_id: ItemId,
    #[serde(default)]
    pub items: Vec<StoredItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredItem {
    pub id: ItemId,
    pub name: String,
    #[serde(rename = "type", default)]
    pub item_type: ItemType,
    #[serde(default)]
    pub attributes: Attributes,
    pub secret: String,
}

fn first_id() -> ItemId {
    1
}

impl Default for StoreData {
    fn default() -> Self {
        Self {
            default_keyring: INITIAL_KEYRING.to_string(),
            keyrings: vec![KeyringData::new(INITIAL_KEYRING, None)],
        }
    }
}

impl KeyringData {
    pub fn new(name: &str, secret: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            locked: false,
            secret: secret.map(str::to_string),
            next_id: first_id(),
            items: Vec::new(),
        }
    }

    fn ensure_unlocked(&self) -> StoreResult<()> {
        if self.locked {
            return Err(StoreError::Locked(self.name.clone()));
        }
        Ok(())
    }

    fn to_item(&self, stored: &StoredItem) -> CredentialItem {
        CredentialItem {
            id: stored.id,
            display_name: stored.name.clone(),
            secret: Zeroizing::new(stored.secret.clone()),
            attributes: stored.attributes.clone(),
            keyring: self.name.clone(),
            item_type: stored.item_type,
        }
    }
}

impl StoreData {
    fn keyring(&self, name: &str) -> StoreResult<&KeyringData> {
        self.keyrings
            .iter()
            .find(|k| k.name == name)
            .ok_or_else(|| StoreError::KeyringNotFound(name.to_string()))
    }

    fn keyring_mut(&mut self, name: &str) -> StoreResult<&mut KeyringData> {
        self.keyrings
            .iter_mut()
            .find(|k| k.name == name)
            .ok_or_else(|| StoreError::KeyringNotFound(name.to_string()))
    }

    pub fn find_by_ids(&self, keyring: &str, ids: &[ItemId]) -> StoreResult<Vec<CredentialItem>> {
        let ring = self.keyring(keyring)?;
        ring.ensure_unlocked()?;

        ids.iter()
            .map(|id| {
                ring.items
                    .iter()
                    .find(|item| item.id == *id)
                    .map(|item| ring.to_item(item))
                    .ok_or_else(|| StoreError::ItemNotFound {
                        keyring: keyring.to_string(),
                        id: *id,
                    })
            })
            .collect()
    }

    pub fn ensure_readable(&self, keyring: &str) -> StoreResult<()> {
        self.keyring(keyring)?.ensure_unlocked()
    }

    pub fn find_by_attributes(
        &self,
        item_type: ItemType,
        attributes: &Attributes,
    ) -> Vec<CredentialItem> {
        let mut found = Vec::new();

        for ring in &self.keyrings {
            let matches = ring
                .items
                .iter()
                .filter(|item| item.item_type == item_type)
                .filter(|item| item.attributes.contains_all(attributes));

            if ring.locked {
                let skipped = matches.count();
                if skipped > 0 {
                    debug!(keyring = %ring.name, skipped, "skipping matches in locked keyring");
                }
                continue;
            }

            found.extend(matches.map(|item| ring.to_item(item)));
        }

        debug!(matches = found.len(), "attribute search finished");
        found
    }

    pub fn create(&mut self, new: &NewItem) -> StoreResult<ItemId> {
        let ring = self.keyring_mut(&new.keyring)?;
        ring.ensure_unlocked()?;

        if new.update_if_exists {
            if let Some(existing) = ring
                .items
                .iter_mut()
                .find(|item| item.item_type == new.item_type && item.attributes == new.attributes)
            {
                existing.name = new.name.clone();
                existing.secret = new.secret.to_string();
                return Ok(existing.id);
            }
        }

        let id = ring.next_id;
        ring.next_id = id.checked_add(1).ok_or_else(|| StoreError::Rejected {
            operation: "create",
            keyring: new.keyring.clone(),
            reason: "item ids exhausted".to_string(),
        })?;
        ring.items.push(StoredItem {
            id,
            name: new.name.clone(),
            item_type: new.item_type,
            attributes: new.attributes.clone(),
            secret: new.secret.to_string(),
        });

        Ok(id)
    }

    pub fn delete(&mut self, keyring: &str, id: ItemId) -> StoreResult<()> {
        let ring = self.keyring_mut(keyring)?;
        ring.ensure_unlocked()?;

        let index = ring
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| StoreError::ItemNotFound {
                keyring: keyring.to_string(),
                id,
            })?;
        ring.items.remove(index);
        Ok(())
    }

    pub fn lock(&mut self, keyring: &str) -> StoreResult<()> {
        self.keyring_mut(keyring)?.locked = true;
        Ok(())
    }

    pub fn unlock(&mut self, keyring: &str, secret: Option<&str>) -> StoreResult<()> {
        let ring = self.keyring_mut(keyring)?;
        if let Some(expected) = ring.secret.as_deref() {
            if secret != Some(expected) {
                return Err(StoreError::WrongSecret(keyring.to_string()));
            }
        }
        ring.locked = false;
        Ok(())
    }
}
