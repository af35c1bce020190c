//! freedesktop Secret Service backend.
//!
//! Talks to GNOME Keyring (or any other Secret Service provider) over
//! D-Bus using the blocking API of the `secret-service` crate.
//!
//! ## Mapping
//!
//! - keyring name: last segment of the collection object path
//!   (`/org/freedesktop/secrets/collection/login` → `login`)
//! - item id: last segment of the item object path, which GNOME Keyring
//!   numbers sequentially per collection. Items whose path does not end in
//!   a number (some other providers use UUIDs) cannot be addressed and are
//!   skipped.
//! - item type: the `xdg:schema` attribute
//! - integer attributes: sent as decimal strings and read back as integers
//!   when the item's schema declares them so (`port` for network passwords).
//!   The service compares strings only, so search results are checked again
//!   against the typed query for those attributes.
//!
//! Unlocking goes through the provider's own prompt. The protocol has no
//! way to pass a password along, so a secret given to [`unlock`] is ignored.
//!
//! [`unlock`]: CredentialStore::unlock

use std::collections::HashMap;

use secret_service::blocking::{Collection, Item, SecretService as Service};
use secret_service::EncryptionType;
use tracing::{debug, info, warn};
use zeroize::Zeroizing;

use super::{CredentialStore, StoreResult};
use crate::core::constants::SCHEMA_ATTRIBUTE;
use crate::core::domain::{
    AttributeValue, Attributes, CredentialItem, ItemId, ItemType, NewItem,
};
use crate::error::StoreError;

const BACKEND: &str = "secret-service";
const CONTENT_TYPE: &str = "text/plain";

/// Secret Service client.
///
/// Each operation opens its own session; the tool performs at most a
/// couple of calls per run.
#[derive(Debug, Default, Clone, Copy)]
pub struct SecretService;

impl SecretService {
    pub fn new() -> Self {
        Self
    }

    fn with_service<T>(&self, f: impl FnOnce(&Service) -> StoreResult<T>) -> StoreResult<T> {
        let service = Service::connect(EncryptionType::Dh).map_err(|e| {
            debug!(error = %e, "secret service connection failed");
            StoreError::Unavailable {
                backend: BACKEND.to_string(),
                reason: e.to_string(),
            }
        })?;
        f(&service)
    }
}

fn rejected(operation: &'static str, keyring: &str, e: impl std::fmt::Display) -> StoreError {
    StoreError::Rejected {
        operation,
        keyring: keyring.to_string(),
        reason: e.to_string(),
    }
}

/// Last path segment of a D-Bus object path.
fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Keyring name and numeric id encoded in an item path.
fn parse_item_path(path: &str) -> Option<(String, ItemId)> {
    let mut segments = path.rsplit('/');
    let id = segments.next()?.parse().ok()?;
    let keyring = segments.next()?.to_string();
    Some((keyring, id))
}

fn find_collection<'a>(service: &'a Service, keyring: &str) -> StoreResult<Collection<'a>> {
    let collections = service
        .get_all_collections()
        .map_err(|e| rejected("list keyrings", keyring, e))?;

    collections
        .into_iter()
        .find(|c| last_segment(c.collection_path.as_str()) == keyring)
        .ok_or_else(|| StoreError::KeyringNotFound(keyring.to_string()))
}

fn ensure_unlocked(collection: &Collection<'_>, keyring: &str) -> StoreResult<()> {
    let locked = collection
        .is_locked()
        .map_err(|e| rejected("lock check", keyring, e))?;
    if locked {
        return Err(StoreError::Locked(keyring.to_string()));
    }
    Ok(())
}

/// Convert the wire attributes, pulling out the schema.
fn read_attributes(mut raw: HashMap<String, String>) -> (ItemType, Attributes) {
    let item_type = raw
        .remove(SCHEMA_ATTRIBUTE)
        .and_then(|schema| ItemType::from_schema(&schema))
        .unwrap_or_default();
    let integers = item_type.integer_attributes();

    let attributes = raw
        .into_iter()
        .map(|(name, value)| {
            let typed = if integers.contains(&name.as_str()) {
                value
                    .parse::<i64>()
                    .map(AttributeValue::Integer)
                    .unwrap_or(AttributeValue::Text(value))
            } else {
                AttributeValue::Text(value)
            };
            (name, typed)
        })
        .collect();

    (item_type, attributes)
}

/// Build the wire attribute map, including the schema.
fn wire_attributes(item_type: ItemType, attributes: &Attributes) -> Vec<(String, String)> {
    let mut wire: Vec<(String, String)> = attributes
        .iter()
        .map(|(name, value)| (name.clone(), value.to_string()))
        .collect();
    wire.push((SCHEMA_ATTRIBUTE.to_string(), item_type.schema().to_string()));
    wire
}

/// Whether `item` agrees with `query` on the attributes its schema types as
/// integers. Other attributes travel as plain strings and were already
/// matched by the service.
fn schema_types_match(query: &Attributes, item: &CredentialItem) -> bool {
    item.item_type
        .integer_attributes()
        .iter()
        .all(|name| match query.get(name) {
            Some(wanted) => item.attributes.get(name) == Some(wanted),
            None => true,
        })
}

fn as_query(wire: &[(String, String)]) -> HashMap<&str, &str> {
    wire.iter()
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect()
}

fn decode_secret(bytes: Vec<u8>) -> Result<Zeroizing<String>, String> {
    String::from_utf8(bytes).map(Zeroizing::new).map_err(|e| {
        drop(Zeroizing::new(e.into_bytes()));
        "secret is not valid UTF-8".to_string()
    })
}

fn read_item(item: &Item<'_>, keyring: &str, id: ItemId) -> StoreResult<CredentialItem> {
    let display_name = item.get_label().map_err(|e| rejected("read", keyring, e))?;
    let raw = item
        .get_attributes()
        .map_err(|e| rejected("read", keyring, e))?;
    let secret = item.get_secret().map_err(|e| rejected("read", keyring, e))?;
    let secret = decode_secret(secret).map_err(|e| rejected("read", keyring, e))?;
    let (item_type, attributes) = read_attributes(raw);

    Ok(CredentialItem {
        id,
        display_name,
        secret,
        attributes,
        keyring: keyring.to_string(),
        item_type,
    })
}

impl CredentialStore for SecretService {
    fn name(&self) -> &str {
        BACKEND
    }

    fn find_by_ids(&self, keyring: &str, ids: &[ItemId]) -> StoreResult<Vec<CredentialItem>> {
        self.with_service(|service| {
            let collection = find_collection(service, keyring)?;
            ensure_unlocked(&collection, keyring)?;

            let items = collection
                .get_all_items()
                .map_err(|e| rejected("list items", keyring, e))?;

            ids.iter()
                .map(|id| {
                    let item = items
                        .iter()
                        .find(|item| {
                            parse_item_path(item.item_path.as_str()).map(|(_, i)| i) == Some(*id)
                        })
                        .ok_or_else(|| StoreError::ItemNotFound {
                            keyring: keyring.to_string(),
                            id: *id,
                        })?;
                    read_item(item, keyring, *id)
                })
                .collect()
        })
    }

    fn find_by_attributes(
        &self,
        item_type: ItemType,
        attributes: &Attributes,
    ) -> StoreResult<Vec<CredentialItem>> {
        let wire = wire_attributes(item_type, attributes);

        self.with_service(|service| {
            let search = service
                .search_items(as_query(&wire))
                .map_err(|e| rejected("search", "*", e))?;
            debug!(
                unlocked = search.unlocked.len(),
                locked = search.locked.len(),
                "secret service search finished"
            );

            for item in &search.locked {
                item.unlock().map_err(|e| rejected("unlock", "*", e))?;
            }

            let mut found = Vec::new();
            for item in search.unlocked.iter().chain(search.locked.iter()) {
                let Some((keyring, id)) = parse_item_path(item.item_path.as_str()) else {
                    debug!(path = %item.item_path.as_str(), "skipping item without numeric id");
                    continue;
                };
                let item = read_item(item, &keyring, id)?;
                if schema_types_match(attributes, &item) {
                    found.push(item);
                } else {
                    debug!(keyring = %keyring, id, "dropping match with mistyped attribute");
                }
            }
            Ok(found)
        })
    }

    fn ensure_readable(&self, keyring: &str) -> StoreResult<()> {
        self.with_service(|service| {
            let collection = find_collection(service, keyring)?;
            let locked = collection
                .is_locked()
                .map_err(|e| rejected("lock check", keyring, e))?;
            if locked {
                debug!(keyring = %keyring, "keyring locked, asking the service to unlock it");
                collection
                    .unlock()
                    .map_err(|e| rejected("unlock", keyring, e))?;
            }
            Ok(())
        })
    }

    fn create(&self, new: &NewItem) -> StoreResult<ItemId> {
        let wire = wire_attributes(new.item_type, &new.attributes);

        self.with_service(|service| {
            let collection = find_collection(service, &new.keyring)?;
            ensure_unlocked(&collection, &new.keyring)?;

            let item = collection
                .create_item(
                    &new.name,
                    as_query(&wire),
                    new.secret.as_bytes(),
                    new.update_if_exists,
                    CONTENT_TYPE,
                )
                .map_err(|e| rejected("create", &new.keyring, e))?;

            let (_, id) = parse_item_path(item.item_path.as_str()).ok_or_else(|| {
                rejected(
                    "create",
                    &new.keyring,
                    format!("item path {} has no numeric id", item.item_path.as_str()),
                )
            })?;
            info!(keyring = %new.keyring, id, "item created");
            Ok(id)
        })
    }

    fn delete(&self, keyring: &str, id: ItemId) -> StoreResult<()> {
        self.with_service(|service| {
            let collection = find_collection(service, keyring)?;
            ensure_unlocked(&collection, keyring)?;

            let items = collection
                .get_all_items()
                .map_err(|e| rejected("list items", keyring, e))?;
            let item = items
                .iter()
                .find(|item| parse_item_path(item.item_path.as_str()).map(|(_, i)| i) == Some(id))
                .ok_or_else(|| StoreError::ItemNotFound {
                    keyring: keyring.to_string(),
                    id,
                })?;

            item.delete().map_err(|e| rejected("delete", keyring, e))?;
            info!(keyring = %keyring, id, "item deleted");
            Ok(())
        })
    }

    fn lock(&self, keyring: &str) -> StoreResult<()> {
        self.with_service(|service| {
            find_collection(service, keyring)?
                .lock()
                .map_err(|e| rejected("lock", keyring, e))
        })
    }

    fn unlock(&self, keyring: &str, secret: Option<&str>) -> StoreResult<()> {
        if secret.is_some() {
            warn!(keyring = %keyring, "secret service prompts for the keyring password itself; ignoring the supplied secret");
        }
        self.with_service(|service| {
            find_collection(service, keyring)?
                .unlock()
                .map_err(|e| rejected("unlock", keyring, e))
        })
    }

    fn prompts_for_unlock(&self) -> bool {
        true
    }

    fn default_keyring(&self) -> StoreResult<String> {
        self.with_service(|service| {
            let collection = service
                .get_default_collection()
                .map_err(|e| rejected("default keyring", "default", e))?;
            Ok(last_segment(collection.collection_path.as_str()).to_string())
        })
    }
}
