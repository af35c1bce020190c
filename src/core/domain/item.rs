//! Keyring items.

use std::fmt;

use zeroize::Zeroizing;

use super::{Attributes, ItemType};

/// Store-assigned item identifier, unique within a keyring.
pub type ItemId = u32;

/// One secret record fetched from the store.
///
/// Items are fetched fresh for every invocation and never cached.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialItem {
    pub id: ItemId,
    pub display_name: String,
    pub secret: Zeroizing<String>,
    pub attributes: Attributes,
    pub keyring: String,
    pub item_type: ItemType,
}

impl fmt::Debug for CredentialItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialItem")
            .field("id", &self.id)
            .field("display_name", &self.display_name)
            .field("secret", &"<redacted>")
            .field("attributes", &self.attributes)
            .field("keyring", &self.keyring)
            .field("item_type", &self.item_type)
            .finish()
    }
}

/// A request to create an item.
#[derive(Clone)]
pub struct NewItem {
    pub keyring: String,
    pub item_type: ItemType,
    pub name: String,
    pub attributes: Attributes,
    pub secret: Zeroizing<String>,
    /// Replace an existing item with the same type and attributes instead
    /// of adding a second one.
    pub update_if_exists: bool,
}

impl fmt::Debug for NewItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewItem")
            .field("keyring", &self.keyring)
            .field("item_type", &self.item_type)
            .field("name", &self.name)
            .field("attributes", &self.attributes)
            .field("update_if_exists", &self.update_if_exists)
            .finish_non_exhaustive()
    }
}
