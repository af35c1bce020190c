//! Item type (Secret Service schema).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UsageError;

/// Kind of keyring item, carried by the store as a schema name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    #[default]
    Generic,
    #[serde(rename = "network")]
    NetworkPassword,
    Note,
}

impl ItemType {
    /// Schema name stored in the `xdg:schema` attribute.
    pub fn schema(self) -> &'static str {
        match self {
            ItemType::Generic => "org.freedesktop.Secret.Generic",
            ItemType::NetworkPassword => "org.gnome.keyring.NetworkPassword",
            ItemType::Note => "org.gnome.keyring.Note",
        }
    }

    /// Map a schema name back to an item type.
    pub fn from_schema(schema: &str) -> Option<Self> {
        [ItemType::Generic, ItemType::NetworkPassword, ItemType::Note]
            .into_iter()
            .find(|t| t.schema() == schema)
    }

    /// Attributes the schema declares as integers.
    pub fn integer_attributes(self) -> &'static [&'static str] {
        match self {
            ItemType::NetworkPassword => &["port"],
            ItemType::Generic | ItemType::Note => &[],
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ItemType::Generic => "generic",
            ItemType::NetworkPassword => "network",
            ItemType::Note => "note",
        };
        f.write_str(s)
    }
}

impl FromStr for ItemType {
    type Err = UsageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "generic" => Ok(ItemType::Generic),
            "network" => Ok(ItemType::NetworkPassword),
            "note" => Ok(ItemType::Note),
            _ => Err(UsageError::InvalidItemType(s.to_string())),
        }
    }
}
