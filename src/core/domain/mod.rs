//! Domain types.
//!
//! Items, typed attributes, item types and query criteria. These carry no
//! store or CLI knowledge.

pub mod attribute;
pub mod item;
pub mod item_type;
pub mod query;

pub use attribute::{parse_list, AttributeKind, AttributeValue, Attributes};
pub use item::{CredentialItem, ItemId, NewItem};
pub use item_type::ItemType;
pub use query::Query;
