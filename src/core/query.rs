//! Query resolution.
//!
//! Turns a validated [`Query`] into the ordered list of matching items:
//!
//! - id queries go straight to the target keyring, keep the caller's order
//!   and skip the name filter
//! - attribute and `--all` queries fail if the target keyring is missing or
//!   locked, then search the whole store, drop items from other keyrings and
//!   apply the exact display-name filter
//!
//! An empty result is a normal outcome, not an error.

use tracing::debug;

use crate::core::domain::{Attributes, CredentialItem, ItemType, Query};
use crate::core::store::{CredentialStore, StoreResult};

/// Resolve `query` against `store`.
///
/// # Arguments
///
/// * `store` - Backend to search
/// * `query` - Validated query
/// * `item_type` - Item type searched in attribute and `--all` mode
/// * `keyring` - Target keyring
///
/// # Errors
///
/// Propagates the store's `StoreError`. In id mode a missing id fails the
/// whole lookup.
pub fn resolve<S: CredentialStore + ?Sized>(
    store: &S,
    query: &Query,
    item_type: ItemType,
    keyring: &str,
) -> StoreResult<Vec<CredentialItem>> {
    match query {
        Query::Ids(ids) => {
            debug!(keyring = %keyring, ?ids, "resolving by id");
            store.find_by_ids(keyring, ids)
        }
        Query::Attributes { attributes, .. } => {
            search(store, item_type, attributes, keyring, query.name_filter())
        }
        Query::All => search(store, item_type, &Attributes::new(), keyring, None),
    }
}

fn search<S: CredentialStore + ?Sized>(
    store: &S,
    item_type: ItemType,
    attributes: &Attributes,
    keyring: &str,
    name: Option<&str>,
) -> StoreResult<Vec<CredentialItem>> {
    store.ensure_readable(keyring)?;
    let candidates = store.find_by_attributes(item_type, attributes)?;
    let total = candidates.len();

    let items: Vec<CredentialItem> = candidates
        .into_iter()
        .filter(|item| item.keyring == keyring)
        .filter(|item| name.map_or(true, |n| item.display_name == n))
        .collect();

    debug!(
        keyring = %keyring,
        candidates = total,
        matches = items.len(),
        "resolved by attributes"
    );
    Ok(items)
}
