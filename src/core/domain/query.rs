//! Query criteria.

use super::{Attributes, ItemId};
use crate::error::UsageError;

/// What a query selects. Exactly one mode is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Explicit ids, looked up in the given order.
    Ids(Vec<ItemId>),
    /// Conjunctive attribute constraints plus an optional exact display name.
    Attributes {
        attributes: Attributes,
        name: Option<String>,
    },
    /// Every item of the selected type in the target keyring.
    All,
}

impl Query {
    /// Build a query from raw criteria, rejecting empty or mixed modes.
    ///
    /// A name on its own is an attribute query with no constraints.
    ///
    /// # Errors
    ///
    /// `UsageError::NoCriteria` when nothing is given,
    /// `UsageError::ConflictingModes` when modes are mixed and
    /// `UsageError::EmptyName` for an empty name filter.
    pub fn from_parts(
        ids: Vec<ItemId>,
        attributes: Attributes,
        name: Option<String>,
        all: bool,
    ) -> Result<Self, UsageError> {
        if matches!(name.as_deref(), Some("")) {
            return Err(UsageError::EmptyName);
        }

        let filtered = !attributes.is_empty() || name.is_some();

        match (!ids.is_empty(), filtered, all) {
            (false, false, false) => Err(UsageError::NoCriteria),
            (true, false, false) => Ok(Query::Ids(ids)),
            (false, true, false) => Ok(Query::Attributes { attributes, name }),
            (false, false, true) => Ok(Query::All),
            (true, _, _) if all => Err(UsageError::ConflictingModes(
                "ids cannot be combined with --all".to_string(),
            )),
            (true, _, _) => Err(UsageError::ConflictingModes(
                "ids cannot be combined with attributes or a name".to_string(),
            )),
            (false, true, true) => Err(UsageError::ConflictingModes(
                "--all cannot be combined with attributes or a name".to_string(),
            )),
        }
    }

    /// Name filter applied after the store search, if any.
    pub fn name_filter(&self) -> Option<&str> {
        match self {
            Query::Attributes { name, .. } => name.as_deref(),
            Query::Ids(_) | Query::All => None,
        }
    }
}
