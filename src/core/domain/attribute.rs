//! Typed item attributes.
//!
//! The store keeps attribute values as either text or integers and matching
//! is type-strict, so `port=22` as text never matches `port=22` as integer.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::UsageError;

/// A single attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Integer(i64),
    Text(String),
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Integer(n) => write!(f, "{}", n),
            AttributeValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::Text(s.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::Text(s)
    }
}

impl From<i64> for AttributeValue {
    fn from(n: i64) -> Self {
        AttributeValue::Integer(n)
    }
}

/// Which variant a `name=value` list produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    Text,
    Integer,
}

/// Attribute map with unique names, iterated in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(BTreeMap<String, AttributeValue>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an attribute, rejecting a name that is already present.
    pub fn insert_unique(
        &mut self,
        name: impl Into<String>,
        value: AttributeValue,
    ) -> Result<(), UsageError> {
        let name = name.into();
        if self.0.contains_key(&name) {
            return Err(UsageError::DuplicateAttribute(name));
        }
        self.0.insert(name, value);
        Ok(())
    }

    /// Insert or overwrite an attribute.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttributeValue>) {
        self.0.insert(name.into(), value.into());
    }

    /// Merge another set in, rejecting names present in both.
    pub fn extend_unique(&mut self, other: Attributes) -> Result<(), UsageError> {
        for (name, value) in other.0 {
            self.insert_unique(name, value)?;
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.0.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &AttributeValue)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every constraint in `query` is present here with an equal,
    /// same-typed value.
    pub fn contains_all(&self, query: &Attributes) -> bool {
        query
            .iter()
            .all(|(name, value)| self.0.get(name) == Some(value))
    }
}

impl FromIterator<(String, AttributeValue)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (String, AttributeValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Parse a comma-separated `name=value` list.
///
/// Values may contain `=`; only the first one splits. Names are trimmed and
/// must be non-empty. Values cannot contain commas.
///
/// # Errors
///
/// Returns `UsageError::InvalidAttribute` for malformed pairs or integers
/// that don't parse, and `UsageError::DuplicateAttribute` for repeated names.
pub fn parse_list(input: &str, kind: AttributeKind) -> Result<Attributes, UsageError> {
    let mut attributes = Attributes::new();

    for pair in input.split(',').filter(|p| !p.trim().is_empty()) {
        let (name, raw) = pair
            .split_once('=')
            .ok_or_else(|| UsageError::InvalidAttribute {
                input: pair.to_string(),
                reason: "expected name=value".to_string(),
            })?;

        let name = name.trim();
        if name.is_empty() {
            return Err(UsageError::InvalidAttribute {
                input: pair.to_string(),
                reason: "attribute name is empty".to_string(),
            });
        }

        let value = match kind {
            AttributeKind::Text => AttributeValue::Text(raw.to_string()),
            AttributeKind::Integer => {
                let n = raw
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| UsageError::InvalidAttribute {
                        input: pair.to_string(),
                        reason: format!("'{}' is not an integer", raw),
                    })?;
                AttributeValue::Integer(n)
            }
        };

        attributes.insert_unique(name, value)?;
    }

    Ok(attributes)
}
