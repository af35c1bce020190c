//! Delimited text output.
//!
//! One record per item, records separated by a blank line, fields separated
//! by a tab. Values are written as-is: a value containing a tab or newline
//! breaks the layout, which is a known limitation of the format.

use std::fmt::Write as _;
use std::str::FromStr;

use crate::core::constants::DEFAULT_OUTPUT;
use crate::core::domain::CredentialItem;
use crate::error::UsageError;

/// One output column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Column {
    Id,
    Secret,
    Name,
    /// Any other name is looked up in the item's attributes.
    Attribute(String),
}

impl Column {
    pub fn label(&self) -> &str {
        match self {
            Column::Id => "id",
            Column::Secret => "secret",
            Column::Name => "name",
            Column::Attribute(name) => name,
        }
    }

    fn value(&self, item: &CredentialItem) -> String {
        match self {
            Column::Id => item.id.to_string(),
            Column::Secret => item.secret.to_string(),
            Column::Name => item.display_name.clone(),
            Column::Attribute(name) => item
                .attributes
                .get(name)
                .map(ToString::to_string)
                .unwrap_or_default(),
        }
    }
}

impl From<&str> for Column {
    fn from(s: &str) -> Self {
        match s {
            "id" => Column::Id,
            "secret" => Column::Secret,
            "name" => Column::Name,
            other => Column::Attribute(other.to_string()),
        }
    }
}

/// Parsed output options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSpec {
    pub columns: Vec<Column>,
    /// Prefix every field with `<column>=`.
    pub attribute_names: bool,
    /// Drop the final newline.
    pub no_newline: bool,
}

impl OutputSpec {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            attribute_names: false,
            no_newline: false,
        }
    }

    pub fn with_attribute_names(mut self, enabled: bool) -> Self {
        self.attribute_names = enabled;
        self
    }

    pub fn with_no_newline(mut self, enabled: bool) -> Self {
        self.no_newline = enabled;
        self
    }
}

impl Default for OutputSpec {
    fn default() -> Self {
        // DEFAULT_OUTPUT is a fixed, valid column list.
        Self::new(parse_columns(DEFAULT_OUTPUT).unwrap_or_default())
    }
}

impl FromStr for OutputSpec {
    type Err = UsageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(parse_columns(s)?))
    }
}

/// Parse a comma-separated column list such as `id,name,server`.
///
/// # Errors
///
/// Returns `UsageError::InvalidColumn` if the list is empty or contains an
/// empty entry.
pub fn parse_columns(input: &str) -> Result<Vec<Column>, UsageError> {
    let names: Vec<&str> = input.split(',').map(str::trim).collect();
    if names.iter().any(|n| n.is_empty()) {
        return Err(UsageError::InvalidColumn(input.to_string()));
    }
    Ok(names.into_iter().map(Column::from).collect())
}

/// Render items as delimited text.
pub fn render(items: &[CredentialItem], spec: &OutputSpec) -> String {
    let mut out = String::new();

    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str("\n\n");
        }
        for (j, column) in spec.columns.iter().enumerate() {
            if j > 0 {
                out.push('\t');
            }
            if spec.attribute_names {
                let _ = write!(out, "{}=", column.label());
            }
            out.push_str(&column.value(item));
        }
    }

    if !items.is_empty() && !spec.no_newline {
        out.push('\n');
    }
    out
}
