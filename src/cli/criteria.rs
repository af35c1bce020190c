//! Attribute arguments shared by `query` and `set`.

use clap::Args;

use crate::core::domain::{parse_list, AttributeKind, AttributeValue, Attributes};
use crate::error::UsageError;

/// Attribute lists plus the network-password shorthands.
#[derive(Args, Debug, Default, Clone)]
pub struct AttributeArgs {
    /// Text attributes as name=value[,name=value...]
    #[arg(short = 'p', long = "params", value_name = "LIST")]
    pub params: Vec<String>,

    /// Integer attributes as name=number[,name=number...]
    #[arg(short = 'i', long = "int-params", value_name = "LIST")]
    pub int_params: Vec<String>,

    /// Network server (text attribute `server`)
    #[arg(long)]
    pub server: Option<String>,

    /// Network protocol (text attribute `protocol`)
    #[arg(long)]
    pub protocol: Option<String>,

    /// User name (text attribute `user`)
    #[arg(long)]
    pub user: Option<String>,

    /// Network domain (text attribute `domain`)
    #[arg(long)]
    pub domain: Option<String>,

    /// Network port (integer attribute `port`)
    #[arg(long)]
    pub port: Option<i64>,
}

impl AttributeArgs {
    /// Combine every source into one typed attribute set.
    ///
    /// # Errors
    ///
    /// Returns `UsageError` for malformed lists or a name given twice.
    pub fn attributes(&self) -> Result<Attributes, UsageError> {
        let mut attributes = Attributes::new();

        for list in &self.params {
            attributes.extend_unique(parse_list(list, AttributeKind::Text)?)?;
        }
        for list in &self.int_params {
            attributes.extend_unique(parse_list(list, AttributeKind::Integer)?)?;
        }

        let shorthands = [
            ("server", &self.server),
            ("protocol", &self.protocol),
            ("user", &self.user),
            ("domain", &self.domain),
        ];
        for (name, value) in shorthands {
            if let Some(v) = value {
                attributes.insert_unique(name, AttributeValue::Text(v.clone()))?;
            }
        }
        if let Some(port) = self.port {
            attributes.insert_unique("port", AttributeValue::Integer(port))?;
        }

        Ok(attributes)
    }
}
