//! Query command.

use std::io::Write;

use clap::Args;
use tracing::debug;

use crate::cli::criteria::AttributeArgs;
use crate::core::config::Settings;
use crate::core::domain::{ItemId, Query};
use crate::core::format::{self, parse_columns, OutputSpec};
use crate::core::query::resolve;
use crate::core::store::{self, CredentialStore};
use crate::error::{Error, Result};

#[derive(Args, Debug, Default, Clone)]
pub struct QueryArgs {
    /// Item ids to print, in this order
    #[arg(value_name = "ID")]
    pub ids: Vec<ItemId>,

    /// Only items with exactly this display name
    #[arg(short, long)]
    pub name: Option<String>,

    #[command(flatten)]
    pub attributes: AttributeArgs,

    /// Match every item of the selected type
    #[arg(long)]
    pub all: bool,

    /// Output columns: id, secret, name or any attribute name
    #[arg(short, long, value_name = "COLUMNS")]
    pub output: Option<String>,

    /// Prefix each field with its column name
    #[arg(short = 'a', long)]
    pub attribute_names: bool,

    /// Don't print the trailing newline
    #[arg(short = '1', long)]
    pub no_newline: bool,
}

/// A validated query with its output layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    pub query: Query,
    pub spec: OutputSpec,
}

impl QueryRequest {
    /// Validate arguments without touching the store.
    ///
    /// # Errors
    ///
    /// Returns `UsageError` for missing, mixed or malformed criteria and
    /// bad column lists.
    pub fn from_args(args: &QueryArgs, settings: &Settings) -> Result<Self> {
        let query = Query::from_parts(
            args.ids.clone(),
            args.attributes.attributes()?,
            args.name.clone(),
            args.all,
        )?;

        let columns = match (&args.output, &settings.output) {
            (Some(raw), _) => parse_columns(raw)?,
            (None, Some(configured)) => configured.clone(),
            (None, None) => OutputSpec::default().columns,
        };
        let spec = OutputSpec::new(columns)
            .with_attribute_names(args.attribute_names)
            .with_no_newline(args.no_newline);

        Ok(Self { query, spec })
    }
}

/// Resolve a validated request and render the matches.
///
/// # Errors
///
/// Returns `Error::NoMatch` when nothing matched, or the store's error.
pub fn run<S: CredentialStore + ?Sized>(
    store: &S,
    settings: &Settings,
    request: &QueryRequest,
) -> Result<String> {
    let keyring = settings.target_keyring(store)?;
    let items = resolve(store, &request.query, settings.item_type, &keyring)?;

    if items.is_empty() {
        return Err(Error::NoMatch);
    }
    debug!(count = items.len(), "rendering matches");
    Ok(format::render(&items, &request.spec))
}

/// Query the keyring and print matches to stdout.
pub fn execute(args: &QueryArgs, settings: &Settings) -> Result<()> {
    let request = QueryRequest::from_args(args, settings)?;
    let store = store::open(&settings.backend)?;
    let out = run(&*store, settings, &request)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(out.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
