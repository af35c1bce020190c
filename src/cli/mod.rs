//! Command-line interface.

pub mod completions;
pub mod criteria;
pub mod delete;
pub mod interrupt;
pub mod lock;
pub mod output;
pub mod query;
pub mod secret;
pub mod set;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::config::{FileConfig, Overrides, Settings};
use crate::core::domain::ItemType;
use crate::error::Result;

/// gkeyring - query and manage desktop keyring items.
#[derive(Parser, Debug)]
#[command(
    name = "gkeyring",
    about = "Query and manage items in the desktop keyring",
    version,
    after_help = "Exit codes: 0 ok, 1 interrupted, 2 bad arguments, 3 no match, 4 keyring error, 5 keyring unavailable"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command.
#[derive(Args, Debug, Default, Clone)]
pub struct GlobalArgs {
    /// Keyring name (default: the keyring's default collection)
    #[arg(short, long, global = true)]
    pub keyring: Option<String>,

    /// Item type: generic, network or note
    #[arg(short = 't', long = "type", global = true)]
    pub item_type: Option<ItemType>,

    /// Config file (default: ~/.config/gkeyring/config.toml)
    #[arg(long, global = true, env = "GKEYRING_CONFIG")]
    pub config: Option<PathBuf>,

    /// Use a plaintext JSON store instead of the Secret Service
    #[arg(long, global = true, env = "GKEYRING_STORE_FILE", hide = true)]
    pub store_file: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl GlobalArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            keyring: self.keyring.clone(),
            item_type: self.item_type,
            store_file: self.store_file.clone(),
        }
    }
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print items matching ids, attributes or a name
    Query(query::QueryArgs),

    /// Create an item and print its id
    Set(set::SetArgs),

    /// Delete items by id
    Delete(delete::DeleteArgs),

    /// Lock a keyring
    Lock,

    /// Unlock a keyring
    Unlock(lock::UnlockArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a parsed command line.
///
/// # Errors
///
/// Returns the command's error; the caller maps it to an exit code.
pub fn execute(cli: Cli) -> Result<()> {
    let Cli { global, command } = cli;

    if let Command::Completions { shell } = command {
        return completions::execute(shell);
    }

    let file = FileConfig::load(global.config.as_deref())?;
    let settings = Settings::resolve(file, global.overrides())?;

    match command {
        Command::Query(args) => query::execute(&args, &settings),
        Command::Set(args) => set::execute(args, &settings),
        Command::Delete(args) => delete::execute(&args, &settings),
        Command::Lock => lock::lock(&settings),
        Command::Unlock(args) => lock::unlock(args, &settings),
        Command::Completions { .. } => Ok(()),
    }
}
