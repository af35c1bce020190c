//! gkeyring - query and manage desktop keyring items.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use gkeyring::cli::{execute, interrupt, output, Cli};
use gkeyring::core::constants::{exit, LOG_ENV};

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.global.verbose {
            EnvFilter::new("gkeyring=debug")
        } else {
            EnvFilter::new("gkeyring=warn")
        }
    });

    // Logs go to stderr; stdout is reserved for query output.
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    interrupt::install();

    if let Err(e) = execute(cli) {
        output::error(&e.to_string());
        if let Some(hint) = e.hint() {
            output::hint(hint);
        }
        std::process::exit(e.exit_code());
    }

    std::process::exit(exit::SUCCESS);
}
