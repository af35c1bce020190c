//! `gkeyring completions <shell>`: print a completion script on stdout.

use std::io::Write;

use clap::CommandFactory;
use clap_complete::Shell as Target;

use crate::cli::{Cli, Shell};
use crate::error::Result;

impl From<Shell> for Target {
    fn from(shell: Shell) -> Self {
        match shell {
            Shell::Bash => Target::Bash,
            Shell::Zsh => Target::Zsh,
            Shell::Fish => Target::Fish,
            Shell::PowerShell => Target::PowerShell,
        }
    }
}

/// Write the script for `shell` to `out`.
pub fn write(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(Target::from(shell), &mut cmd, name, out);
}

pub fn execute(shell: Shell) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    write(shell, &mut stdout);
    stdout.flush()?;
    Ok(())
}
