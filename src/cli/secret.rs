//! Secret input.
//!
//! Secrets come from the command line when given, otherwise from one line
//! of stdin when it is piped, otherwise from a hidden prompt.

use std::io::{self, BufRead, IsTerminal};

use dialoguer::Password;
use tracing::debug;
use zeroize::Zeroizing;

use crate::error::Result;

/// Read a secret, prompting only when stdin is a terminal.
///
/// # Errors
///
/// Returns `Error::Interrupted` if the prompt is interrupted, or an I/O
/// error if stdin cannot be read.
pub fn read(provided: Option<String>, prompt: &str) -> Result<Zeroizing<String>> {
    if let Some(secret) = provided {
        return Ok(Zeroizing::new(secret));
    }

    let stdin = io::stdin();
    if !stdin.is_terminal() {
        debug!("reading secret from stdin");
        let mut line = Zeroizing::new(String::new());
        stdin.lock().read_line(&mut line)?;
        return Ok(Zeroizing::new(strip_line_ending(&line).to_string()));
    }

    let secret = Password::new().with_prompt(prompt).interact()?;
    Ok(Zeroizing::new(secret))
}

fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}
