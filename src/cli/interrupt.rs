//! Ctrl-C handling.
//!
//! The hidden password prompt leaves `ISIG` on, so an interrupt arrives as
//! SIGINT rather than as a read error. The handler puts the terminal back
//! the way the prompt found it and exits with the interrupted code.

use std::io::{self, IsTerminal};
use std::process::{Command, Stdio};

use console::Term;
use tracing::{debug, warn};

use crate::core::constants::exit;

/// Install the process-wide SIGINT handler.
///
/// Failing to install it is logged and otherwise ignored; Ctrl-C then
/// falls back to the default signal behavior.
pub fn install() {
    if let Err(e) = ctrlc::set_handler(on_interrupt) {
        warn!(error = %e, "could not install interrupt handler");
    }
}

fn on_interrupt() {
    debug!("interrupted");
    restore_terminal();
    std::process::exit(exit::INTERRUPTED);
}

/// Turn echo back on and show the cursor if stdin is a terminal.
fn restore_terminal() {
    if !io::stdin().is_terminal() {
        return;
    }

    let echo = Command::new("stty")
        .arg("echo")
        .stdin(Stdio::inherit())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();
    if let Err(e) = echo {
        debug!(error = %e, "stty echo failed");
    }

    let term = Term::stderr();
    let _ = term.show_cursor();
    let _ = term.write_line("");
}
