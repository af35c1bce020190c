//! Diagnostic output on stderr.
//!
//! stdout carries only command results so it stays safe to parse; errors
//! and hints go to stderr. Colors respect `NO_COLOR`.

use console::style;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && console::colors_enabled_stderr()
}

/// Print an error message (red).
///
/// Example: `✗ keyring 'login' is locked`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").for_stderr().red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a hint message (cyan).
///
/// Example: `→ run: gkeyring unlock`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("→").for_stderr().cyan(), style(msg).for_stderr().cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}
