//! Core library components.
//!
//! Domain types, the credential store abstraction and its backends, query
//! resolution, output formatting and configuration. Nothing here prints or
//! reads from the terminal.

pub mod config;
pub mod constants;
pub mod domain;
pub mod format;
pub mod query;
pub mod store;
