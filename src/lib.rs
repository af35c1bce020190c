//! gkeyring - query and manage desktop keyring items from the shell.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── query         # Print matching items
//! │   ├── set           # Create an item
//! │   ├── delete        # Delete items by id
//! │   ├── lock          # Lock/unlock a keyring
//! │   ├── criteria      # Attribute arguments
//! │   ├── secret        # Secret input (flag, stdin, prompt)
//! │   ├── interrupt     # Ctrl-C handling
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # Config file + immutable settings
//!     ├── domain/       # Items, attributes, item types, queries
//!     ├── store/        # Credential store trait and backends
//!     │   ├── secret_service  # freedesktop Secret Service (D-Bus)
//!     │   ├── file      # Plaintext JSON store
//!     │   └── memory    # In-process store
//!     ├── query         # Query resolution
//!     └── format        # Tab/newline-delimited output
//! ```
//!
//! # Example
//!
//! ```
//! use gkeyring::core::domain::{Attributes, Query};
//! use gkeyring::core::format::{render, OutputSpec};
//! use gkeyring::core::query::resolve;
//! use gkeyring::core::store::Memory;
//!
//! let store = Memory::new();
//! let query = Query::from_parts(vec![], Attributes::new(), None, true).unwrap();
//! let items = resolve(&store, &query, Default::default(), "login").unwrap();
//! assert_eq!(render(&items, &OutputSpec::default()), "");
//! ```

pub mod cli;
pub mod core;
pub mod error;
