//! Constants used throughout gkeyring.
//!
//! Centralizes magic strings, environment variable names and exit codes.

/// Environment variable holding the tracing filter (e.g. `gkeyring=debug`).
pub const LOG_ENV: &str = "GKEYRING_LOG";

/// Environment variable pointing at an explicit config file.
pub const CONFIG_ENV: &str = "GKEYRING_CONFIG";

/// Environment variable selecting the JSON file store.
pub const STORE_FILE_ENV: &str = "GKEYRING_STORE_FILE";

/// Config directory name under the platform config dir.
pub const CONFIG_DIR: &str = "gkeyring";

/// Config file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.toml";

/// Output columns used when none are configured.
pub const DEFAULT_OUTPUT: &str = "id,secret";

/// Secret Service attribute carrying the item schema.
pub const SCHEMA_ATTRIBUTE: &str = "xdg:schema";

/// Process exit codes.
pub mod exit {
    pub const SUCCESS: i32 = 0;
    pub const INTERRUPTED: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NO_MATCH: i32 = 3;
    pub const STORE_FAILURE: i32 = 4;
    pub const STORE_UNAVAILABLE: i32 = 5;
}
