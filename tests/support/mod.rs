//! Test support utilities for gkeyring integration tests.
//!
//! Every test runs the real binary against its own JSON file store, so no
//! Secret Service is needed and tests can run in parallel.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;

#[allow(unused_imports)]
pub use assertions::*;

use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with an isolated store file and home directory.
pub struct Test {
    /// Holds the store file and any fixtures
    pub dir: TempDir,
    /// Temporary home directory, so no user config is picked up
    pub home: TempDir,
}

impl Test {
    /// Create a new environment with an empty store.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");

        Self { dir, home }
    }

    /// Path of the JSON store used by every command.
    pub fn store_path(&self) -> PathBuf {
        self.dir.path().join("store.json")
    }

    /// Overwrite the store with a fixture.
    pub fn write_store(&self, store: &serde_json::Value) {
        std::fs::write(
            self.store_path(),
            serde_json::to_string_pretty(store).expect("failed to serialize store"),
        )
        .expect("failed to write store fixture");
    }

    /// Read the store back as JSON.
    pub fn read_store(&self) -> serde_json::Value {
        let contents = std::fs::read_to_string(self.store_path()).expect("store file missing");
        serde_json::from_str(&contents).expect("store file is not JSON")
    }

    /// Create an environment whose `login` keyring holds the given
    /// `(name, params, secret)` items, returning the assigned ids in order.
    pub fn with_items(items: &[(&str, &str, &str)]) -> (Self, Vec<u32>) {
        let t = Self::new();
        let ids = items
            .iter()
            .map(|(name, params, secret)| t.set_id(name, params, secret))
            .collect();
        (t, ids)
    }
}
