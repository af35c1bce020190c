//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a gkeyring command bound to this test's store.
    ///
    /// Returns a Command configured with:
    /// - the JSON store at `store_path()`
    /// - HOME and XDG_CONFIG_HOME pointing at the temporary home
    /// - logging and color variables cleared
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("gkeyring").expect("failed to find gkeyring binary");
        cmd.env("GKEYRING_STORE_FILE", self.store_path());
        cmd.env("HOME", self.home.path());
        cmd.env("XDG_CONFIG_HOME", self.home.path().join(".config"));
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("GKEYRING_CONFIG");
        cmd.env_remove("GKEYRING_LOG");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Same environment as [`Test::cmd`], as a plain process command for
    /// tests that need to spawn and signal the child.
    pub fn process(&self) -> std::process::Command {
        #[allow(deprecated)]
        let bin = assert_cmd::cargo::cargo_bin("gkeyring");
        let mut cmd = std::process::Command::new(bin);
        cmd.env("GKEYRING_STORE_FILE", self.store_path());
        cmd.env("HOME", self.home.path());
        cmd.env("XDG_CONFIG_HOME", self.home.path().join(".config"));
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("GKEYRING_CONFIG");
        cmd.env_remove("GKEYRING_LOG");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Run gkeyring with the given arguments.
    pub fn run(&self, args: &[&str]) -> Output {
        self.cmd()
            .args(args)
            .output()
            .expect("failed to run gkeyring")
    }

    /// Shortcut for `gkeyring set -n NAME [-p PARAMS] -w SECRET`.
    pub fn set(&self, name: &str, params: &str, secret: &str) -> Output {
        let mut args = vec!["set", "-n", name, "-w", secret];
        if !params.is_empty() {
            args.extend(["-p", params]);
        }
        self.run(&args)
    }

    /// Run `set` and return the printed id.
    pub fn set_id(&self, name: &str, params: &str, secret: &str) -> u32 {
        let output = self.set(name, params, secret);
        assert!(
            output.status.success(),
            "Failed to set {}: {}",
            name,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout)
            .trim()
            .parse()
            .expect("set did not print an id")
    }

    /// Shortcut for `gkeyring query ARGS...`.
    pub fn query(&self, args: &[&str]) -> Output {
        let mut full = vec!["query"];
        full.extend_from_slice(args);
        self.run(&full)
    }

    /// Shortcut for `gkeyring delete IDS...`.
    pub fn delete(&self, ids: &[u32]) -> Output {
        let ids: Vec<String> = ids.iter().map(u32::to_string).collect();
        let mut args = vec!["delete"];
        args.extend(ids.iter().map(String::as_str));
        self.run(&args)
    }
}
