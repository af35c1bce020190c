//! Tests for argument errors, exit codes and CLI flags.

use predicates::prelude::*;

use crate::support::*;

#[test]
fn test_help() {
    let t = Test::new();

    t.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("Exit codes"));
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    t.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("gkeyring "));
}

#[test]
fn test_unknown_command_is_usage_error() {
    let t = Test::new();

    let output = t.run(&["frobnicate"]);
    assert_exit_code(&output, 2);
}

#[test]
fn test_query_without_criteria_is_usage_error() {
    let t = Test::new();

    let output = t.query(&[]);
    assert_exit_code(&output, 2);
    assert_stderr_contains(&output, "no query criteria");
    assert!(!t.store_path().exists());
}

#[test]
fn test_query_mixed_modes_is_usage_error() {
    let t = Test::new();

    let output = t.query(&["1", "--all"]);
    assert_exit_code(&output, 2);
    assert_stderr_contains(&output, "conflicting query modes");

    let output = t.query(&["-p", "a=b", "--all"]);
    assert_exit_code(&output, 2);
}

#[test]
fn test_malformed_attribute_is_usage_error() {
    let t = Test::new();

    let output = t.query(&["-p", "novalue"]);
    assert_exit_code(&output, 2);

    let output = t.query(&["-i", "port=ssh"]);
    assert_exit_code(&output, 2);

    let output = t.query(&["-p", "a=1", "-p", "a=2"]);
    assert_exit_code(&output, 2);
    assert_stderr_contains(&output, "more than once");
}

#[test]
fn test_bad_item_type_is_usage_error() {
    let t = Test::new();

    let output = t.run(&["-t", "cookie", "query", "--all"]);
    assert_exit_code(&output, 2);
}

#[test]
fn test_corrupt_store_is_store_failure() {
    let t = Test::new();
    std::fs::write(t.store_path(), "{ not json").unwrap();

    let output = t.query(&["--all"]);
    assert_exit_code(&output, 4);
    assert_stderr_contains(&output, "corrupt");
}

#[test]
fn test_completions_bash_outputs_script() {
    let t = Test::new();

    let output = t.run(&["completions", "bash"]);
    assert_success(&output);
    assert!(stdout(&output).contains("gkeyring"));
}

#[test]
fn test_unreachable_secret_service_is_unavailable() {
    let t = Test::new();

    t.cmd()
        .env_remove("GKEYRING_STORE_FILE")
        .env("DBUS_SESSION_BUS_ADDRESS", "unix:path=/nonexistent/gkeyring-test-bus")
        .env("XDG_RUNTIME_DIR", t.dir.path())
        .args(["query", "--all"])
        .assert()
        .code(5)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unavailable"));
}

#[test]
fn test_unreadable_store_file_is_store_failure() {
    let t = Test::new();
    std::fs::create_dir(t.store_path()).unwrap();

    t.cmd()
        .args(["query", "--all"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("store file"));
}

#[test]
fn test_usage_error_names_the_problem() {
    let t = Test::new();

    t.cmd()
        .args(["set", "-n", "", "-w", "pw"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("item name cannot be empty"));
}
