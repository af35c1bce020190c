//! Tests for the set command.

use crate::support::*;

#[test]
fn test_set_prints_new_id() {
    let t = Test::new();

    let first = t.set_id("foo", "bar=baz", "s3cr3t");
    let second = t.set_id("other", "bar=qux", "pw");
    assert_ne!(first, second);
}

#[test]
fn test_set_then_query_round_trip() {
    let t = Test::new();
    let id = t.set_id("foo", "bar=baz", "s3cr3t").to_string();

    let output = t.query(&[&id, "-o", "name,bar,secret"]);
    assert_success(&output);
    assert_eq!(stdout(&output), "foo\tbaz\ts3cr3t\n");
}

#[test]
fn test_set_reads_secret_from_stdin() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["set", "-n", "piped", "-p", "src=stdin"])
        .write_stdin("from-pipe\n")
        .output()
        .unwrap();
    assert_success(&output);

    let output = t.query(&["-p", "src=stdin", "-o", "secret"]);
    assert_eq!(stdout(&output), "from-pipe\n");
}

#[test]
fn test_set_empty_secret_rejected() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["set", "-n", "empty"])
        .write_stdin("\n")
        .output()
        .unwrap();
    assert_exit_code(&output, 2);
    assert!(!t.store_path().exists());
}

#[test]
fn test_set_update_replaces_matching_item() {
    let t = Test::new();
    let id = t.set_id("foo", "bar=baz", "old");

    let output = t.run(&["set", "-n", "foo", "-p", "bar=baz", "-w", "new", "--update"]);
    assert_success(&output);
    assert_eq!(stdout(&output).trim(), id.to_string());

    let output = t.query(&["-p", "bar=baz", "-o", "secret"]);
    assert_eq!(stdout(&output), "new\n");
}

#[test]
fn test_set_into_missing_keyring_fails() {
    let t = Test::new();

    let output = t.run(&["-k", "nope", "set", "-n", "foo", "-w", "pw"]);
    assert_exit_code(&output, 4);
    assert_stderr_contains(&output, "keyring 'nope' does not exist");
}
