//! Tests for the delete command.

use crate::support::*;

#[test]
fn test_delete_removes_items() {
    let (t, ids) = Test::with_items(&[("a", "", "1"), ("b", "", "2")]);

    let output = t.delete(&ids);
    assert_success(&output);

    let output = t.query(&["--all"]);
    assert_exit_code(&output, 3);
}

#[test]
fn test_delete_stops_at_first_failure() {
    let (t, ids) = Test::with_items(&[("a", "", "1"), ("c", "", "3")]);

    let output = t.delete(&[ids[0], 999, ids[1]]);
    assert_exit_code(&output, 4);
    assert_stderr_contains(&output, "no item with id 999");

    // the first id was deleted, the one after the failure was not
    let output = t.query(&["--all", "-o", "name"]);
    assert_success(&output);
    assert_eq!(stdout(&output), "c\n");
}

#[test]
fn test_delete_requires_ids() {
    let t = Test::new();

    let output = t.run(&["delete"]);
    assert_exit_code(&output, 2);
}
