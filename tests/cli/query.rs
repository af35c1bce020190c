//! Tests for the query command.

use crate::support::*;

#[test]
fn test_query_by_id_prints_requested_columns() {
    let (t, ids) = Test::with_items(&[("foo", "bar=baz", "s3cr3t")]);
    let id = ids[0].to_string();

    let output = t.query(&[&id, "-o", "id,name,bar,secret"]);
    assert_success(&output);
    assert_eq!(stdout(&output), format!("{}\tfoo\tbaz\ts3cr3t\n", id));
}

#[test]
fn test_query_ids_keep_argument_order() {
    let (t, ids) = Test::with_items(&[("a", "", "1"), ("b", "", "2"), ("c", "", "3")]);
    let (a, b, c) = (ids[0].to_string(), ids[1].to_string(), ids[2].to_string());

    let output = t.query(&[&c, &a, &b, "-o", "name"]);
    assert_success(&output);
    assert_eq!(stdout(&output), "c\n\na\n\nb\n");
}

#[test]
fn test_query_secret_only_no_newline() {
    let (t, _) = Test::with_items(&[("foo", "bar=baz", "s3cr3t")]);

    let output = t.query(&["-p", "bar=baz", "-o", "secret", "-1"]);
    assert_success(&output);
    assert_eq!(stdout(&output), "s3cr3t");
}

#[test]
fn test_query_missing_attribute_renders_empty_field() {
    let (t, ids) = Test::with_items(&[("foo", "bar=baz", "s3cr3t")]);

    let output = t.query(&["--all", "-o", "id,missingAttr,name"]);
    assert_success(&output);
    assert_eq!(stdout(&output), format!("{}\t\tfoo\n", ids[0]));
}

#[test]
fn test_query_attribute_names_prefix() {
    let (t, ids) = Test::with_items(&[("foo", "bar=baz", "s3cr3t")]);

    let output = t.query(&["-n", "foo", "-o", "id,bar", "-a"]);
    assert_success(&output);
    assert_eq!(stdout(&output), format!("id={}\tbar=baz\n", ids[0]));
}

#[test]
fn test_query_name_filter_is_exact() {
    let (t, _) = Test::with_items(&[("foo", "svc=x", "1"), ("foobar", "svc=x", "2")]);

    let output = t.query(&["-p", "svc=x", "-n", "foo", "-o", "name"]);
    assert_success(&output);
    assert_eq!(stdout(&output), "foo\n");
}

#[test]
fn test_query_integer_attributes_are_type_strict() {
    let t = Test::new();
    let output = t.run(&["set", "-n", "ssh", "-i", "port=22", "-w", "pw"]);
    assert_success(&output);

    let output = t.query(&["-i", "port=22", "-o", "name"]);
    assert_success(&output);
    assert_eq!(stdout(&output), "ssh\n");

    let output = t.query(&["-p", "port=22", "-o", "name"]);
    assert_exit_code(&output, 3);
}

#[test]
fn test_query_ignores_other_keyrings() {
    let t = Test::new();
    t.write_store(&serde_json::json!({
        "default_keyring": "login",
        "keyrings": [
            {
                "name": "login",
                "next_id": 2,
                "items": [{"id": 1, "name": "home", "attributes": {"svc": "mail"}, "secret": "a"}]
            },
            {
                "name": "work",
                "next_id": 2,
                "items": [{"id": 1, "name": "office", "attributes": {"svc": "mail"}, "secret": "b"}]
            }
        ]
    }));

    let output = t.query(&["-k", "work", "-p", "svc=mail", "-o", "name,secret"]);
    assert_success(&output);
    assert_eq!(stdout(&output), "office\tb\n");

    let output = t.query(&["-p", "svc=mail", "-o", "name,secret"]);
    assert_success(&output);
    assert_eq!(stdout(&output), "home\ta\n");
}

#[test]
fn test_query_no_match_exit_code() {
    let (t, _) = Test::with_items(&[("foo", "bar=baz", "s3cr3t")]);

    let output = t.query(&["-p", "bar=nope"]);
    assert_exit_code(&output, 3);
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_query_missing_id_fails_whole_lookup() {
    let (t, ids) = Test::with_items(&[("foo", "", "s3cr3t")]);
    let id = ids[0].to_string();

    let output = t.query(&[&id, "999"]);
    assert_exit_code(&output, 4);
    assert!(stdout(&output).is_empty());
    assert_stderr_contains(&output, "999");
}

#[test]
fn test_query_network_shorthands() {
    let t = Test::new();
    let output = t.run(&[
        "-t", "network", "set", "-n", "ftp", "--server", "example.com", "--protocol", "ftp",
        "--user", "alice", "--port", "21", "-w", "pw",
    ]);
    assert_success(&output);

    let output = t.run(&[
        "-t", "network", "query", "--server", "example.com", "--port", "21", "-o", "user,port,secret",
    ]);
    assert_success(&output);
    assert_eq!(stdout(&output), "alice\t21\tpw\n");

    // generic items are a different type
    let output = t.query(&["--server", "example.com"]);
    assert_exit_code(&output, 3);
}
