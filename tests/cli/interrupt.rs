//! Tests for Ctrl-C handling.

use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crate::support::*;

/// Send SIGINT to `pid`.
fn interrupt(pid: u32) {
    let status = Command::new("kill")
        .args(["-INT", &pid.to_string()])
        .status()
        .expect("failed to run kill");
    assert!(status.success(), "kill -INT failed");
}

#[test]
fn test_interrupt_while_waiting_for_secret_exits_1() {
    let t = Test::new();

    // `set` without -w blocks reading the secret from stdin
    let mut child = t
        .process()
        .args(["set", "-n", "x", "-p", "a=b"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn gkeyring");
    let _stdin = child.stdin.take();

    thread::sleep(Duration::from_millis(500));
    interrupt(child.id());

    let deadline = Instant::now() + Duration::from_secs(10);
    let status = loop {
        if let Some(status) = child.try_wait().expect("wait failed") {
            break status;
        }
        if Instant::now() > deadline {
            let _ = child.kill();
            panic!("gkeyring did not exit after SIGINT");
        }
        thread::sleep(Duration::from_millis(20));
    };

    assert_eq!(status.code(), Some(1), "expected exit 1, got {:?}", status);
    assert!(!t.store_path().exists(), "nothing should be written");
}
