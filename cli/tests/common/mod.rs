//! Shared test utilities for CLI integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use expect_test::Expect;

/// Create a new command for the arrayloop binary.
pub fn arrayloop() -> Command {
    Command::new(env!("CARGO_BIN_EXE_arrayloop"))
}

/// Run a command and check that stdout matches the expected output.
pub fn check_stdout(args: &[&str], stdin: Option<&str>, expected: Expect) {
    let mut cmd = arrayloop();
    cmd.args(args);
    if let Some(input) = stdin {
        cmd.write_stdin(input);
    }
    let output = cmd.output().expect("failed to execute command");
    let stdout = String::from_utf8_lossy(&output.stdout);
    expected.assert_eq(&stdout);
}

/// Run a command, assert it fails, and return its stderr.
pub fn failing_stderr(args: &[&str], stdin: Option<&str>) -> String {
    let mut cmd = arrayloop();
    cmd.args(args);
    if let Some(input) = stdin {
        cmd.write_stdin(input);
    }
    let output = cmd.output().expect("failed to execute command");
    assert_eq!(output.status.code(), Some(1), "expected exit code 1");
    assert!(output.stdout.is_empty(), "expected no stdout on failure");
    String::from_utf8_lossy(&output.stderr).into_owned()
}
