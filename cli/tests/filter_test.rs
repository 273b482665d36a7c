//! Integration tests for the `filter` command.

mod common;

use common::{arrayloop, check_stdout, failing_stderr};
use expect_test::expect;
use predicates::prelude::*;

#[test]
fn filter_even() {
    check_stdout(
        &["filter", "--keep", "even", "1", "2", "3", "4", "5"],
        None,
        expect!["[2, 4]\n"],
    );
}

#[test]
fn filter_odd_with_negatives() {
    check_stdout(
        &["filter", "-k", "odd", "-3", "-2", "0", "7"],
        None,
        expect!["[-3, 7]\n"],
    );
}

#[test]
fn filter_sign() {
    check_stdout(&["filter", "--keep", "positive", "-1", "0", "1"], None, expect!["[1]\n"]);
    check_stdout(&["filter", "--keep", "negative", "-1", "0", "1"], None, expect!["[-1]\n"]);
}

#[test]
fn filter_nothing_kept_prints_empty_list() {
    check_stdout(&["filter", "--keep", "negative", "1", "2"], None, expect!["[]\n"]);
}

#[test]
fn filter_from_stdin() {
    check_stdout(
        &["filter", "--keep", "even", "-"],
        Some("10\n11\n12\n"),
        expect!["[10, 12]\n"],
    );
}

#[test]
fn filter_invalid_value_fails() {
    let stderr = failing_stderr(&["--no-color", "filter", "--keep", "even", "1.5"], None);
    assert!(stderr.contains("invalid value `1.5`"), "stderr: {stderr}");
}

#[test]
fn filter_help_lists_predicates() {
    arrayloop()
        .args(["filter", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("even"))
        .stdout(predicate::str::contains("negative"));
}
