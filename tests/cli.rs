//! End-to-end tests for the demo binary

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_parses_canonical_flags() {
    Command::cargo_bin("argspan")
        .unwrap()
        .args(["-l", "-p", "8080", "-d", "/usr/logs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("logging: true"))
        .stdout(predicate::str::contains("port: 8080"))
        .stdout(predicate::str::contains("directory: /usr/logs"));
}

#[test]
fn test_reports_absent_flags() {
    Command::cargo_bin("argspan")
        .unwrap()
        .args(["-l"])
        .assert()
        .success()
        .stdout(predicate::str::contains("logging: true"))
        .stdout(predicate::str::contains("port: (absent)"))
        .stdout(predicate::str::contains("directory: (absent)"));
}

#[test]
fn test_reports_too_many_values() {
    Command::cargo_bin("argspan")
        .unwrap()
        .args(["-p", "8080", "9090"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("too many values"));
}

#[test]
fn test_reports_missing_value() {
    Command::cargo_bin("argspan")
        .unwrap()
        .args(["-p", "-l"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("too few values"));
}

#[test]
fn test_reports_invalid_value() {
    Command::cargo_bin("argspan")
        .unwrap()
        .args(["-p", "abc"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid value 'abc'"));
}
