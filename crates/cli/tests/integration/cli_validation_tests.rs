//! CLI argument validation tests.
//!
//! These tests verify that the CLI properly validates arguments and provides
//! helpful error messages before any snapshot is read.

use predicates::prelude::*;

use super::helpers::{sett_cmd, verify_cmd};

#[test]
fn test_help_output() {
    sett_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sett"))
        .stdout(predicate::str::contains("verify"))
        .stdout(predicate::str::contains("diff"))
        .stdout(predicate::str::contains("fees"));
}

#[test]
fn test_verify_help_lists_actions() {
    sett_cmd()
        .args(["verify", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("deposit"))
        .stdout(predicate::str::contains("tend"))
        .stdout(predicate::str::contains("SETT_TOLERANCE"));
}

#[test]
fn test_invalid_command() {
    sett_cmd()
        .arg("invalid_command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_invalid_action() {
    verify_cmd("rebalance", "deposit")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_verify_missing_before() {
    sett_cmd()
        .args(["verify", "harvest", "--after", "after.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_deposit_requires_amount() {
    verify_cmd("deposit", "deposit")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--amount is required"));
}

#[test]
fn test_invalid_amount() {
    verify_cmd("withdraw", "withdraw")
        .args(["--amount", "1.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));
}

#[test]
fn test_invalid_strategy() {
    verify_cmd("earn", "earn_gmx")
        .args(["--strategy", "curve"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_invalid_tolerance_from_env() {
    verify_cmd("deposit", "deposit")
        .args(["--amount", "500000"])
        .env("SETT_TOLERANCE", "lots")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));
}

#[test]
fn test_invalid_format() {
    sett_cmd()
        .args(["fees", "--gain", "1", "--supply", "1", "--balance", "1", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
