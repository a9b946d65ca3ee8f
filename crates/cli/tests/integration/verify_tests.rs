//! Integration tests for `sett verify`.

use predicates::prelude::*;

use super::helpers::{fixture, sett_cmd, verify_cmd};

#[test]
fn test_verify_deposit_passes() {
    verify_cmd("deposit", "deposit")
        .args(["--amount", "500000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PASS"))
        .stdout(predicate::str::contains("deposit"))
        .stdout(predicate::str::contains("100 -> 101"));
}

#[test]
fn test_verify_deposit_wrong_amount_fails() {
    verify_cmd("deposit", "deposit")
        .args(["--amount", "400000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("deposit verification failed"))
        .stderr(predicate::str::contains("deposit: total supply"));
}

#[test]
fn test_verify_deposit_with_expected_shares() {
    verify_cmd("deposit", "deposit")
        .args(["--amount", "500000", "--expected-shares", "499999"])
        .assert()
        .success();

    verify_cmd("deposit", "deposit")
        .args(["--amount", "500000", "--expected-shares", "499999", "--tolerance", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("tolerance 0"));
}

#[test]
fn test_verify_withdraw_json_output() {
    let output = verify_cmd("withdraw", "withdraw")
        .args(["--amount", "100000", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["action"], "withdraw");
    assert_eq!(json["strategy"], "base");
    assert_eq!(json["before_block"], 100);
    assert_eq!(json["after_block"], 101);
}

#[test]
fn test_verify_harvest_reaches_strategy_hook() {
    verify_cmd("harvest", "harvest")
        .assert()
        .failure()
        .stderr(predicate::str::contains("must implement after_harvest"));
}

#[test]
fn test_verify_earn_with_gmx_hooks() {
    verify_cmd("earn", "earn_gmx")
        .args(["--strategy", "gmx"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gmx"));
}

#[test]
fn test_verify_strategy_from_env() {
    verify_cmd("tend", "tend_gmx")
        .env("SETT_STRATEGY", "gmx")
        .assert()
        .success()
        .stdout(predicate::str::contains("tend"));
}

#[test]
fn test_verify_tend_without_strategy_fails() {
    verify_cmd("tend", "tend_gmx")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Strategy base must implement confirm_tend"));
}

#[test]
fn test_verify_gmx_requires_gmx_keys() {
    verify_cmd("deposit", "deposit")
        .args(["--amount", "500000", "--strategy", "gmx"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read snapshot"))
        .stderr(predicate::str::contains("balances.GmxVester.strategy"));
}

#[test]
fn test_verify_mismatched_snapshots() {
    sett_cmd()
        .args([
            "verify",
            "deposit",
            "--amount",
            "1",
            "--before",
            &fixture("deposit_before"),
            "--after",
            &fixture("earn_gmx_after"),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Snapshots do not form a pair"));
}

#[test]
fn test_verify_reversed_snapshots() {
    sett_cmd()
        .args([
            "verify",
            "deposit",
            "--amount",
            "500000",
            "--before",
            &fixture("deposit_after"),
            "--after",
            &fixture("deposit_before"),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not later than"));
}

#[test]
fn test_verify_missing_file() {
    verify_cmd("harvest", "does_not_exist")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read snapshot"));
}

#[test]
fn test_verify_verbose_logs_checks() {
    verify_cmd("deposit", "deposit")
        .args(["--amount", "500000", "-v"])
        .assert()
        .success()
        .stderr(predicate::str::contains("check passed"));
}
