//! Integration tests for `sett fees`.

use predicates::prelude::*;

use super::helpers::sett_cmd;

#[test]
fn test_fees_table_with_defaults() {
    sett_cmd()
        .args([
            "fees", "--gain", "100000", "--supply", "1000000", "--balance", "1000000", "--elapsed",
            "86400",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Performance"))
        .stdout(predicate::str::contains("9259"))
        .stdout(predicate::str::contains("9309"));
}

#[test]
fn test_fees_json_one_year() {
    let output = sett_cmd()
        .args([
            "fees",
            "--gain",
            "1_000_000",
            "--supply",
            "1000000",
            "--balance",
            "1000000",
            "--perf-treasury-bps",
            "2000",
            "--perf-strategist-bps",
            "2000",
            "--management-bps",
            "200",
            "--elapsed",
            "31556952",
            "--format",
            "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let report = &json["report"];
    assert_eq!(report["shares_perf_treasury"], "0x1ee76");
    assert_eq!(report["shares_management"], "0x3172");
    assert_eq!(report["shares_perf_strategist"], "0x1ee76");
}

#[test]
fn test_fees_zero_gain_mints_nothing() {
    sett_cmd()
        .args(["fees", "--gain", "0", "--supply", "1000", "--balance", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Minted total"));
}

#[test]
fn test_fees_empty_pool() {
    let args = ["fees", "--gain", "10", "--supply", "1000", "--balance", "0"];

    // Nothing to mint, so nothing divides by the empty pool.
    sett_cmd()
        .args(args)
        .args(["--perf-treasury-bps", "0", "--perf-strategist-bps", "0", "--management-bps", "0"])
        .assert()
        .success();

    // The whole gain is taken as fee, leaving no pool to price shares against.
    sett_cmd()
        .args(args)
        .args(["--perf-treasury-bps", "10000", "--perf-strategist-bps", "0", "--management-bps", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Division by zero"));
}

#[test]
fn test_fees_verbose_logs_to_stderr() {
    let args = [
        "fees", "--gain", "100000", "--supply", "1000000", "--balance", "1000000",
    ];

    sett_cmd()
        .arg("-v")
        .args(args)
        .assert()
        .success()
        .stderr(predicate::str::contains("computing harvest fees"));

    sett_cmd()
        .args(args)
        .assert()
        .success()
        .stderr(predicate::str::contains("computing harvest fees").not());
}
