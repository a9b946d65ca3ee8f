//! Integration tests for `sett diff`.

use predicates::prelude::*;

use super::helpers::{fixture, sett_cmd};

fn diff_args(scenario: &str) -> Vec<String> {
    vec![
        "diff".to_string(),
        "--before".to_string(),
        fixture(&format!("{scenario}_before")),
        "--after".to_string(),
        fixture(&format!("{scenario}_after")),
    ]
}

#[test]
fn test_diff_table_output() {
    sett_cmd()
        .args(diff_args("deposit"))
        .assert()
        .success()
        .stdout(predicate::str::contains("sett.totalSupply"))
        .stdout(predicate::str::contains("1500000"))
        .stdout(predicate::str::contains("+500000"));
}

#[test]
fn test_diff_json_only_changed() {
    let output = sett_cmd()
        .args(diff_args("withdraw"))
        .args(["--changed", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert!(rows.iter().all(|row| row["change"] != "0"));

    let treasury = rows
        .iter()
        .find(|row| row["key"] == "balances.sett.treasury")
        .unwrap();
    assert_eq!(treasury["before"], "0");
    assert_eq!(treasury["after"], "100");
    assert_eq!(treasury["change"], "+100");

    let user = rows
        .iter()
        .find(|row| row["key"] == "balances.sett.user")
        .unwrap();
    assert_eq!(user["change"], "-100000");
}

#[test]
fn test_diff_across_key_sets_shows_missing() {
    let output = sett_cmd()
        .args([
            "diff",
            "--before",
            &fixture("deposit_before"),
            "--after",
            &fixture("tend_gmx_after"),
            "--format",
            "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    let sg = rows
        .iter()
        .find(|row| row["key"] == "depositBalances.sgTracker")
        .unwrap();
    assert_eq!(sg["before"], "-");
    assert_eq!(sg["change"], "-");
}
