//! Test helper utilities for CLI integration tests.

#![allow(deprecated)] // Command::cargo_bin deprecation

use assert_cmd::Command;

/// Create a CLI command with a clean strategy/tolerance environment.
pub fn sett_cmd() -> Command {
    let mut cmd = Command::cargo_bin("sett").unwrap();
    cmd.env_remove("SETT_STRATEGY")
        .env_remove("SETT_TOLERANCE")
        .env_remove("RUST_LOG");
    cmd
}

/// Absolute path of a fixture file.
pub fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}.json", env!("CARGO_MANIFEST_DIR"), name)
}

/// `sett verify <action> --before <scenario>_before --after <scenario>_after`.
pub fn verify_cmd(action: &str, scenario: &str) -> Command {
    let mut cmd = sett_cmd();
    cmd.args([
        "verify",
        action,
        "--before",
        &fixture(&format!("{scenario}_before")),
        "--after",
        &fixture(&format!("{scenario}_after")),
    ]);
    cmd
}
