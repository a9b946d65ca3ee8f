//! Assertion primitives shared by the verifier and strategy hooks.
//!
//! Each returns on the first violation; successful checks are logged at
//! `debug` so a passing run can still be traced.

use alloy_primitives::U256;
use sett_rs_math::{abs_diff, approx_eq};
use tracing::{debug, warn};

use crate::error::{Result, VerifyError};

/// `|actual - expected| <= tolerance`.
pub fn ensure_approx(check: &str, actual: U256, expected: U256, tolerance: U256) -> Result<()> {
    if approx_eq(actual, expected, tolerance) {
        debug!(check, %actual, %expected, %tolerance, "check passed");
        return Ok(());
    }
    warn!(
        check,
        %actual,
        %expected,
        diff = %abs_diff(actual, expected),
        "check failed"
    );
    Err(VerifyError::Mismatch {
        check: check.to_string(),
        expected,
        actual,
        tolerance,
    })
}

/// `actual == expected`.
pub fn ensure_eq(check: &str, actual: U256, expected: U256) -> Result<()> {
    ensure_approx(check, actual, expected, U256::ZERO)
}

/// A structural condition; `detail` is only rendered on failure.
pub fn ensure(check: &str, condition: bool, detail: impl FnOnce() -> String) -> Result<()> {
    if condition {
        debug!(check, "check passed");
        return Ok(());
    }
    let detail = detail();
    warn!(check, %detail, "check failed");
    Err(VerifyError::Violation {
        check: check.to_string(),
        detail,
    })
}

/// `after - before`, failing if the value went down.
pub fn increase(check: &str, before: U256, after: U256) -> Result<U256> {
    after.checked_sub(before).ok_or_else(|| VerifyError::Violation {
        check: check.to_string(),
        detail: format!("decreased from {before} to {after}"),
    })
}

/// `before - after`, failing if the value went up.
pub fn decrease(check: &str, before: U256, after: U256) -> Result<U256> {
    before.checked_sub(after).ok_or_else(|| VerifyError::Violation {
        check: check.to_string(),
        detail: format!("increased from {before} to {after}"),
    })
}
