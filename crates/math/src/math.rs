//! Fixed-point integer primitives shared by the share and fee modules.
//!
//! Every operation floors toward zero, the same way the vault contract's
//! `uint256` arithmetic does. Nothing here touches floating point.

use alloy_primitives::U256;

use crate::error::{MathError, Result};

/// Basis-point denominator used by every fee parameter (100%).
pub const MAX_BPS: U256 = U256::from_limbs([10_000, 0, 0, 0]);

/// Seconds per year used by the management fee (365.2425 days).
pub const SECONDS_PER_YEAR: U256 = U256::from_limbs([31_556_952, 0, 0, 0]);

/// Default tolerance for approximate comparisons, in native units.
///
/// Each chained conversion floors once, so a single unit of drift is expected.
pub const DEFAULT_TOLERANCE: U256 = U256::from_limbs([1, 0, 0, 0]);

/// Largest decimals value whose power of ten still fits in a `U256`.
pub const MAX_VAULT_DECIMALS: u8 = 77;

/// Computes `x * y / denominator`, rounding down.
pub fn mul_div_down(
    x: U256,
    y: U256,
    denominator: U256,
    operation: &'static str,
) -> Result<U256> {
    if denominator.is_zero() {
        return Err(MathError::DivisionByZero { operation });
    }
    let product = x
        .checked_mul(y)
        .ok_or(MathError::Overflow { operation })?;
    Ok(product / denominator)
}

/// Returns `10^decimals`, the unit price-per-full-share is expressed in.
pub fn decimals_scale(decimals: u8) -> Result<U256> {
    if decimals > MAX_VAULT_DECIMALS {
        return Err(MathError::InvalidDecimals(U256::from(decimals)));
    }
    Ok(U256::from(10u64).pow(U256::from(decimals)))
}

/// Narrows a decimals value read from a snapshot.
pub fn decimals_from_u256(value: U256) -> Result<u8> {
    if value > U256::from(MAX_VAULT_DECIMALS) {
        return Err(MathError::InvalidDecimals(value));
    }
    Ok(value.as_limbs()[0] as u8)
}

/// Absolute difference between two unsigned values.
pub fn abs_diff(a: U256, b: U256) -> U256 {
    if a > b {
        a - b
    } else {
        b - a
    }
}

/// Returns true when `|a - b| <= epsilon`.
pub fn approx_eq(a: U256, b: U256, epsilon: U256) -> bool {
    abs_diff(a, b) <= epsilon
}
