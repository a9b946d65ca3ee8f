//! Conversions between want (the deposit token) and vault shares.
//!
//! A sett mints shares proportionally to the pool it tracks:
//!
//! ```text
//! shares = want * total_supply / balance
//! want   = shares * price_per_full_share / 10^decimals
//! ```
//!
//! Both directions floor, matching the contract.
//!
//! # Example
//!
//! ```rust
//! use sett_rs_math::{shares_to_want, want_to_shares, ShareConversion};
//! use alloy_primitives::U256;
//!
//! let shares = want_to_shares(
//!     U256::from(500_000),
//!     U256::from(1_000_000),
//!     U256::from(1_000_000),
//! )
//! .unwrap();
//! assert_eq!(shares, U256::from(500_000));
//!
//! let rate = ShareConversion::new(U256::from(1_100_000_000_000_000_000u64), 18);
//! assert_eq!(rate.to_want(U256::from(100_000)).unwrap(), U256::from(110_000));
//! ```

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::math::{decimals_scale, mul_div_down};

/// Shares minted for a deposit of `want` against the pool before the deposit.
///
/// Fails with [`MathError::DivisionByZero`](crate::MathError::DivisionByZero)
/// when `balance_before` is zero; callers guard the empty-vault case.
pub fn want_to_shares(want: U256, total_supply_before: U256, balance_before: U256) -> Result<U256> {
    mul_div_down(want, total_supply_before, balance_before, "want_to_shares")
}

/// Want returned for burning `shares` at a price-per-full-share.
pub fn shares_to_want(shares: U256, price_per_full_share: U256, vault_decimals: u8) -> Result<U256> {
    mul_div_down(
        shares,
        price_per_full_share,
        decimals_scale(vault_decimals)?,
        "shares_to_want",
    )
}

/// The exchange rate a deposit or withdrawal recomputation is pinned to.
///
/// Always read from the snapshot taken before the action, since the action
/// itself can move the rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareConversion {
    /// Want per 10^decimals shares.
    pub price_per_full_share: U256,
    /// Decimals of the vault token.
    pub vault_decimals: u8,
}

impl ShareConversion {
    pub fn new(price_per_full_share: U256, vault_decimals: u8) -> Self {
        Self {
            price_per_full_share,
            vault_decimals,
        }
    }

    /// Want returned for burning `shares` at this rate.
    pub fn to_want(self, shares: U256) -> Result<U256> {
        shares_to_want(shares, self.price_per_full_share, self.vault_decimals)
    }
}
