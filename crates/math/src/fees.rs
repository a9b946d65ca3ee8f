//! Withdrawal, performance and management fee accounting.
//!
//! Fees are charged in want and paid out by minting vault shares to the
//! treasury and the strategist. At harvest three fees are minted against a
//! pool whose size and supply shift with every mint, so [`report_fees`]
//! replays them in the exact order the vault does:
//!
//! 1. performance fee for the treasury (governance)
//! 2. management fee, also for the treasury
//! 3. performance fee for the strategist
//!
//! # Example
//!
//! ```rust
//! use sett_rs_math::{report_fees, HarvestFeeInputs};
//! use alloy_primitives::U256;
//!
//! let report = report_fees(&HarvestFeeInputs {
//!     total_gain: U256::from(100_000),
//!     performance_fee_treasury: U256::from(1_000),
//!     performance_fee_strategist: U256::from(1_000),
//!     management_fee: U256::ZERO,
//!     seconds_elapsed: U256::ZERO,
//!     total_supply_before: U256::from(1_000_000),
//!     balance_before: U256::from(1_000_000),
//! })
//! .unwrap();
//!
//! assert_eq!(report.treasury_shares(), report.shares_perf_treasury);
//! assert!(report.shares_perf_strategist > U256::ZERO);
//! ```

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::error::{MathError, Result};
use crate::math::{mul_div_down, MAX_BPS, SECONDS_PER_YEAR};
use crate::shares::{shares_to_want, want_to_shares};

/// Withdrawal fee, in want, charged on burning `shares`.
pub fn withdrawal_fee_in_want(
    shares: U256,
    price_per_full_share: U256,
    vault_decimals: u8,
    withdrawal_fee_bps: U256,
) -> Result<U256> {
    let value = shares_to_want(shares, price_per_full_share, vault_decimals)?;
    mul_div_down(value, withdrawal_fee_bps, MAX_BPS, "withdrawal_fee_in_want")
}

/// Shares minted to the treasury for the withdrawal fee on burning `shares`.
///
/// The fee is treated as a fresh deposit at the pre-withdrawal rate.
pub fn withdrawal_fee_in_shares(
    shares: U256,
    price_per_full_share: U256,
    vault_decimals: u8,
    withdrawal_fee_bps: U256,
    total_supply_before: U256,
    vault_balance_before: U256,
) -> Result<U256> {
    let fee_in_want = withdrawal_fee_in_want(
        shares,
        price_per_full_share,
        vault_decimals,
        withdrawal_fee_bps,
    )?;
    want_to_shares(fee_in_want, total_supply_before, vault_balance_before)
}

/// Performance fee, in want, taken from a harvested gain.
pub fn performance_fee_in_want(gain: U256, performance_fee_bps: U256) -> Result<U256> {
    mul_div_down(gain, performance_fee_bps, MAX_BPS, "performance_fee_in_want")
}

/// Management fee, in want, accrued on `total_assets` over `seconds_elapsed`.
///
/// Divides by [`SECONDS_PER_YEAR`] and then by [`MAX_BPS`], flooring at each
/// step like the contract.
pub fn management_fee_in_want(
    total_assets: U256,
    seconds_elapsed: U256,
    management_fee_bps: U256,
) -> Result<U256> {
    let operation = "management_fee_in_want";
    let scaled = management_fee_bps
        .checked_mul(total_assets)
        .ok_or(MathError::Overflow { operation })?;
    let per_year = mul_div_down(scaled, seconds_elapsed, SECONDS_PER_YEAR, operation)?;
    Ok(per_year / MAX_BPS)
}

/// Vault state and fee settings a harvest report is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HarvestFeeInputs {
    /// Want gained by the vault over the harvest.
    pub total_gain: U256,
    /// Treasury performance fee, in bps.
    pub performance_fee_treasury: U256,
    /// Strategist performance fee, in bps.
    pub performance_fee_strategist: U256,
    /// Annualised management fee, in bps.
    pub management_fee: U256,
    /// Seconds since the previous harvest.
    pub seconds_elapsed: U256,
    /// Vault share supply before the harvest.
    pub total_supply_before: U256,
    /// Vault balance (total want) before the harvest.
    pub balance_before: U256,
}

/// Shares minted by a harvest report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FeeReport {
    /// Treasury shares for the performance fee.
    pub shares_perf_treasury: U256,
    /// Treasury shares for the management fee.
    pub shares_management: U256,
    /// Strategist shares for the performance fee.
    pub shares_perf_strategist: U256,
}

impl FeeReport {
    /// All shares the treasury receives from the report.
    pub fn treasury_shares(&self) -> U256 {
        self.shares_perf_treasury + self.shares_management
    }

    /// All shares minted by the report.
    pub fn total_shares(&self) -> U256 {
        self.treasury_shares() + self.shares_perf_strategist
    }
}

/// Running pool/supply state while fee shares are minted one after another.
struct FeeMint {
    supply: U256,
    pool: U256,
}

impl FeeMint {
    /// Mints shares for `fee_in_want` at the current rate, then folds both
    /// the shares and the fee back into the running state.
    fn mint(&mut self, fee_in_want: U256) -> Result<U256> {
        if fee_in_want.is_zero() {
            return Ok(U256::ZERO);
        }
        let shares = want_to_shares(fee_in_want, self.supply, self.pool)?;
        self.supply += shares;
        self.pool += fee_in_want;
        Ok(shares)
    }
}

/// Computes the shares a harvest report mints for each fee.
///
/// All three want fees are taken against the pre-harvest balance. The pool
/// starts at `balance + gain` net of all three fees; each fee is then minted
/// at the current rate and added back before the next one. The order
/// treasury, management, strategist is fixed.
///
/// A zero gain yields an empty report.
pub fn report_fees(inputs: &HarvestFeeInputs) -> Result<FeeReport> {
    if inputs.total_gain.is_zero() {
        return Ok(FeeReport::default());
    }

    let fee_treasury = performance_fee_in_want(inputs.total_gain, inputs.performance_fee_treasury)?;
    let fee_management = management_fee_in_want(
        inputs.balance_before,
        inputs.seconds_elapsed,
        inputs.management_fee,
    )?;
    let fee_strategist =
        performance_fee_in_want(inputs.total_gain, inputs.performance_fee_strategist)?;

    let balance = inputs.balance_before + inputs.total_gain;
    let fees = fee_treasury + fee_management + fee_strategist;
    let pool = balance
        .checked_sub(fees)
        .ok_or(MathError::Underflow { operation: "report_fees" })?;

    let mut mint = FeeMint {
        supply: inputs.total_supply_before,
        pool,
    };
    let shares_perf_treasury = mint.mint(fee_treasury)?;
    let shares_management = mint.mint(fee_management)?;
    let shares_perf_strategist = mint.mint(fee_strategist)?;

    Ok(FeeReport {
        shares_perf_treasury,
        shares_management,
        shares_perf_strategist,
    })
}

/// Legacy single-fee estimator.
///
/// Assumes the performance fee is split 50/50 between treasury and strategist
/// and ignores the management fee. Superseded by [`report_fees`]; kept only
/// to compare old expectations against the sequential model.
pub fn legacy_performance_fee_shares(
    total_gain: U256,
    performance_fee_bps: U256,
    total_supply_before: U256,
    balance_before: U256,
) -> Result<U256> {
    let fee_in_want = performance_fee_in_want(total_gain, performance_fee_bps)?;
    let balance_at_harvest = (balance_before + total_gain)
        .checked_sub(fee_in_want * U256::from(2))
        .ok_or(MathError::Underflow {
            operation: "legacy_performance_fee_shares",
        })?;
    want_to_shares(fee_in_want, total_supply_before, balance_at_harvest)
}

/// Fee settings of a deployed sett, in bps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSchedule {
    pub performance_fee_governance: U256,
    pub performance_fee_strategist: U256,
    pub withdrawal_fee: U256,
    pub management_fee: U256,
}

impl Default for FeeSchedule {
    /// 10% / 10% performance, 0.1% withdrawal, 2% management.
    fn default() -> Self {
        Self {
            performance_fee_governance: U256::from(1_000),
            performance_fee_strategist: U256::from(1_000),
            withdrawal_fee: U256::from(10),
            management_fee: U256::from(200),
        }
    }
}
