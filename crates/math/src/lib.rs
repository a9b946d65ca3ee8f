//! Sett Vault Accounting
//!
//! Integer-exact recomputation of the share and fee bookkeeping performed by
//! a sett vault: deposits, withdrawals (with withdrawal fee) and harvest
//! reports (performance and management fees).
//!
//! Everything here is a pure function over [`U256`](alloy_primitives::U256)
//! values and floors exactly like the contract's `uint256` arithmetic, so
//! results can be compared against on-chain state unit for unit.
//!
//! # Example
//!
//! ```rust
//! use sett_rs_math::{report_fees, want_to_shares, HarvestFeeInputs, SECONDS_PER_YEAR};
//! use alloy_primitives::U256;
//!
//! let shares = want_to_shares(U256::from(500), U256::from(1_000), U256::from(1_000)).unwrap();
//! assert_eq!(shares, U256::from(500));
//!
//! let report = report_fees(&HarvestFeeInputs {
//!     total_gain: U256::from(1_000_000),
//!     performance_fee_treasury: U256::from(2_000),
//!     performance_fee_strategist: U256::from(2_000),
//!     management_fee: U256::from(200),
//!     seconds_elapsed: SECONDS_PER_YEAR,
//!     total_supply_before: U256::from(1_000_000),
//!     balance_before: U256::from(1_000_000),
//! })
//! .unwrap();
//! assert_eq!(report.treasury_shares(), U256::from(139_240));
//! ```

pub mod error;
pub mod fees;
pub mod math;
pub mod shares;

pub use error::{MathError, Result};

// Fee exports
pub use fees::{
    legacy_performance_fee_shares, management_fee_in_want, performance_fee_in_want,
    report_fees, withdrawal_fee_in_shares, withdrawal_fee_in_want, FeeReport, FeeSchedule,
    HarvestFeeInputs,
};

// Math exports
pub use math::{
    abs_diff, approx_eq, decimals_from_u256, decimals_scale, mul_div_down, DEFAULT_TOLERANCE,
    MAX_BPS, MAX_VAULT_DECIMALS, SECONDS_PER_YEAR,
};

// Share exports
pub use shares::{shares_to_want, want_to_shares, ShareConversion};
