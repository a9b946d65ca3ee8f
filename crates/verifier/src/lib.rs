//! Sett Action Verifier
//!
//! Checks that a vault action (deposit, withdraw, earn, harvest, tend) moved
//! balances, shares and fees exactly as the vault's accounting says it should,
//! given snapshots taken immediately before and after it.
//!
//! # Overview
//!
//! - [`ActionVerifier`] - core checks per action, recomputed with `sett-rs-math`
//! - [`StrategyHooks`] - strategy-specific checks injected at construction
//! - [`GmxStakingHooks`] - hooks for the GMX staking strategy
//! - [`VerifierConfig`] - tolerance for approximate comparisons
//!
//! # Example
//!
//! ```rust,no_run
//! use sett_rs_snapshot::{Snapshot, SnapshotPair};
//! use sett_rs_verifier::{Action, ActionVerifier, GmxStakingHooks, VerifierConfig};
//! use alloy_primitives::U256;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pair = SnapshotPair::new(
//!         Snapshot::load("before.json")?,
//!         Snapshot::load("after.json")?,
//!     )?;
//!
//!     let verifier = ActionVerifier::with_config(
//!         GmxStakingHooks::new(),
//!         VerifierConfig::new().with_tolerance(U256::from(2)),
//!     );
//!     verifier.verify(&pair, &Action::Harvest, None)?;
//!     Ok(())
//! }
//! ```

pub mod checks;
pub mod config;
pub mod error;
pub mod hooks;
pub mod params;
pub mod strategies;
pub mod verifier;

pub use config::VerifierConfig;
pub use error::{Result, VerifyError};
pub use hooks::{BaseHooks, Destination, StrategyDestinations, StrategyHooks};
pub use params::{Action, DepositParams, EarnParams, TxSummary, WithdrawParams};
pub use strategies::GmxStakingHooks;
pub use verifier::ActionVerifier;
