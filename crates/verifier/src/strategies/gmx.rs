//! Hooks for a GMX staking strategy.
//!
//! The strategy stakes its want (GMX) through the staked and fee reward
//! trackers, collects WETH and esGMX on harvest, and on tend vests esGMX and
//! re-stakes idle GMX.

use alloy_primitives::U256;
use sett_rs_math::DEFAULT_TOLERANCE;
use sett_rs_snapshot::{entities, tokens, Snapshot, SnapshotKey, SnapshotPair};
use tracing::debug;

use crate::checks::{decrease, ensure, ensure_approx, ensure_eq, increase};
use crate::error::Result;
use crate::hooks::{StrategyDestinations, StrategyHooks};
use crate::params::{EarnParams, TxSummary};

pub const ESGMX: &str = "esgmx";
pub const STAKED_GMX_TRACKER: &str = "stakedGmxTracker";
pub const FEE_GMX_TRACKER: &str = "feeGmxTracker";
pub const GMX_VESTER: &str = "GmxVester";
pub const WETH: &str = "weth";

/// Staked amount the staked-GMX tracker records for the strategy.
pub const SG_TRACKER_DEPOSIT: &str = "depositBalances.sgTracker";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GmxStakingHooks {
    tolerance: U256,
}

impl Default for GmxStakingHooks {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl GmxStakingHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tolerance(mut self, tolerance: U256) -> Self {
        self.tolerance = tolerance;
        self
    }
}

fn strategy_balance(snapshot: &Snapshot, token: &str) -> Result<U256> {
    Ok(snapshot.balances(token, entities::STRATEGY)?)
}

fn sg_tracker_deposit(snapshot: &Snapshot) -> Result<U256> {
    Ok(snapshot.get(SnapshotKey::Extra(SG_TRACKER_DEPOSIT.to_string()))?)
}

impl StrategyHooks for GmxStakingHooks {
    fn name(&self) -> &str {
        "gmx"
    }

    fn destinations(&self) -> StrategyDestinations {
        [ESGMX, STAKED_GMX_TRACKER, FEE_GMX_TRACKER, GMX_VESTER, WETH]
            .into_iter()
            .fold(StrategyDestinations::new(), |destinations, token| {
                destinations.with_balance(token, token, entities::STRATEGY)
            })
            .with_key(SnapshotKey::Extra(SG_TRACKER_DEPOSIT.to_string()))
    }

    /// Everything the sett released is staked, and both trackers agree.
    fn after_earn(&self, pair: &SnapshotPair, _params: &EarnParams) -> Result<()> {
        let (before, after) = (pair.before(), pair.after());

        let fee_tracker_before = strategy_balance(before, FEE_GMX_TRACKER)?;
        let fee_tracker_after = strategy_balance(after, FEE_GMX_TRACKER)?;
        ensure(
            "gmx earn: fee tracker stake",
            fee_tracker_after > fee_tracker_before,
            || format!("did not increase ({fee_tracker_before} -> {fee_tracker_after})"),
        )?;
        let staked = fee_tracker_after - fee_tracker_before;

        let released = decrease(
            "gmx earn: sett want balance",
            before.balances(tokens::WANT, entities::SETT)?,
            after.balances(tokens::WANT, entities::SETT)?,
        )?;
        ensure_eq("gmx earn: staked equals released", staked, released)?;

        let deposited = increase(
            "gmx earn: staked tracker deposit",
            sg_tracker_deposit(before)?,
            sg_tracker_deposit(after)?,
        )?;
        ensure_eq("gmx earn: staked tracker matches fee tracker", deposited, staked)?;

        debug!(%staked, "gmx earn hooks passed");
        Ok(())
    }

    /// Rewards only ever accrue.
    fn after_harvest(&self, pair: &SnapshotPair, _tx: Option<&TxSummary>) -> Result<()> {
        for (check, token) in [
            ("gmx harvest: weth rewards", WETH),
            ("gmx harvest: esgmx rewards", ESGMX),
            ("gmx harvest: gmx rewards", tokens::WANT),
        ] {
            increase(
                check,
                strategy_balance(pair.before(), token)?,
                strategy_balance(pair.after(), token)?,
            )?;
        }
        Ok(())
    }

    /// Tend vests all esGMX and stakes idle GMX. When something was vested,
    /// part of the fee-tracker stake may have been reserved by the vester, so
    /// only an upper bound holds.
    fn confirm_tend(&self, pair: &SnapshotPair, _tx: Option<&TxSummary>) -> Result<()> {
        let (before, after) = (pair.before(), pair.after());

        let vested = decrease(
            "gmx tend: esgmx balance",
            strategy_balance(before, ESGMX)?,
            strategy_balance(after, ESGMX)?,
        )?;
        let vester_change = increase(
            "gmx tend: vester balance",
            strategy_balance(before, GMX_VESTER)?,
            strategy_balance(after, GMX_VESTER)?,
        )?;
        ensure_approx("gmx tend: vested esgmx", vested, vester_change, self.tolerance)?;
        ensure_approx(
            "gmx tend: esgmx vested",
            strategy_balance(after, ESGMX)?,
            U256::ZERO,
            self.tolerance,
        )?;

        let gmx_staked = decrease(
            "gmx tend: want balance",
            strategy_balance(before, tokens::WANT)?,
            strategy_balance(after, tokens::WANT)?,
        )?;
        let fee_tracker_change = increase(
            "gmx tend: fee tracker stake",
            strategy_balance(before, FEE_GMX_TRACKER)?,
            strategy_balance(after, FEE_GMX_TRACKER)?,
        )?;

        if vester_change.is_zero() {
            ensure_approx(
                "gmx tend: staked gmx",
                gmx_staked,
                fee_tracker_change,
                self.tolerance,
            )?;
        } else {
            ensure(
                "gmx tend: staked gmx",
                gmx_staked >= fee_tracker_change,
                || format!("fee tracker grew by {fee_tracker_change}, only {gmx_staked} gmx left"),
            )?;
        }

        debug!(%vested, %gmx_staked, "gmx tend hooks passed");
        Ok(())
    }
}
