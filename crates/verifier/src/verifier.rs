//! Per-action verification of sett and strategy state transitions.
//!
//! Each `verify_*` method recomputes what an action should have done from the
//! before snapshot, using the integer accounting in `sett-rs-math`, and checks
//! the after snapshot against it. Approximate checks accept the configured
//! tolerance (one unit by default) since every conversion floors.
//!
//! # Example
//!
//! ```rust
//! use sett_rs_snapshot::{entities, tokens, SettField, Snapshot, SnapshotPair};
//! use sett_rs_verifier::{ActionVerifier, BaseHooks, DepositParams};
//! use alloy_primitives::U256;
//!
//! let snapshot = |supply: u64, vault: u64, user_want: u64, user_shares: u64| {
//!     Snapshot::builder()
//!         .insert(SettField::TotalSupply, U256::from(supply))
//!         .insert(SettField::Balance, U256::from(vault))
//!         .balance(tokens::WANT, entities::SETT, U256::from(vault))
//!         .balance(tokens::WANT, entities::USER, U256::from(user_want))
//!         .balance(tokens::SETT, entities::USER, U256::from(user_shares))
//!         .build()
//! };
//!
//! let pair = SnapshotPair::new(
//!     snapshot(1_000_000, 1_000_000, 2_000_000, 0),
//!     snapshot(1_500_000, 1_500_000, 1_500_000, 500_000),
//! )
//! .unwrap();
//!
//! let verifier = ActionVerifier::new(BaseHooks);
//! verifier
//!     .verify_deposit(&pair, &DepositParams::new(U256::from(500_000)))
//!     .unwrap();
//! ```

use alloy_primitives::U256;
use sett_rs_math::{
    decimals_from_u256, mul_div_down, report_fees, want_to_shares, withdrawal_fee_in_shares,
    withdrawal_fee_in_want, FeeSchedule, HarvestFeeInputs, ShareConversion,
};
use sett_rs_snapshot::{
    entities, tokens, SettField, Snapshot, SnapshotPair, SnapshotSchema, StrategyField,
};
use tracing::{debug, info, warn};

use crate::checks::{ensure, ensure_approx, ensure_eq, increase};
use crate::config::VerifierConfig;
use crate::error::{Result, VerifyError};
use crate::hooks::StrategyHooks;
use crate::params::{Action, DepositParams, EarnParams, TxSummary, WithdrawParams};

/// Verifies vault actions against before/after snapshots.
#[derive(Debug, Clone)]
pub struct ActionVerifier<H> {
    hooks: H,
    config: VerifierConfig,
}

impl<H: StrategyHooks> ActionVerifier<H> {
    /// Create a verifier with the default configuration.
    pub fn new(hooks: H) -> Self {
        Self::with_config(hooks, VerifierConfig::default())
    }

    pub fn with_config(hooks: H, config: VerifierConfig) -> Self {
        Self { hooks, config }
    }

    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Every key the core checks and the strategy hooks read.
    pub fn schema(&self) -> SnapshotSchema {
        self.hooks.destinations().extend_schema(SnapshotSchema::core())
    }

    /// Dispatches to the verification of `action`.
    pub fn verify(&self, pair: &SnapshotPair, action: &Action, tx: Option<&TxSummary>) -> Result<()> {
        match action {
            Action::Deposit(params) => self.verify_deposit(pair, params),
            Action::Withdraw(params) => self.verify_withdraw(pair, params, tx),
            Action::Earn(params) => self.verify_earn(pair, params),
            Action::Harvest => self.verify_harvest(pair, tx),
            Action::Tend => self.verify_tend(pair, tx),
        }
    }

    /// Deposit should:
    /// - mint the expected shares (total supply and depositor balance)
    /// - move exactly `amount` want from the depositor to the sett
    pub fn verify_deposit(&self, pair: &SnapshotPair, params: &DepositParams) -> Result<()> {
        let (before, after) = (pair.before(), pair.after());
        let tolerance = self.config.tolerance;
        let amount = params.amount;

        let supply_before = before.sett(SettField::TotalSupply)?;
        let expected_shares = match params.expected_shares {
            Some(shares) => shares,
            // First deposit mints 1:1; there is no rate to divide by.
            None if supply_before.is_zero() => amount,
            None => want_to_shares(amount, supply_before, before.sett(SettField::Balance)?)?,
        };
        debug!(%amount, %expected_shares, strategy = self.hooks.name(), "verifying deposit");

        ensure_approx(
            "deposit: total supply",
            after.sett(SettField::TotalSupply)?,
            supply_before + expected_shares,
            tolerance,
        )?;
        ensure_eq(
            "deposit: sett want balance",
            after.balances(tokens::WANT, entities::SETT)?,
            before.balances(tokens::WANT, entities::SETT)? + amount,
        )?;
        ensure_eq(
            "deposit: depositor want balance",
            after.balances(tokens::WANT, entities::USER)? + amount,
            before.balances(tokens::WANT, entities::USER)?,
        )?;
        ensure_approx(
            "deposit: depositor shares",
            after.balances(tokens::SETT, entities::USER)?,
            before.balances(tokens::SETT, entities::USER)? + expected_shares,
            tolerance,
        )?;

        self.hooks.after_deposit(pair, params)?;
        info!(%amount, %expected_shares, "deposit verified");
        Ok(())
    }

    /// Withdraw should:
    /// - burn `amount` shares from the user
    /// - pull any shortfall over the sett's idle want from the strategy
    /// - mint withdrawal-fee shares to the treasury
    /// - pay the user the redeemed want net of the fee
    pub fn verify_withdraw(
        &self,
        pair: &SnapshotPair,
        params: &WithdrawParams,
        tx: Option<&TxSummary>,
    ) -> Result<()> {
        let (before, after) = (pair.before(), pair.after());
        let tolerance = self.config.tolerance;
        let shares_to_burn = params.amount;

        if shares_to_burn.is_zero() {
            // withdraw(0) reverts on the ledger; if it went through nothing may move.
            warn!("zero-amount withdrawal did not revert");
            ensure_eq(
                "withdraw(0): total supply",
                after.sett(SettField::TotalSupply)?,
                before.sett(SettField::TotalSupply)?,
            )?;
            ensure_eq(
                "withdraw(0): user shares",
                after.balances(tokens::SETT, entities::USER)?,
                before.balances(tokens::SETT, entities::USER)?,
            )?;
            return Ok(());
        }

        let rate = share_conversion(before)?;
        let supply_before = before.sett(SettField::TotalSupply)?;
        let balance_before = before.sett(SettField::Balance)?;
        let expected_want = rate.to_want(shares_to_burn)?;
        debug!(
            %shares_to_burn,
            %expected_want,
            ppfs = %rate.price_per_full_share,
            tx = ?tx.and_then(|tx| tx.hash),
            "verifying withdraw"
        );

        let fee_bps = before.sett(SettField::WithdrawalFee)?;
        let (fee_in_want, fee_shares_minted) = if fee_bps.is_zero() {
            (U256::ZERO, U256::ZERO)
        } else {
            let fee_shares = withdrawal_fee_in_shares(
                shares_to_burn,
                rate.price_per_full_share,
                rate.vault_decimals,
                fee_bps,
                supply_before,
                balance_before,
            )?;
            let fee_in_want = withdrawal_fee_in_want(
                shares_to_burn,
                rate.price_per_full_share,
                rate.vault_decimals,
                fee_bps,
            )?;
            ensure(
                "withdraw: withdrawal fee",
                !fee_shares.is_zero() && !fee_in_want.is_zero(),
                || format!("fee of {fee_bps} bps rounds to {fee_in_want} want / {fee_shares} shares"),
            )?;

            // The fee is deposited back after the burn, against the post-burn supply.
            let supply_after_burn =
                supply_before
                    .checked_sub(shares_to_burn)
                    .ok_or_else(|| VerifyError::Violation {
                        check: "withdraw: burn".to_string(),
                        detail: format!("burning {shares_to_burn} of {supply_before} shares"),
                    })?;
            let pool_after = after
                .sett(SettField::Balance)?
                .checked_sub(fee_in_want)
                .ok_or_else(|| VerifyError::Violation {
                    check: "withdraw: fee pool".to_string(),
                    detail: format!("sett balance after is below the {fee_in_want} want fee"),
                })?;
            let minted = if supply_after_burn.is_zero() {
                // Last holder out: the fee is the first deposit into an empty sett.
                fee_in_want
            } else {
                mul_div_down(fee_in_want, supply_after_burn, pool_after, "withdrawal fee mint")?
            };
            (fee_in_want, minted)
        };

        // 1. burn; the fee shares are minted in the same call, so they count here
        ensure_approx(
            "withdraw: total supply",
            after.sett(SettField::TotalSupply)? + shares_to_burn,
            supply_before + fee_shares_minted,
            tolerance,
        )?;
        ensure_approx(
            "withdraw: user shares",
            after.balances(tokens::SETT, entities::USER)? + shares_to_burn,
            before.balances(tokens::SETT, entities::USER)?,
            tolerance,
        )?;

        // 2. strategy covers what the sett cannot pay from idle want
        let idle_before = before.balances(tokens::WANT, entities::SETT)?;
        if expected_want > idle_before {
            let required_from_strategy = expected_want - idle_before;
            let strategy_before = before.strategy(StrategyField::BalanceOf)?;
            ensure(
                "withdraw: strategy liquidity",
                required_from_strategy <= strategy_before,
                || format!("needs {required_from_strategy} want, strategy holds {strategy_before}"),
            )?;
            ensure_approx(
                "withdraw: strategy balance",
                after.strategy(StrategyField::BalanceOf)? + required_from_strategy,
                strategy_before,
                tolerance,
            )?;
        }

        // 3. fee shares
        let treasury_increase = increase(
            "withdraw: treasury shares",
            before.balances(tokens::SETT, entities::TREASURY)?,
            after.balances(tokens::SETT, entities::TREASURY)?,
        )?;
        ensure_approx(
            "withdraw: treasury fee shares",
            treasury_increase,
            fee_shares_minted,
            tolerance,
        )?;

        // 4. user is paid, sett balance shrinks by the same
        let paid_out = expected_want
            .checked_sub(fee_in_want)
            .ok_or_else(|| VerifyError::Violation {
                check: "withdraw: withdrawal fee".to_string(),
                detail: format!("fee {fee_in_want} exceeds redeemed {expected_want}"),
            })?;
        ensure_approx(
            "withdraw: user want balance",
            after.balances(tokens::WANT, entities::USER)?,
            before.balances(tokens::WANT, entities::USER)? + paid_out,
            tolerance,
        )?;
        ensure_approx(
            "withdraw: sett balance",
            after.sett(SettField::Balance)? + paid_out,
            balance_before,
            tolerance,
        )?;

        self.hooks.after_withdraw(pair, params)?;
        info!(%shares_to_burn, %paid_out, %fee_in_want, "withdraw verified");
        Ok(())
    }

    /// Earn should:
    /// - move idle want out of the sett into the strategy
    /// - leave the strategy either fully deployed or fully idle, never split
    /// - grow the strategy's reported balance
    /// - leave depositors' want untouched
    pub fn verify_earn(&self, pair: &SnapshotPair, params: &EarnParams) -> Result<()> {
        let (before, after) = (pair.before(), pair.after());

        // `available()` takes a percentage of idle want, which floors to
        // nothing at a balance of one unit.
        let idle_before = before.balances(tokens::WANT, entities::SETT)?;
        if idle_before <= U256::from(1) {
            debug!(%idle_before, "nothing available to earn, skipping");
            return Ok(());
        }

        let idle_after = after.balances(tokens::WANT, entities::SETT)?;
        ensure("earn: sett want balance", idle_after <= idle_before, || {
            format!("increased from {idle_before} to {idle_after}")
        })?;

        let want_before = before.strategy(StrategyField::BalanceOfWant)?;
        let want_after = after.strategy(StrategyField::BalanceOfWant)?;
        let pool_before = before.strategy(StrategyField::BalanceOfPool)?;
        let pool_after = after.strategy(StrategyField::BalanceOfPool)?;
        let fully_deployed = want_after.is_zero() && pool_after > pool_before;
        let fully_idle = want_after > want_before && pool_after.is_zero();
        ensure(
            "earn: capital allocation",
            fully_deployed ^ fully_idle,
            || {
                format!(
                    "strategy want {want_before} -> {want_after}, pool {pool_before} -> {pool_after}; \
                     capital must be fully deployed or fully idle"
                )
            },
        )?;

        let strategy_before = before.strategy(StrategyField::BalanceOf)?;
        let strategy_after = after.strategy(StrategyField::BalanceOf)?;
        ensure(
            "earn: strategy balance",
            strategy_after > strategy_before,
            || format!("did not increase ({strategy_before} -> {strategy_after})"),
        )?;

        for depositor in &params.depositors {
            ensure_eq(
                &format!("earn: {depositor} want balance"),
                after.balances(tokens::WANT, depositor)?,
                before.balances(tokens::WANT, depositor)?,
            )?;
        }

        self.hooks.after_earn(pair, params)?;
        info!(
            moved = %(idle_before - idle_after),
            deployed = fully_deployed,
            "earn verified"
        );
        Ok(())
    }

    /// Harvest should mint performance and management fee shares to the
    /// treasury and strategist exactly as the sequential fee report predicts.
    pub fn verify_harvest(&self, pair: &SnapshotPair, tx: Option<&TxSummary>) -> Result<()> {
        let (before, after) = (pair.before(), pair.after());
        let tolerance = self.config.tolerance;

        let balance_before = before.sett(SettField::Balance)?;
        let balance_after = after.sett(SettField::Balance)?;
        if balance_after < balance_before {
            warn!(%balance_before, %balance_after, "harvest reported a loss, treating gain as zero");
        }
        let total_gain = balance_after.saturating_sub(balance_before);

        let value_gained = after.sett(SettField::PricePerFullShare)?
            > before.sett(SettField::PricePerFullShare)?;
        let performance_fee_strategist = before.sett(SettField::PerformanceFeeStrategist)?;
        let performance_fee_treasury = before.sett(SettField::PerformanceFeeGovernance)?;

        let strategist_before = before.balances(tokens::SETT, entities::STRATEGIST)?;
        let strategist_after = after.balances(tokens::SETT, entities::STRATEGIST)?;
        let treasury_before = before.balances(tokens::SETT, entities::TREASURY)?;
        let treasury_after = after.balances(tokens::SETT, entities::TREASURY)?;

        if value_gained && !performance_fee_strategist.is_zero() {
            ensure(
                "harvest: strategist earns",
                strategist_after > strategist_before,
                || format!("price per share rose but strategist shares stayed at {strategist_before}"),
            )?;
        }
        if value_gained && !performance_fee_treasury.is_zero() {
            ensure(
                "harvest: treasury earns",
                treasury_after > treasury_before,
                || format!("price per share rose but treasury shares stayed at {treasury_before}"),
            )?;
        }

        let last_before = before.sett(SettField::LastHarvestedAt)?;
        let last_after = after.sett(SettField::LastHarvestedAt)?;
        let seconds_elapsed = increase("harvest: lastHarvestedAt", last_before, last_after)?;

        let report = report_fees(&HarvestFeeInputs {
            total_gain,
            performance_fee_treasury,
            performance_fee_strategist,
            management_fee: before.sett(SettField::ManagementFee)?,
            seconds_elapsed,
            total_supply_before: before.sett(SettField::TotalSupply)?,
            balance_before,
        })?;
        debug!(
            %total_gain,
            %seconds_elapsed,
            perf_treasury = %report.shares_perf_treasury,
            management = %report.shares_management,
            perf_strategist = %report.shares_perf_strategist,
            tx = ?tx.and_then(|tx| tx.hash),
            "expected harvest fees"
        );

        let strategist_delta = increase("harvest: strategist shares", strategist_before, strategist_after)?;
        ensure_approx(
            "harvest: strategist performance fee shares",
            strategist_delta,
            report.shares_perf_strategist,
            tolerance,
        )?;
        let treasury_delta = increase("harvest: treasury shares", treasury_before, treasury_after)?;
        ensure_approx(
            "harvest: treasury fee shares",
            treasury_delta,
            report.treasury_shares(),
            tolerance,
        )?;

        self.hooks.after_harvest(pair, tx)?;
        info!(%total_gain, minted = %report.total_shares(), "harvest verified");
        Ok(())
    }

    /// Tend is entirely strategy-specific; see [`StrategyHooks::confirm_tend`].
    pub fn verify_tend(&self, pair: &SnapshotPair, tx: Option<&TxSummary>) -> Result<()> {
        debug!(strategy = self.hooks.name(), "verifying tend");
        self.hooks.confirm_tend(pair, tx)?;
        info!("tend verified");
        Ok(())
    }

    /// The fee settings recorded in `snapshot` match `expected`.
    pub fn verify_fee_schedule(&self, snapshot: &Snapshot, expected: &FeeSchedule) -> Result<()> {
        ensure_eq(
            "fees: performanceFeeGovernance",
            snapshot.sett(SettField::PerformanceFeeGovernance)?,
            expected.performance_fee_governance,
        )?;
        ensure_eq(
            "fees: performanceFeeStrategist",
            snapshot.sett(SettField::PerformanceFeeStrategist)?,
            expected.performance_fee_strategist,
        )?;
        ensure_eq(
            "fees: withdrawalFee",
            snapshot.sett(SettField::WithdrawalFee)?,
            expected.withdrawal_fee,
        )?;
        ensure_eq(
            "fees: managementFee",
            snapshot.sett(SettField::ManagementFee)?,
            expected.management_fee,
        )
    }
}

/// Rate a withdrawal is pinned to, read from the before snapshot.
fn share_conversion(before: &Snapshot) -> Result<ShareConversion> {
    Ok(ShareConversion::new(
        before.sett(SettField::PricePerFullShare)?,
        decimals_from_u256(before.sett(SettField::Decimals)?)?,
    ))
}
