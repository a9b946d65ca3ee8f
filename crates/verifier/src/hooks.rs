//! Strategy-specific extension points.
//!
//! The core verifier only knows about the sett and the strategy's reported
//! balances. Where the strategy puts capital (staking trackers, vesting
//! contracts, reward tokens) is specific to each integration, which plugs in
//! through [`StrategyHooks`].
//!
//! Deposit and withdraw hooks pass by default. Earn, harvest and tend checks
//! depend on the external yield mechanism, so their defaults fail with
//! [`VerifyError::UnimplementedHook`] until an integration overrides them.

use std::collections::{BTreeMap, BTreeSet};

use sett_rs_snapshot::{SnapshotKey, SnapshotPair, SnapshotSchema};

use crate::error::{Result, VerifyError};
use crate::params::{DepositParams, EarnParams, TxSummary, WithdrawParams};

/// A token balance held by an entity.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Destination {
    pub token: String,
    pub entity: String,
}

impl Destination {
    pub fn new(token: impl Into<String>, entity: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            entity: entity.into(),
        }
    }

    pub fn key(&self) -> SnapshotKey {
        SnapshotKey::balance(self.token.as_str(), self.entity.as_str())
    }
}

/// Balance locations a strategy wants collected, by semantic name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StrategyDestinations {
    locations: BTreeMap<String, Destination>,
    extra_keys: BTreeSet<SnapshotKey>,
}

impl StrategyDestinations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track `token.balanceOf(entity)` under `name`.
    pub fn with_balance(
        mut self,
        name: impl Into<String>,
        token: impl Into<String>,
        entity: impl Into<String>,
    ) -> Self {
        self.locations
            .insert(name.into(), Destination::new(token, entity));
        self
    }

    /// Track a figure outside the `balances.*` scheme.
    pub fn with_key(mut self, key: impl Into<SnapshotKey>) -> Self {
        self.extra_keys.insert(key.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&Destination> {
        self.locations.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Destination)> {
        self.locations
            .iter()
            .map(|(name, destination)| (name.as_str(), destination))
    }

    pub fn extra_keys(&self) -> impl Iterator<Item = &SnapshotKey> {
        self.extra_keys.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty() && self.extra_keys.is_empty()
    }

    /// Adds every tracked token, holder and extra key to `schema`.
    pub fn extend_schema(&self, schema: SnapshotSchema) -> SnapshotSchema {
        let schema = self.locations.values().fold(schema, |schema, destination| {
            schema
                .with_token(destination.token.as_str())
                .with_entity(destination.entity.as_str())
        });
        self.extra_keys
            .iter()
            .fold(schema, |schema, key| schema.with_key(key.clone()))
    }
}

/// Strategy-specific checks run after the core checks of each action.
pub trait StrategyHooks {
    /// Name used in logs and errors.
    fn name(&self) -> &str;

    /// Balance locations the strategy needs collected.
    fn destinations(&self) -> StrategyDestinations {
        StrategyDestinations::new()
    }

    fn after_deposit(&self, _pair: &SnapshotPair, _params: &DepositParams) -> Result<()> {
        Ok(())
    }

    fn after_withdraw(&self, _pair: &SnapshotPair, _params: &WithdrawParams) -> Result<()> {
        Ok(())
    }

    /// Strategy bookkeeping after capital moves from the sett into the
    /// strategy (e.g. staking trackers moving in lockstep).
    fn after_earn(&self, _pair: &SnapshotPair, _params: &EarnParams) -> Result<()> {
        Err(self.unimplemented("after_earn"))
    }

    /// Strategy bookkeeping after a harvest (e.g. reward balances).
    fn after_harvest(&self, _pair: &SnapshotPair, _tx: Option<&TxSummary>) -> Result<()> {
        Err(self.unimplemented("after_harvest"))
    }

    /// Full verification of a tend. There is no universal tend behaviour.
    fn confirm_tend(&self, _pair: &SnapshotPair, _tx: Option<&TxSummary>) -> Result<()> {
        Err(self.unimplemented("confirm_tend"))
    }

    fn unimplemented(&self, hook: &'static str) -> VerifyError {
        VerifyError::UnimplementedHook {
            strategy: self.name().to_string(),
            hook,
        }
    }
}

/// Hooks with nothing strategy-specific; earn, harvest and tend fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseHooks;

impl StrategyHooks for BaseHooks {
    fn name(&self) -> &str {
        "base"
    }
}

impl<H: StrategyHooks + ?Sized> StrategyHooks for Box<H> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn destinations(&self) -> StrategyDestinations {
        (**self).destinations()
    }

    fn after_deposit(&self, pair: &SnapshotPair, params: &DepositParams) -> Result<()> {
        (**self).after_deposit(pair, params)
    }

    fn after_withdraw(&self, pair: &SnapshotPair, params: &WithdrawParams) -> Result<()> {
        (**self).after_withdraw(pair, params)
    }

    fn after_earn(&self, pair: &SnapshotPair, params: &EarnParams) -> Result<()> {
        (**self).after_earn(pair, params)
    }

    fn after_harvest(&self, pair: &SnapshotPair, tx: Option<&TxSummary>) -> Result<()> {
        (**self).after_harvest(pair, tx)
    }

    fn confirm_tend(&self, pair: &SnapshotPair, tx: Option<&TxSummary>) -> Result<()> {
        (**self).confirm_tend(pair, tx)
    }
}
