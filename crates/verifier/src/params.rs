//! Inputs describing the action being verified.

use alloy_primitives::{B256, U256};
use serde::{Deserialize, Serialize};
use sett_rs_snapshot::entities;

/// Parameters of a `deposit(amount)` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DepositParams {
    /// Want deposited.
    pub amount: U256,
    /// Shares the caller already knows the deposit mints, overriding the
    /// recomputation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_shares: Option<U256>,
}

impl DepositParams {
    pub fn new(amount: U256) -> Self {
        Self {
            amount,
            expected_shares: None,
        }
    }

    pub fn with_expected_shares(mut self, shares: U256) -> Self {
        self.expected_shares = Some(shares);
        self
    }
}

/// Parameters of a `withdraw(shares)` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WithdrawParams {
    /// Shares burned.
    pub amount: U256,
}

impl WithdrawParams {
    pub fn new(amount: U256) -> Self {
        Self { amount }
    }
}

/// Parameters of an `earn()` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarnParams {
    /// Entities whose want balance must not move.
    pub depositors: Vec<String>,
}

impl Default for EarnParams {
    fn default() -> Self {
        Self {
            depositors: vec![entities::USER.to_string()],
        }
    }
}

/// What the driver observed about the transaction that performed an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TxSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<B256>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_number: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_used: Option<u64>,
}

/// A vault or strategy action together with its parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Action {
    Deposit(DepositParams),
    Withdraw(WithdrawParams),
    Earn(EarnParams),
    Harvest,
    Tend,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Deposit(_) => "deposit",
            Action::Withdraw(_) => "withdraw",
            Action::Earn(_) => "earn",
            Action::Harvest => "harvest",
            Action::Tend => "tend",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_earn_params_default_depositor() {
        assert_eq!(EarnParams::default().depositors, vec!["user".to_string()]);
    }

    #[test]
    fn test_action_names() {
        assert_eq!(Action::Deposit(DepositParams::new(U256::from(1))).name(), "deposit");
        assert_eq!(Action::Withdraw(WithdrawParams::default()).name(), "withdraw");
        assert_eq!(Action::Earn(EarnParams::default()).name(), "earn");
        assert_eq!(Action::Harvest.name(), "harvest");
        assert_eq!(Action::Tend.name(), "tend");
    }

    #[test]
    fn test_deposit_override() {
        let params = DepositParams::new(U256::from(10)).with_expected_shares(U256::from(9));
        assert_eq!(params.expected_shares, Some(U256::from(9)));
    }
}
