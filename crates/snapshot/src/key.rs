//! Typed snapshot keys and the dotted naming convention they render to.
//!
//! | key | rendered |
//! |---|---|
//! | token balance | `balances.<token>.<entity>` |
//! | sett scalar | `sett.<field>` (e.g. `sett.totalSupply`) |
//! | strategy scalar | `strategy.<field>` (e.g. `strategy.balanceOfPool`) |
//! | anything else | the raw dotted string (e.g. `depositBalances.sgTracker`) |

use std::fmt;
use std::str::FromStr;

use crate::error::SnapshotError;

/// Well-known token keys.
pub mod tokens {
    /// The deposit token.
    pub const WANT: &str = "want";
    /// The vault's own share token.
    pub const SETT: &str = "sett";
}

/// Well-known entity (holder) keys.
pub mod entities {
    /// The depositor driving the action.
    pub const USER: &str = "user";
    /// The vault contract.
    pub const SETT: &str = "sett";
    /// The strategy contract.
    pub const STRATEGY: &str = "strategy";
    /// Governance fee recipient.
    pub const TREASURY: &str = "treasury";
    /// Strategist fee recipient.
    pub const STRATEGIST: &str = "strategist";
}

const BALANCES: &str = "balances";
const SETT: &str = "sett";
const STRATEGY: &str = "strategy";

/// Scalar fields read from the sett contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SettField {
    Balance,
    Available,
    PricePerFullShare,
    Decimals,
    TotalSupply,
    WithdrawalFee,
    ManagementFee,
    LastHarvestedAt,
    PerformanceFeeGovernance,
    PerformanceFeeStrategist,
}

impl SettField {
    pub const ALL: [SettField; 10] = [
        SettField::Balance,
        SettField::Available,
        SettField::PricePerFullShare,
        SettField::Decimals,
        SettField::TotalSupply,
        SettField::WithdrawalFee,
        SettField::ManagementFee,
        SettField::LastHarvestedAt,
        SettField::PerformanceFeeGovernance,
        SettField::PerformanceFeeStrategist,
    ];

    /// Contract getter name.
    pub fn name(self) -> &'static str {
        match self {
            SettField::Balance => "balance",
            SettField::Available => "available",
            SettField::PricePerFullShare => "getPricePerFullShare",
            SettField::Decimals => "decimals",
            SettField::TotalSupply => "totalSupply",
            SettField::WithdrawalFee => "withdrawalFee",
            SettField::ManagementFee => "managementFee",
            SettField::LastHarvestedAt => "lastHarvestedAt",
            SettField::PerformanceFeeGovernance => "performanceFeeGovernance",
            SettField::PerformanceFeeStrategist => "performanceFeeStrategist",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }
}

/// Scalar fields read from the strategy contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrategyField {
    /// Want deployed in the external pool.
    BalanceOfPool,
    /// Idle want held by the strategy.
    BalanceOfWant,
    /// Pool plus idle want.
    BalanceOf,
}

impl StrategyField {
    pub const ALL: [StrategyField; 3] = [
        StrategyField::BalanceOfPool,
        StrategyField::BalanceOfWant,
        StrategyField::BalanceOf,
    ];

    /// Contract getter name.
    pub fn name(self) -> &'static str {
        match self {
            StrategyField::BalanceOfPool => "balanceOfPool",
            StrategyField::BalanceOfWant => "balanceOfWant",
            StrategyField::BalanceOf => "balanceOf",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }
}

/// A fact recorded in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SnapshotKey {
    /// A scalar read from the sett.
    Sett(SettField),
    /// A scalar read from the strategy.
    Strategy(StrategyField),
    /// `token.balanceOf(entity)`.
    Balance { token: String, entity: String },
    /// A strategy-specific figure outside the core naming scheme.
    Extra(String),
}

impl SnapshotKey {
    /// Key for `token.balanceOf(entity)`.
    pub fn balance(token: impl Into<String>, entity: impl Into<String>) -> Self {
        SnapshotKey::Balance {
            token: token.into(),
            entity: entity.into(),
        }
    }
}

impl fmt::Display for SnapshotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotKey::Sett(field) => write!(f, "{SETT}.{}", field.name()),
            SnapshotKey::Strategy(field) => write!(f, "{STRATEGY}.{}", field.name()),
            SnapshotKey::Balance { token, entity } => write!(f, "{BALANCES}.{token}.{entity}"),
            SnapshotKey::Extra(raw) => f.write_str(raw),
        }
    }
}

impl FromStr for SnapshotKey {
    type Err = SnapshotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() < 2 || parts.iter().any(|part| part.is_empty()) {
            return Err(SnapshotError::InvalidKey(s.to_string()));
        }

        let key = match parts.as_slice() {
            [BALANCES, token, entity] => SnapshotKey::balance(*token, *entity),
            [BALANCES, ..] => return Err(SnapshotError::InvalidKey(s.to_string())),
            [SETT, name] => SettField::from_name(name)
                .map(SnapshotKey::Sett)
                .unwrap_or_else(|| SnapshotKey::Extra(s.to_string())),
            [STRATEGY, name] => StrategyField::from_name(name)
                .map(SnapshotKey::Strategy)
                .unwrap_or_else(|| SnapshotKey::Extra(s.to_string())),
            _ => SnapshotKey::Extra(s.to_string()),
        };
        Ok(key)
    }
}

impl From<SettField> for SnapshotKey {
    fn from(field: SettField) -> Self {
        SnapshotKey::Sett(field)
    }
}

impl From<StrategyField> for SnapshotKey {
    fn from(field: StrategyField) -> Self {
        SnapshotKey::Strategy(field)
    }
}

/// Lookup by dotted string. Malformed strings become [`SnapshotKey::Extra`]
/// and so surface as a missing key rather than a parse error.
impl From<&str> for SnapshotKey {
    fn from(raw: &str) -> Self {
        raw.parse()
            .unwrap_or_else(|_| SnapshotKey::Extra(raw.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_balance_key() {
        let key: SnapshotKey = "balances.want.sett".parse().unwrap();
        assert_eq!(key, SnapshotKey::balance(tokens::WANT, entities::SETT));
        assert_eq!(key.to_string(), "balances.want.sett");
    }

    #[test]
    fn test_parse_sett_fields() {
        for field in SettField::ALL {
            let rendered = SnapshotKey::Sett(field).to_string();
            assert_eq!(rendered.parse::<SnapshotKey>().unwrap(), SnapshotKey::Sett(field));
        }
        assert_eq!(
            "sett.getPricePerFullShare".parse::<SnapshotKey>().unwrap(),
            SnapshotKey::Sett(SettField::PricePerFullShare)
        );
    }

    #[test]
    fn test_parse_strategy_fields() {
        assert_eq!(
            "strategy.balanceOfPool".parse::<SnapshotKey>().unwrap(),
            SnapshotKey::Strategy(StrategyField::BalanceOfPool)
        );
    }

    #[test]
    fn test_unknown_contract_field_is_extra() {
        let key: SnapshotKey = "sett.controller".parse().unwrap();
        assert_eq!(key, SnapshotKey::Extra("sett.controller".to_string()));

        let key: SnapshotKey = "depositBalances.sgTracker".parse().unwrap();
        assert_eq!(key.to_string(), "depositBalances.sgTracker");
    }

    #[test]
    fn test_invalid_keys() {
        for raw in ["", "totalSupply", "sett.", ".want", "balances.want", "balances.want.user.x"] {
            assert!(
                matches!(raw.parse::<SnapshotKey>(), Err(SnapshotError::InvalidKey(_))),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn test_from_str_never_fails() {
        assert_eq!(
            SnapshotKey::from("bogus"),
            SnapshotKey::Extra("bogus".to_string())
        );
    }
}
