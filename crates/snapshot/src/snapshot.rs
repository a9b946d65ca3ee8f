//! Immutable record of on-chain figures captured at one point in time.
//!
//! # File format
//!
//! Snapshots serialize to a JSON object with an optional block number and a
//! flat map of dotted keys to values. Values may be decimal strings, `0x`
//! hex strings, or JSON integers:
//!
//! ```json
//! {
//!   "block_number": 1200,
//!   "values": {
//!     "sett.totalSupply": "1000000",
//!     "balances.want.user": 250000
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, SnapshotError};
use crate::key::{SettField, SnapshotKey, StrategyField};
use crate::schema::SnapshotSchema;

/// Named figures captured in a single query round.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "SnapshotDocument", into = "SnapshotDocument")]
pub struct Snapshot {
    block_number: Option<u64>,
    values: BTreeMap<SnapshotKey, U256>,
}

impl Snapshot {
    pub fn builder() -> SnapshotBuilder {
        SnapshotBuilder::default()
    }

    /// Value recorded under `key`.
    ///
    /// A key the collection stage never populated is a
    /// [`SnapshotError::MissingKey`], never an implicit zero.
    pub fn get(&self, key: impl Into<SnapshotKey>) -> Result<U256> {
        let key = key.into();
        self.values
            .get(&key)
            .copied()
            .ok_or_else(|| SnapshotError::MissingKey(key.to_string()))
    }

    /// `token.balanceOf(entity)`, i.e. `get("balances.<token>.<entity>")`.
    pub fn balances(&self, token: &str, entity: &str) -> Result<U256> {
        self.get(SnapshotKey::balance(token, entity))
    }

    pub fn sett(&self, field: SettField) -> Result<U256> {
        self.get(field)
    }

    pub fn strategy(&self, field: StrategyField) -> Result<U256> {
        self.get(field)
    }

    /// Block the snapshot was taken at, if the collector recorded it.
    pub fn block_number(&self) -> Option<u64> {
        self.block_number
    }

    pub fn contains(&self, key: &SnapshotKey) -> bool {
        self.values.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &SnapshotKey> {
        self.values.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SnapshotKey, &U256)> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Parses a snapshot document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Renders the snapshot as a pretty-printed document.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reads a snapshot document from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot = Self::from_json_str(&contents)?;
        debug!(
            path = %path.display(),
            keys = snapshot.len(),
            block = ?snapshot.block_number,
            "loaded snapshot"
        );
        Ok(snapshot)
    }
}

/// Accumulates values before freezing them into a [`Snapshot`].
#[derive(Debug, Clone, Default)]
pub struct SnapshotBuilder {
    block_number: Option<u64>,
    values: BTreeMap<SnapshotKey, U256>,
}

impl SnapshotBuilder {
    pub fn block_number(mut self, block_number: u64) -> Self {
        self.block_number = Some(block_number);
        self
    }

    /// Records `value` under `key`, replacing any earlier value.
    pub fn insert(mut self, key: impl Into<SnapshotKey>, value: U256) -> Self {
        self.values.insert(key.into(), value);
        self
    }

    /// Records `token.balanceOf(entity)`.
    pub fn balance(self, token: &str, entity: &str, value: U256) -> Self {
        self.insert(SnapshotKey::balance(token, entity), value)
    }

    /// Freezes the snapshot without schema validation.
    pub fn build(self) -> Snapshot {
        Snapshot {
            block_number: self.block_number,
            values: self.values,
        }
    }

    /// Freezes the snapshot, failing if any key `schema` declares is absent.
    pub fn build_with_schema(self, schema: &SnapshotSchema) -> Result<Snapshot> {
        let snapshot = self.build();
        schema.validate(&snapshot)?;
        Ok(snapshot)
    }
}

/// On-disk form of a [`Snapshot`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SnapshotDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    block_number: Option<u64>,
    values: BTreeMap<String, RawValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawValue {
    Integer(u64),
    Text(String),
}

fn parse_value(key: &str, raw: RawValue) -> Result<U256> {
    let invalid = |value: String| SnapshotError::InvalidValue {
        key: key.to_string(),
        value,
    };
    match raw {
        RawValue::Integer(value) => Ok(U256::from(value)),
        RawValue::Text(text) => {
            let trimmed = text.trim();
            let parsed = match trimmed.strip_prefix("0x") {
                Some(hex) => U256::from_str_radix(hex, 16),
                None => U256::from_str_radix(trimmed, 10),
            };
            parsed.map_err(|_| invalid(text))
        }
    }
}

impl TryFrom<SnapshotDocument> for Snapshot {
    type Error = SnapshotError;

    fn try_from(document: SnapshotDocument) -> Result<Self> {
        let mut values = BTreeMap::new();
        for (raw_key, raw_value) in document.values {
            let key: SnapshotKey = raw_key.parse()?;
            let value = parse_value(&raw_key, raw_value)?;
            values.insert(key, value);
        }
        Ok(Snapshot {
            block_number: document.block_number,
            values,
        })
    }
}

impl From<Snapshot> for SnapshotDocument {
    fn from(snapshot: Snapshot) -> Self {
        SnapshotDocument {
            block_number: snapshot.block_number,
            values: snapshot
                .values
                .into_iter()
                .map(|(key, value)| (key.to_string(), RawValue::Text(value.to_string())))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::{entities, tokens};

    fn sample() -> Snapshot {
        Snapshot::builder()
            .block_number(100)
            .insert(SettField::TotalSupply, U256::from(1_000_000))
            .insert(StrategyField::BalanceOf, U256::from(42))
            .balance(tokens::WANT, entities::SETT, U256::from(500))
            .build()
    }

    #[test]
    fn test_get_by_typed_and_dotted_key() {
        let snapshot = sample();
        assert_eq!(snapshot.sett(SettField::TotalSupply).unwrap(), U256::from(1_000_000));
        assert_eq!(snapshot.get("sett.totalSupply").unwrap(), U256::from(1_000_000));
        assert_eq!(snapshot.strategy(StrategyField::BalanceOf).unwrap(), U256::from(42));
        assert_eq!(snapshot.balances("want", "sett").unwrap(), U256::from(500));
    }

    #[test]
    fn test_missing_key_fails_loudly() {
        let snapshot = sample();
        let err = snapshot.balances("want", "user").unwrap_err();
        assert_eq!(err.to_string(), "Snapshot key not found: balances.want.user");
        assert!(matches!(
            snapshot.get("not a key"),
            Err(SnapshotError::MissingKey(_))
        ));
    }

    #[test]
    fn test_json_values_accept_numbers_decimal_and_hex() {
        let snapshot = Snapshot::from_json_str(
            r#"{
                "block_number": 7,
                "values": {
                    "sett.totalSupply": 1000,
                    "sett.balance": "2000",
                    "sett.getPricePerFullShare": "0xde0b6b3a7640000",
                    "depositBalances.sgTracker": "5"
                }
            }"#,
        )
        .unwrap();

        assert_eq!(snapshot.block_number(), Some(7));
        assert_eq!(snapshot.sett(SettField::TotalSupply).unwrap(), U256::from(1000));
        assert_eq!(snapshot.sett(SettField::Balance).unwrap(), U256::from(2000));
        assert_eq!(
            snapshot.sett(SettField::PricePerFullShare).unwrap(),
            U256::from(1_000_000_000_000_000_000u64)
        );
        assert_eq!(snapshot.get("depositBalances.sgTracker").unwrap(), U256::from(5));
    }

    #[test]
    fn test_json_rejects_negative_and_bad_keys() {
        let err = Snapshot::from_json_str(r#"{"values": {"sett.balance": "-1"}}"#).unwrap_err();
        assert!(err.to_string().contains("sett.balance"));

        assert!(Snapshot::from_json_str(r#"{"values": {"balances.want": "1"}}"#).is_err());
    }

    #[test]
    fn test_json_round_trip_keeps_wide_values() {
        let wide = U256::from(10u64).pow(U256::from(40));
        let snapshot = Snapshot::builder()
            .insert(SettField::Balance, wide)
            .build();
        let json = snapshot.to_json().unwrap();
        assert!(json.contains("10000000000000000000000000000000000000000"));
        assert_eq!(Snapshot::from_json_str(&json).unwrap(), snapshot);
    }

    #[test]
    fn test_build_with_schema() {
        let schema = SnapshotSchema::new().with_key(SettField::Decimals);
        let result = Snapshot::builder()
            .insert(SettField::Balance, U256::from(1))
            .build_with_schema(&schema);
        assert!(matches!(
            result,
            Err(SnapshotError::IncompleteSnapshot { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Snapshot::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, SnapshotError::Io { .. }));
    }
}
