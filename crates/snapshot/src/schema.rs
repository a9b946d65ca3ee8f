//! The declared set of keys a verification run reads.

use std::collections::BTreeSet;

use crate::error::{Result, SnapshotError};
use crate::key::{entities, tokens, SettField, SnapshotKey, StrategyField};
use crate::snapshot::Snapshot;

/// Keys the collection stage must populate.
///
/// Balances are collected for every token against every entity, mirroring a
/// batched `balanceOf` query round.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SnapshotSchema {
    tokens: BTreeSet<String>,
    entities: BTreeSet<String>,
    scalars: BTreeSet<SnapshotKey>,
}

impl SnapshotSchema {
    /// An empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys every sett/strategy verification needs: `want` and `sett`
    /// balances of the user, vault, strategy, treasury and strategist, plus
    /// all sett and strategy scalars.
    pub fn core() -> Self {
        let mut schema = Self::new()
            .with_token(tokens::WANT)
            .with_token(tokens::SETT);
        for entity in [
            entities::USER,
            entities::SETT,
            entities::STRATEGY,
            entities::TREASURY,
            entities::STRATEGIST,
        ] {
            schema = schema.with_entity(entity);
        }
        for field in SettField::ALL {
            schema = schema.with_key(field);
        }
        for field in StrategyField::ALL {
            schema = schema.with_key(field);
        }
        schema
    }

    /// Track balances of `token` for every entity.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.tokens.insert(token.into());
        self
    }

    /// Track every token's balance held by `entity`.
    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entities.insert(entity.into());
        self
    }

    /// Track a single scalar or extra key.
    pub fn with_key(mut self, key: impl Into<SnapshotKey>) -> Self {
        self.scalars.insert(key.into());
        self
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn entities(&self) -> impl Iterator<Item = &str> {
        self.entities.iter().map(String::as_str)
    }

    /// Every key the schema declares.
    pub fn required_keys(&self) -> BTreeSet<SnapshotKey> {
        let mut keys = self.scalars.clone();
        for token in &self.tokens {
            for entity in &self.entities {
                keys.insert(SnapshotKey::balance(token.as_str(), entity.as_str()));
            }
        }
        keys
    }

    /// Declared keys absent from `snapshot`.
    pub fn missing_keys(&self, snapshot: &Snapshot) -> Vec<SnapshotKey> {
        self.required_keys()
            .into_iter()
            .filter(|key| !snapshot.contains(key))
            .collect()
    }

    /// Fails with [`SnapshotError::IncompleteSnapshot`] listing every gap.
    pub fn validate(&self, snapshot: &Snapshot) -> Result<()> {
        let missing = self.missing_keys(snapshot);
        if missing.is_empty() {
            return Ok(());
        }
        Err(SnapshotError::IncompleteSnapshot {
            missing: missing.iter().map(ToString::to_string).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::U256;

    #[test]
    fn test_core_schema_size() {
        // 2 tokens x 5 entities + 10 sett fields + 3 strategy fields
        assert_eq!(SnapshotSchema::core().required_keys().len(), 23);
    }

    #[test]
    fn test_with_token_spans_all_entities() {
        let schema = SnapshotSchema::new()
            .with_entity("strategy")
            .with_entity("user")
            .with_token("weth");
        let keys = schema.required_keys();
        assert!(keys.contains(&SnapshotKey::balance("weth", "strategy")));
        assert!(keys.contains(&SnapshotKey::balance("weth", "user")));
        assert_eq!(keys.len(), 2);
    }

    #[test]
    fn test_validate_reports_every_gap() {
        let schema = SnapshotSchema::new()
            .with_key(SettField::TotalSupply)
            .with_key(SettField::Balance)
            .with_key("depositBalances.sgTracker");
        let snapshot = Snapshot::builder()
            .insert(SettField::TotalSupply, U256::from(1))
            .build();

        match schema.validate(&snapshot) {
            Err(SnapshotError::IncompleteSnapshot { missing }) => {
                assert_eq!(missing, vec!["sett.balance", "depositBalances.sgTracker"]);
            }
            other => panic!("expected incomplete snapshot, got {other:?}"),
        }
    }
}
