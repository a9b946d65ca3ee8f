//! Side-by-side comparison of two snapshots.

use std::collections::BTreeSet;
use std::fmt;

use alloy_primitives::U256;

use crate::key::SnapshotKey;
use crate::snapshot::Snapshot;

/// Direction and size of a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delta {
    Unchanged,
    Increase(U256),
    Decrease(U256),
}

impl Delta {
    pub fn between(before: U256, after: U256) -> Self {
        match after.cmp(&before) {
            std::cmp::Ordering::Equal => Delta::Unchanged,
            std::cmp::Ordering::Greater => Delta::Increase(after - before),
            std::cmp::Ordering::Less => Delta::Decrease(before - after),
        }
    }

    pub fn is_unchanged(&self) -> bool {
        matches!(self, Delta::Unchanged)
    }
}

impl fmt::Display for Delta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delta::Unchanged => f.write_str("0"),
            Delta::Increase(amount) => write!(f, "+{amount}"),
            Delta::Decrease(amount) => write!(f, "-{amount}"),
        }
    }
}

/// One row of a snapshot comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyDiff {
    pub key: SnapshotKey,
    pub before: Option<U256>,
    pub after: Option<U256>,
}

impl KeyDiff {
    /// `None` when the key is only present on one side.
    pub fn delta(&self) -> Option<Delta> {
        Some(Delta::between(self.before?, self.after?))
    }
}

/// Compares every key present on either side, in key order.
pub fn diff(before: &Snapshot, after: &Snapshot) -> Vec<KeyDiff> {
    let keys: BTreeSet<&SnapshotKey> = before.keys().chain(after.keys()).collect();
    keys.into_iter()
        .map(|key| KeyDiff {
            key: key.clone(),
            before: before.get(key.clone()).ok(),
            after: after.get(key.clone()).ok(),
        })
        .collect()
}
