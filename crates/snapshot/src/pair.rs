//! Before/after snapshots around a single ledger action.

use std::collections::BTreeSet;

use crate::error::{Result, SnapshotError};
use crate::key::SnapshotKey;
use crate::snapshot::Snapshot;

/// Snapshots taken immediately before and after one action.
///
/// Both sides must cover the same keys (same contracts, same entity set) and,
/// when block numbers are known, `after` must come strictly later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotPair {
    before: Snapshot,
    after: Snapshot,
}

impl SnapshotPair {
    pub fn new(before: Snapshot, after: Snapshot) -> Result<Self> {
        let before_keys: BTreeSet<&SnapshotKey> = before.keys().collect();
        let after_keys: BTreeSet<&SnapshotKey> = after.keys().collect();
        if before_keys != after_keys {
            return Err(SnapshotError::MismatchedKeys {
                only_before: before_keys
                    .difference(&after_keys)
                    .map(ToString::to_string)
                    .collect(),
                only_after: after_keys
                    .difference(&before_keys)
                    .map(ToString::to_string)
                    .collect(),
            });
        }

        if let (Some(before_block), Some(after_block)) = (before.block_number(), after.block_number()) {
            if after_block <= before_block {
                return Err(SnapshotError::NotChronological {
                    before: before_block,
                    after: after_block,
                });
            }
        }

        Ok(Self { before, after })
    }

    pub fn before(&self) -> &Snapshot {
        &self.before
    }

    pub fn after(&self) -> &Snapshot {
        &self.after
    }

    pub fn into_parts(self) -> (Snapshot, Snapshot) {
        (self.before, self.after)
    }
}
