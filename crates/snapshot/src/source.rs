//! Inbound interface through which snapshots reach the verifier.
//!
//! Collection itself (batched on-chain reads) lives outside this workspace;
//! anything that can produce a [`Snapshot`] covering a [`SnapshotSchema`]
//! implements [`SnapshotSource`].

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::schema::SnapshotSchema;
use crate::snapshot::Snapshot;

/// Produces a snapshot covering every key of a schema.
pub trait SnapshotSource {
    fn collect(&self, schema: &SnapshotSchema) -> Result<Snapshot>;
}

/// Reads a previously collected snapshot document from disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotSource for JsonFileSource {
    fn collect(&self, schema: &SnapshotSchema) -> Result<Snapshot> {
        let snapshot = Snapshot::load(&self.path)?;
        schema.validate(&snapshot)?;
        debug!(path = %self.path.display(), "snapshot covers schema");
        Ok(snapshot)
    }
}

/// An already collected snapshot serves itself, after validation.
impl SnapshotSource for Snapshot {
    fn collect(&self, schema: &SnapshotSchema) -> Result<Snapshot> {
        schema.validate(self)?;
        Ok(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SnapshotError;
    use crate::key::SettField;
    use alloy_primitives::U256;

    #[test]
    fn test_snapshot_serves_itself() {
        let snapshot = Snapshot::builder()
            .insert(SettField::Balance, U256::from(3))
            .build();
        let schema = SnapshotSchema::new().with_key(SettField::Balance);
        assert_eq!(snapshot.collect(&schema).unwrap(), snapshot);

        let stricter = schema.with_key(SettField::Decimals);
        assert!(matches!(
            snapshot.collect(&stricter),
            Err(SnapshotError::IncompleteSnapshot { .. })
        ));
    }

    #[test]
    fn test_json_file_source_missing_file() {
        let source = JsonFileSource::new("/no/such/snapshot.json");
        assert!(matches!(
            source.collect(&SnapshotSchema::new()),
            Err(SnapshotError::Io { .. })
        ));
    }
}
