//! Sett Balance Snapshots
//!
//! An immutable, typed record of the on-chain figures a verification run
//! compares: token balances per holder and scalar sett/strategy fields.
//!
//! # Overview
//!
//! - [`Snapshot`] - one query round, read through [`Snapshot::get`] and
//!   [`Snapshot::balances`]; absent keys are errors, not zeros
//! - [`SnapshotSchema`] - the keys a run needs, checked when a snapshot is built
//! - [`SnapshotPair`] - before/after snapshots around one action
//! - [`diff`] - row-by-row comparison for display
//! - [`SnapshotSource`] - the interface collectors implement
//!
//! # Example
//!
//! ```rust
//! use sett_rs_snapshot::{Snapshot, SnapshotPair, SettField};
//! use alloy_primitives::U256;
//!
//! let before = Snapshot::builder()
//!     .block_number(10)
//!     .insert(SettField::TotalSupply, U256::from(1_000))
//!     .balance("want", "user", U256::from(500))
//!     .build();
//! let after = Snapshot::builder()
//!     .block_number(11)
//!     .insert(SettField::TotalSupply, U256::from(1_500))
//!     .balance("want", "user", U256::ZERO)
//!     .build();
//!
//! let pair = SnapshotPair::new(before, after).unwrap();
//! assert_eq!(pair.after().get("sett.totalSupply").unwrap(), U256::from(1_500));
//! assert_eq!(pair.before().balances("want", "user").unwrap(), U256::from(500));
//! ```

pub mod diff;
pub mod error;
pub mod key;
pub mod pair;
pub mod schema;
pub mod snapshot;
pub mod source;

pub use diff::{diff, Delta, KeyDiff};
pub use error::{Result, SnapshotError};
pub use key::{entities, tokens, SettField, SnapshotKey, StrategyField};
pub use pair::SnapshotPair;
pub use schema::SnapshotSchema;
pub use snapshot::{Snapshot, SnapshotBuilder};
pub use source::{JsonFileSource, SnapshotSource};
