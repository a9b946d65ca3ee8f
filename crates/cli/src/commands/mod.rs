//! Command implementations.

pub mod diff;
pub mod fees;
pub mod verify;

pub use diff::run_diff;
pub use fees::run_fees;
pub use verify::run_verify;
