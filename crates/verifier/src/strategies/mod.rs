//! Hook implementations for concrete strategies.

pub mod gmx;

pub use gmx::GmxStakingHooks;
