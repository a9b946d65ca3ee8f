//! Verifier configuration.

use alloy_primitives::U256;
use sett_rs_math::DEFAULT_TOLERANCE;

/// Settings shared by every verification call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifierConfig {
    /// Maximum difference, in native units, accepted by approximate checks.
    pub tolerance: U256,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl VerifierConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tolerance for approximate comparisons.
    pub fn with_tolerance(mut self, tolerance: U256) -> Self {
        self.tolerance = tolerance;
        self
    }
}
