//! Error types for action verification.

use alloy_primitives::U256;
use sett_rs_math::MathError;
use sett_rs_snapshot::SnapshotError;
use thiserror::Error;

/// Reasons a verification call aborts.
///
/// The first failing check ends the call; nothing is collected or retried.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// A snapshot lookup failed, usually a key the collector never populated.
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    /// The recomputation itself failed (e.g. division by a zero balance).
    #[error(transparent)]
    Math(#[from] MathError),

    /// An observed value differs from the expected one beyond tolerance.
    #[error("{check}: expected {expected}, got {actual} (tolerance {tolerance})")]
    Mismatch {
        check: String,
        expected: U256,
        actual: U256,
        tolerance: U256,
    },

    /// A structural invariant does not hold.
    #[error("{check}: {detail}")]
    Violation { check: String, detail: String },

    /// A strategy integration left a required hook at its default.
    #[error("Strategy {strategy} must implement {hook}")]
    UnimplementedHook {
        strategy: String,
        hook: &'static str,
    },
}

impl VerifyError {
    /// Name of the failed check, if the failure came from one.
    pub fn check(&self) -> Option<&str> {
        match self {
            VerifyError::Mismatch { check, .. } | VerifyError::Violation { check, .. } => {
                Some(check.as_str())
            }
            _ => None,
        }
    }
}

/// Result type alias for verification.
pub type Result<T> = std::result::Result<T, VerifyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_mismatch() {
        let error = VerifyError::Mismatch {
            check: "deposit: total supply".to_string(),
            expected: U256::from(1_500_000),
            actual: U256::from(1_499_990),
            tolerance: U256::from(1),
        };
        assert_eq!(
            error.to_string(),
            "deposit: total supply: expected 1500000, got 1499990 (tolerance 1)"
        );
        assert_eq!(error.check(), Some("deposit: total supply"));
    }

    #[test]
    fn test_error_display_unimplemented_hook() {
        let error = VerifyError::UnimplementedHook {
            strategy: "base".to_string(),
            hook: "confirm_tend",
        };
        assert_eq!(error.to_string(), "Strategy base must implement confirm_tend");
        assert_eq!(error.check(), None);
    }

    #[test]
    fn test_snapshot_error_is_transparent() {
        let error: VerifyError = SnapshotError::MissingKey("sett.balance".to_string()).into();
        assert_eq!(error.to_string(), "Snapshot key not found: sett.balance");
    }
}
