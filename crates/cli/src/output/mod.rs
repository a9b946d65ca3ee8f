//! Output formatting for CLI results.

pub mod compare;
pub mod fees;
pub mod summary;

pub use compare::{diff_rows, format_diff_table};
pub use fees::{format_fee_report, FeeReportOutput};
pub use summary::{format_verification, VerificationSummary};
