//! Output for a passed verification.

use alloy_primitives::U256;
use colored::Colorize;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct VerificationSummary {
    pub action: &'static str,
    pub strategy: String,
    pub tolerance: U256,
    pub before_block: Option<u64>,
    pub after_block: Option<u64>,
}

fn format_block(block: Option<u64>) -> String {
    block.map_or_else(|| "-".to_string(), |b| b.to_string())
}

pub fn format_verification(summary: &VerificationSummary) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{} {} verified\n",
        "PASS".green().bold(),
        summary.action.bold()
    ));
    output.push_str(&format!("  Strategy:  {}\n", summary.strategy));
    output.push_str(&format!("  Tolerance: {}\n", summary.tolerance));
    output.push_str(&format!(
        "  Blocks:    {} -> {}",
        format_block(summary.before_block),
        format_block(summary.after_block)
    ));

    output
}
