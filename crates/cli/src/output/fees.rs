//! Output for harvest fee reports.

use colored::Colorize;
use serde::Serialize;
use sett_rs_math::{FeeReport, HarvestFeeInputs};
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Debug, Serialize)]
pub struct FeeReportOutput {
    pub inputs: HarvestFeeInputs,
    pub report: FeeReport,
}

#[derive(Tabled)]
struct FeeRow {
    #[tabled(rename = "Fee")]
    fee: &'static str,
    #[tabled(rename = "Recipient")]
    recipient: &'static str,
    #[tabled(rename = "Shares")]
    shares: String,
}

pub fn format_fee_report(output: &FeeReportOutput) -> String {
    let FeeReportOutput { inputs, report } = output;
    let mut out = String::new();

    out.push_str(&format!("{}\n", "Harvest".cyan().bold()));
    out.push_str(&format!("  Gain:             {}\n", inputs.total_gain));
    out.push_str(&format!("  Supply before:    {}\n", inputs.total_supply_before));
    out.push_str(&format!("  Balance before:   {}\n", inputs.balance_before));
    out.push_str(&format!("  Seconds elapsed:  {}\n\n", inputs.seconds_elapsed));

    let rows = vec![
        FeeRow {
            fee: "Performance",
            recipient: "treasury",
            shares: report.shares_perf_treasury.to_string(),
        },
        FeeRow {
            fee: "Management",
            recipient: "treasury",
            shares: report.shares_management.to_string(),
        },
        FeeRow {
            fee: "Performance",
            recipient: "strategist",
            shares: report.shares_perf_strategist.to_string(),
        },
    ];

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::new(2..)).with(Alignment::right()));
    out.push_str(&table.to_string());

    out.push_str(&format!(
        "\n\n  Treasury total:   {}\n  Minted total:     {}",
        report.treasury_shares().to_string().bold(),
        report.total_shares().to_string().bold()
    ));

    out
}
