//! Table formatting for snapshot comparisons.

use colored::Colorize;
use serde::Serialize;
use sett_rs_snapshot::{Delta, KeyDiff};
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Tabled, Serialize)]
pub struct DiffRow {
    #[tabled(rename = "Key")]
    pub key: String,
    #[tabled(rename = "Before")]
    pub before: String,
    #[tabled(rename = "After")]
    pub after: String,
    #[tabled(rename = "Change")]
    pub change: String,
}

fn value_or_dash<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// Plain rows, suitable for JSON output.
pub fn diff_rows(diffs: &[KeyDiff]) -> Vec<DiffRow> {
    diffs
        .iter()
        .map(|d| DiffRow {
            key: d.key.to_string(),
            before: value_or_dash(d.before),
            after: value_or_dash(d.after),
            change: value_or_dash(d.delta()),
        })
        .collect()
}

fn colorize_change(delta: Option<Delta>) -> String {
    match delta {
        Some(delta @ Delta::Increase(_)) => delta.to_string().green().to_string(),
        Some(delta @ Delta::Decrease(_)) => delta.to_string().red().to_string(),
        Some(Delta::Unchanged) => "0".dimmed().to_string(),
        None => "missing".yellow().to_string(),
    }
}

pub fn format_diff_table(diffs: &[KeyDiff]) -> String {
    if diffs.is_empty() {
        return "No differences found.".to_string();
    }

    let rows: Vec<DiffRow> = diffs
        .iter()
        .zip(diff_rows(diffs))
        .map(|(d, row)| DiffRow {
            change: colorize_change(d.delta()),
            ..row
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()));

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::U256;
    use sett_rs_snapshot::{diff, SettField, Snapshot};

    #[test]
    fn test_diff_rows_render_signed_changes() {
        let before = Snapshot::builder()
            .insert(SettField::TotalSupply, U256::from(100))
            .insert(SettField::Balance, U256::from(50))
            .build();
        let after = Snapshot::builder()
            .insert(SettField::TotalSupply, U256::from(80))
            .insert(SettField::Available, U256::from(5))
            .build();

        let rows = diff_rows(&diff(&before, &after));
        let supply = rows.iter().find(|r| r.key == "sett.totalSupply").unwrap();
        assert_eq!(supply.change, "-20");
        let available = rows.iter().find(|r| r.key == "sett.available").unwrap();
        assert_eq!(available.before, "-");
        assert_eq!(available.change, "-");
    }

    #[test]
    fn test_empty_diff_table() {
        assert_eq!(format_diff_table(&[]), "No differences found.");
    }
}
