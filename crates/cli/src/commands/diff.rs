//! `sett diff` implementation.

use anyhow::{Context, Result};
use sett_rs_snapshot::{diff, Snapshot};
use tracing::debug;

use crate::cli::{DiffArgs, OutputFormat};
use crate::output::{diff_rows, format_diff_table};

pub fn run_diff(args: &DiffArgs, format: OutputFormat) -> Result<()> {
    let before = Snapshot::load(&args.before)
        .with_context(|| format!("Failed to read snapshot {}", args.before.display()))?;
    let after = Snapshot::load(&args.after)
        .with_context(|| format!("Failed to read snapshot {}", args.after.display()))?;

    let mut rows = diff(&before, &after);
    if args.changed {
        rows.retain(|row| !row.delta().is_some_and(|delta| delta.is_unchanged()));
    }
    debug!(rows = rows.len(), changed_only = args.changed, "snapshots compared");

    match format {
        OutputFormat::Table => {
            println!("{}", format_diff_table(&rows));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&diff_rows(&rows))?;
            println!("{}", json);
        }
    }

    Ok(())
}
