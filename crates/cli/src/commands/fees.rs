//! `sett fees` implementation.

use anyhow::{Context, Result};
use sett_rs_math::{report_fees, FeeSchedule, HarvestFeeInputs};
use tracing::debug;

use crate::cli::{FeesArgs, OutputFormat};
use crate::output::{format_fee_report, FeeReportOutput};

pub fn run_fees(args: &FeesArgs, format: OutputFormat) -> Result<()> {
    let defaults = FeeSchedule::default();
    let inputs = HarvestFeeInputs {
        total_gain: args.gain.0,
        performance_fee_treasury: args
            .perf_treasury_bps
            .map_or(defaults.performance_fee_governance, |bps| bps.0),
        performance_fee_strategist: args
            .perf_strategist_bps
            .map_or(defaults.performance_fee_strategist, |bps| bps.0),
        management_fee: args
            .management_bps
            .map_or(defaults.management_fee, |bps| bps.0),
        seconds_elapsed: args.elapsed.0,
        total_supply_before: args.supply.0,
        balance_before: args.balance.0,
    };

    debug!(
        gain = %inputs.total_gain,
        elapsed = %inputs.seconds_elapsed,
        "computing harvest fees"
    );
    let report = report_fees(&inputs).context("Failed to compute harvest fees")?;
    let output = FeeReportOutput { inputs, report };

    match format {
        OutputFormat::Table => {
            println!("{}", format_fee_report(&output));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&output)?;
            println!("{}", json);
        }
    }

    Ok(())
}
