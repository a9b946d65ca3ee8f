//! CLI argument definitions using clap.

use std::path::PathBuf;
use std::str::FromStr;

use alloy_primitives::U256;
use clap::{Parser, Subcommand, ValueEnum};

/// Sett CLI - Verify vault actions from before/after snapshots
#[derive(Parser, Debug)]
#[command(name = "sett")]
#[command(about = "CLI tool for verifying sett vault and strategy actions", long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Log every check to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Verify one action against snapshots taken around it
    Verify(VerifyArgs),
    /// Compare two snapshots key by key
    Diff(DiffArgs),
    /// Compute the shares a harvest report mints
    Fees(FeesArgs),
}

#[derive(Parser, Debug)]
pub struct VerifyArgs {
    /// Action the snapshots surround
    pub action: ActionKind,

    /// Snapshot taken before the action
    #[arg(long)]
    pub before: PathBuf,

    /// Snapshot taken after the action
    #[arg(long)]
    pub after: PathBuf,

    /// Want deposited, or shares withdrawn (decimal or 0x hex)
    #[arg(long)]
    pub amount: Option<Amount>,

    /// Shares the deposit should mint, overriding the recomputation
    #[arg(long)]
    pub expected_shares: Option<Amount>,

    /// Entities whose want must not move during earn (default: user)
    #[arg(long = "depositor")]
    pub depositors: Vec<String>,

    /// Strategy hooks to run after the core checks
    #[arg(long, env = "SETT_STRATEGY", default_value = "none")]
    pub strategy: StrategyKind,

    /// Maximum rounding difference accepted, in native units
    #[arg(long, env = "SETT_TOLERANCE")]
    pub tolerance: Option<Amount>,
}

#[derive(Parser, Debug)]
pub struct DiffArgs {
    /// Snapshot taken first
    #[arg(long)]
    pub before: PathBuf,

    /// Snapshot taken second
    #[arg(long)]
    pub after: PathBuf,

    /// Only show keys whose value changed
    #[arg(long)]
    pub changed: bool,
}

#[derive(Parser, Debug)]
pub struct FeesArgs {
    /// Want gained over the harvest
    #[arg(long)]
    pub gain: Amount,

    /// Share supply before the harvest
    #[arg(long)]
    pub supply: Amount,

    /// Vault balance before the harvest
    #[arg(long)]
    pub balance: Amount,

    /// Treasury performance fee in bps (default: 1000)
    #[arg(long)]
    pub perf_treasury_bps: Option<Amount>,

    /// Strategist performance fee in bps (default: 1000)
    #[arg(long)]
    pub perf_strategist_bps: Option<Amount>,

    /// Annual management fee in bps (default: 200)
    #[arg(long)]
    pub management_bps: Option<Amount>,

    /// Seconds since the previous harvest
    #[arg(long, default_value = "0")]
    pub elapsed: Amount,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKind {
    Deposit,
    Withdraw,
    Earn,
    Harvest,
    Tend,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StrategyKind {
    /// No strategy-specific checks; earn, harvest and tend fail
    #[default]
    None,
    /// GMX staking strategy
    Gmx,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Wrapper for U256 that accepts decimal and 0x-prefixed hex
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Amount(pub U256);

impl FromStr for Amount {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().replace('_', "");
        let parsed = match s.strip_prefix("0x") {
            Some(hex) => U256::from_str_radix(hex, 16),
            None => U256::from_str_radix(&s, 10),
        };
        parsed
            .map(Amount)
            .map_err(|_| format!("Invalid amount: {}", s))
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
