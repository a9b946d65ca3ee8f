//! `sett verify` implementation.

use anyhow::{bail, Context, Result};
use sett_rs_snapshot::{JsonFileSource, SnapshotPair, SnapshotSource};
use sett_rs_verifier::{
    Action, ActionVerifier, BaseHooks, DepositParams, EarnParams, GmxStakingHooks, StrategyHooks,
    VerifierConfig, WithdrawParams,
};
use tracing::{debug, info};

use crate::cli::{ActionKind, OutputFormat, StrategyKind, VerifyArgs};
use crate::output::{format_verification, VerificationSummary};

fn hooks_for(strategy: StrategyKind, config: &VerifierConfig) -> Box<dyn StrategyHooks> {
    match strategy {
        StrategyKind::None => Box::new(BaseHooks),
        StrategyKind::Gmx => Box::new(GmxStakingHooks::new().with_tolerance(config.tolerance)),
    }
}

fn action_from_args(args: &VerifyArgs) -> Result<Action> {
    let action = match args.action {
        ActionKind::Deposit => {
            let Some(amount) = args.amount else {
                bail!("--amount is required to verify a deposit");
            };
            let params = DepositParams::new(amount.0);
            Action::Deposit(match args.expected_shares {
                Some(shares) => params.with_expected_shares(shares.0),
                None => params,
            })
        }
        ActionKind::Withdraw => {
            let Some(amount) = args.amount else {
                bail!("--amount is required to verify a withdrawal");
            };
            Action::Withdraw(WithdrawParams::new(amount.0))
        }
        ActionKind::Earn if args.depositors.is_empty() => Action::Earn(EarnParams::default()),
        ActionKind::Earn => Action::Earn(EarnParams {
            depositors: args.depositors.clone(),
        }),
        ActionKind::Harvest => Action::Harvest,
        ActionKind::Tend => Action::Tend,
    };
    Ok(action)
}

pub fn run_verify(args: &VerifyArgs, format: OutputFormat) -> Result<()> {
    let config = match args.tolerance {
        Some(tolerance) => VerifierConfig::new().with_tolerance(tolerance.0),
        None => VerifierConfig::new(),
    };
    let verifier = ActionVerifier::with_config(hooks_for(args.strategy, &config), config);
    let action = action_from_args(args)?;

    let schema = verifier.schema();
    debug!(
        action = action.name(),
        strategy = verifier.hooks().name(),
        keys = schema.required_keys().len(),
        "loading snapshots"
    );
    let before = JsonFileSource::new(&args.before)
        .collect(&schema)
        .with_context(|| format!("Failed to read snapshot {}", args.before.display()))?;
    let after = JsonFileSource::new(&args.after)
        .collect(&schema)
        .with_context(|| format!("Failed to read snapshot {}", args.after.display()))?;
    let pair = SnapshotPair::new(before, after).context("Snapshots do not form a pair")?;

    verifier
        .verify(&pair, &action, None)
        .with_context(|| format!("{} verification failed", action.name()))?;
    info!(action = action.name(), "snapshots verified");

    let summary = VerificationSummary {
        action: action.name(),
        strategy: verifier.hooks().name().to_string(),
        tolerance: config.tolerance,
        before_block: pair.before().block_number(),
        after_block: pair.after().block_number(),
    };

    match format {
        OutputFormat::Table => {
            println!("{}", format_verification(&summary));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&summary)?;
            println!("{}", json);
        }
    }

    Ok(())
}
