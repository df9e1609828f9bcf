use crate::cli::commands::load_saved_report;
use crate::cli::formatter::impact_table;
use crate::core::config::Config;
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct ImpactArgs {
    /// Saved report (<name>.json)
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Monetary loss per unit of probability x impact (defaults to the config value)
    #[arg(short, long)]
    pub loss_per_unit: Option<f64>,

    /// Output machine-readable JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ImpactArgs, config: &Config) -> anyhow::Result<()> {
    let loss = args
        .loss_per_unit
        .unwrap_or(config.finance.default_loss_per_unit);
    if !loss.is_finite() {
        return Err(crate::RiskregError::InvalidInput(format!(
            "loss per unit must be finite, got {}",
            loss
        ))
        .into());
    }

    let (store, name) = load_saved_report(&args.input, None)?;
    let impact = store.compute_financial_impact(&name, loss)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&impact)?);
    } else {
        println!("{}", impact_table(&impact, &config.finance.currency_symbol));
    }
    Ok(())
}
