use crate::cli::charts::create_risk_charts;
use crate::cli::commands::load_saved_report;
use crate::core::config::Config;
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct ChartsArgs {
    /// Saved report (<name>.json)
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Width of the longest bar (defaults to the config value)
    #[arg(short, long)]
    pub width: Option<usize>,
}

pub fn run(args: ChartsArgs, config: &Config) -> anyhow::Result<()> {
    let (store, name) = load_saved_report(&args.input, None)?;
    let series = store.chart_series(&name)?;

    if series.is_empty() {
        crate::cli::interactive::show_warning("No data to create charts. Add risks first.");
        return Ok(());
    }

    let width = args.width.unwrap_or(config.charts.width);
    println!("{}", create_risk_charts(&series, width));
    Ok(())
}
