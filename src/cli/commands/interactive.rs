use crate::cli::interactive::menu::run_menu;
use crate::core::config::Config;
use clap::Args;

#[derive(Args, Default)]
pub struct InteractiveArgs {
    /// Pre-filled loss per unit for the financial impact prompt
    #[arg(long)]
    pub loss_per_unit: Option<f64>,
}

pub fn run(args: InteractiveArgs, mut config: Config) -> anyhow::Result<()> {
    if let Some(loss) = args.loss_per_unit {
        config.finance.default_loss_per_unit = loss;
    }
    tracing::info!(
        output = %config.output.directory.display(),
        "starting interactive session"
    );
    run_menu(config)
}
