use clap::Parser;
use colored::*;
use riskreg::cli::{Cli, Commands};
use riskreg::RiskregError;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Initialize logging with RISKREG_LOG environment variable support
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let log_level = std::env::var("RISKREG_LOG").unwrap_or_else(|_| default_level.to_string());

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&log_level))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);

        // Use appropriate exit codes based on error type
        let exit_code = match e.downcast_ref::<RiskregError>() {
            Some(RiskregError::Config(_)) => 2,
            Some(RiskregError::Io(_))
            | Some(RiskregError::Storage(_))
            | Some(RiskregError::Archive(_)) => 3,
            Some(RiskregError::Serialization(_)) => 4,
            Some(err) if err.is_data_error() => 5,
            _ => 1,
        };
        process::exit(exit_code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.load_config()?;

    match cli.command {
        None => riskreg::cli::commands::interactive::run(Default::default(), config),
        Some(Commands::Interactive(args)) => riskreg::cli::commands::interactive::run(args, config),
        Some(Commands::Render(args)) => riskreg::cli::commands::render::run(args),
        Some(Commands::Impact(args)) => riskreg::cli::commands::impact::run(args, &config),
        Some(Commands::Charts(args)) => riskreg::cli::commands::charts::run(args, &config),
    }
}
