use crate::cli::commands::load_saved_report;
use crate::report::{Format, ReportGenerator};
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct RenderArgs {
    /// Saved report (<name>.json)
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Report name (defaults to the file stem)
    #[arg(long)]
    pub name: Option<String>,
}

pub fn run(args: RenderArgs) -> anyhow::Result<()> {
    let (store, name) = load_saved_report(&args.input, args.name.as_deref())?;
    let report = store.view(&name)?;

    let output = ReportGenerator::new(args.format).generate(&report)?;
    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}
