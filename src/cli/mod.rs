pub mod charts;
pub mod commands;
pub mod formatter;
pub mod interactive;

use crate::core::config::{self, Config};
use crate::core::paths;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "riskreg",
    version,
    about = "Risk register with HTML/JSON export, backups and archives",
    long_about = "riskreg keeps named risk reports in memory: add risks (probability and impact) \
                  and comments, chart them, estimate their financial impact, and export them as \
                  HTML, JSON, backups or zip archives."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to $RISKREG_HOME/config.toml)
    #[arg(long, global = true, env = "RISKREG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory for saved reports and archives (overrides the config)
    #[arg(short, long, global = true)]
    pub output_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Menu-driven session (the default)
    Interactive(commands::interactive::InteractiveArgs),

    /// Print a saved JSON report as text, HTML or JSON
    Render(commands::render::RenderArgs),

    /// Calculate the financial impact of a saved JSON report
    Impact(commands::impact::ImpactArgs),

    /// Show probability and impact bar charts for a saved JSON report
    Charts(commands::charts::ChartsArgs),
}

impl Cli {
    /// Resolve the effective configuration: config file (if present), then
    /// command-line overrides.
    pub fn load_config(&self) -> Result<Config, crate::RiskregError> {
        let path = self
            .config
            .clone()
            .unwrap_or_else(paths::default_config_path);

        let mut config = if self.config.is_some() {
            config::load_config(&path)?
        } else {
            config::load_or_default(&path)?
        };
        tracing::debug!(path = %path.display(), "configuration resolved");

        if let Some(dir) = &self.output_dir {
            config.output.directory = dir.clone();
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["riskreg"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_explicit_config_must_exist() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.toml");
        let cli = Cli::try_parse_from(["riskreg", "--config", missing.to_str().unwrap()]).unwrap();
        assert!(matches!(
            cli.load_config(),
            Err(crate::RiskregError::Io(_))
        ));
    }

    #[test]
    fn test_output_dir_overrides_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[output]\ndirectory = \"/from/config\"\n").unwrap();

        let cli = Cli::try_parse_from([
            "riskreg",
            "--config",
            path.to_str().unwrap(),
            "--output-dir",
            "/from/flag",
        ])
        .unwrap();
        let config = cli.load_config().unwrap();
        assert_eq!(config.output.directory, PathBuf::from("/from/flag"));
    }
}
