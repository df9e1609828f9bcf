use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub finance: FinanceConfig,
    pub charts: ChartConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory where `<report>.html` / `<report>.json` and archives are written
    pub directory: PathBuf,
    /// Backup folder, relative to `directory` unless absolute
    pub backup_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinanceConfig {
    /// Pre-filled answer for the loss-per-unit prompt
    pub default_loss_per_unit: f64,
    pub currency_symbol: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Width of the longest bar, in characters
    pub width: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            backup_dir: PathBuf::from("backups"),
        }
    }
}

impl Default for FinanceConfig {
    fn default() -> Self {
        Self {
            default_loss_per_unit: 1000.0,
            currency_symbol: String::new(),
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self { width: 40 }
    }
}

impl OutputConfig {
    pub fn backup_path(&self) -> PathBuf {
        if self.backup_dir.is_absolute() {
            self.backup_dir.clone()
        } else {
            self.directory.join(&self.backup_dir)
        }
    }
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, crate::RiskregError> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| crate::RiskregError::Config(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

/// Load `path` if it exists, otherwise fall back to defaults
pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Config, crate::RiskregError> {
    if path.as_ref().exists() {
        load_config(path)
    } else {
        Ok(Config::default())
    }
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), crate::RiskregError> {
    let contents = toml::to_string_pretty(config)
        .map_err(|e| crate::RiskregError::Config(format!("Failed to serialize config: {}", e)))?;
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, contents)?;
    Ok(())
}
